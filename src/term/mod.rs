//! Lambda terms read off a rooted trivalent map.

mod print;

use std::fmt;

pub use print::{find_split, stringify, ScopedExp, DEFAULT_BINDER};

/// A lambda term.
///
/// Variables and binders carry the number the extractor gave the binding
/// abstraction. The printer names binders afresh in print order and uses
/// the numbers only to match each variable with its binder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Exp {
    /// Occurrence of the variable bound by abstraction `n`.
    Var(u32),
    /// Abstraction `n` with its body.
    Lam(u32, Box<Exp>),
    /// Application of a function to an argument.
    App(Box<Exp>, Box<Exp>),
    /// A part of the drawing that could not be read.
    Error,
}

impl Exp {
    #[must_use]
    pub fn var(name: u32) -> Self {
        Self::Var(name)
    }

    #[must_use]
    pub fn lam(name: u32, body: Exp) -> Self {
        Self::Lam(name, Box::new(body))
    }

    #[must_use]
    pub fn app(func: Exp, arg: Exp) -> Self {
        Self::App(Box::new(func), Box::new(arg))
    }

    /// Whether an `Error` leaf occurs anywhere in the term.
    #[must_use]
    pub fn has_error(&self) -> bool {
        let mut stack = vec![self];
        while let Some(exp) = stack.pop() {
            match exp {
                Self::Error => return true,
                Self::Var(_) => {}
                Self::Lam(_, body) => stack.push(body),
                Self::App(func, arg) => {
                    stack.push(func);
                    stack.push(arg);
                }
            }
        }
        false
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self, DEFAULT_BINDER))
    }
}
