use super::Exp;

/// Binder printed before each run of abstractions unless another is given.
pub const DEFAULT_BINDER: &str = "λ";

/// A term with every application annotated with how many free variable
/// occurrences its function side holds.
///
/// Terms read off planar maps use their variables in binding order, so
/// names can be handed out left to right from this split alone. Variables
/// and abstractions keep the extractor's binder numbers so that a variable
/// next to an `Error` leaf still finds its own binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopedExp {
    /// Occurrence of the variable bound by abstraction `n`.
    Var(u32),
    Lam(u32, Box<ScopedExp>),
    App {
        func: Box<ScopedExp>,
        arg: Box<ScopedExp>,
        /// Free occurrences on the function side.
        split: usize,
    },
    Error,
}

/// Rewrites `exp` bottom-up, recording the split at every application.
#[must_use]
pub fn find_split(exp: &Exp) -> ScopedExp {
    scope(exp).0
}

/// Returns the scoped term and its free occurrence count. The count can go
/// negative under `Error` leaves, which free nothing.
fn scope(exp: &Exp) -> (ScopedExp, i64) {
    match exp {
        Exp::Var(n) => (ScopedExp::Var(*n), 1),
        Exp::Error => (ScopedExp::Error, 0),
        Exp::Lam(n, body) => {
            let (body, free) = scope(body);
            (ScopedExp::Lam(*n, Box::new(body)), free - 1)
        }
        Exp::App(func, arg) => {
            let (func, left) = scope(func);
            let (arg, right) = scope(arg);
            let split = usize::try_from(left).unwrap_or(0);
            (
                ScopedExp::App {
                    func: Box::new(func),
                    arg: Box::new(arg),
                    split,
                },
                left + right,
            )
        }
    }
}

/// Where a subterm sits in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Top,
    LamBody,
    AppFunc,
    AppArg,
}

/// Renders `exp` with minimal parentheses, naming binders `a`, `b`, ... in
/// the order they are printed.
///
/// A variable prints as the name of its own binder when that binder is in
/// scope, and otherwise as the first name its application splits leave it.
///
/// Directly nested abstractions share one `binder`; a body that is not an
/// abstraction is introduced by `.`. Abstractions are parenthesized as
/// either operand of an application, applications only as the argument.
#[must_use]
pub fn stringify(exp: &Exp, binder: &str) -> String {
    let mut printer = Printer {
        binder,
        counter: 0,
        bound: Vec::new(),
        out: String::new(),
    };
    printer.write(&find_split(exp), Position::Top, &[]);
    printer.out
}

fn name(n: u32) -> char {
    n.checked_add(97).and_then(char::from_u32).unwrap_or('?')
}

struct Printer<'a> {
    binder: &'a str,
    counter: u32,
    /// Binder numbers in scope with their printed names, innermost last.
    bound: Vec<(u32, char)>,
    out: String,
}

impl Printer<'_> {
    fn write(&mut self, exp: &ScopedExp, pos: Position, ctx: &[char]) {
        match exp {
            ScopedExp::Var(n) => {
                self.dot(pos);
                let own = self.bound.iter().rev().find(|(b, _)| b == n);
                match own.map(|&(_, c)| c).or_else(|| ctx.first().copied()) {
                    Some(c) => self.out.push(c),
                    None => self.out.push_str("ERROR"),
                }
            }
            ScopedExp::Error => {
                self.dot(pos);
                self.out.push_str("ERROR");
            }
            ScopedExp::Lam(n, body) => {
                let parens = matches!(pos, Position::AppFunc | Position::AppArg);
                if parens {
                    self.out.push('(');
                }
                if pos != Position::LamBody {
                    self.out.push_str(self.binder);
                }
                let v = name(self.counter);
                self.counter += 1;
                self.out.push(v);

                let mut inner = ctx.to_vec();
                inner.push(v);
                self.bound.push((*n, v));
                self.write(body, Position::LamBody, &inner);
                self.bound.pop();
                if parens {
                    self.out.push(')');
                }
            }
            ScopedExp::App { func, arg, split } => {
                self.dot(pos);
                let parens = pos == Position::AppArg;
                if parens {
                    self.out.push('(');
                }
                let split = (*split).min(ctx.len());
                self.write(func, Position::AppFunc, &ctx[..split]);
                self.out.push(' ');
                self.write(arg, Position::AppArg, &ctx[split..]);
                if parens {
                    self.out.push(')');
                }
            }
        }
    }

    fn dot(&mut self, pos: Position) {
        if pos == Position::LamBody {
            self.out.push('.');
        }
    }
}
