use slotmap::SecondaryMap;

use crate::error::{ExtractionError, Result};
use crate::geometry::ArrowHead;
use crate::term::Exp;
use crate::topology::{EdgeEnd, EdgeId, Graph, Side, VertexId};

use super::root::{RootData, RootedGraph};

/// Number of vertex visits an extraction may make unless told otherwise.
pub const DEFAULT_STEP_BUDGET: usize = 100;

/// What a vertex stands for in the extracted term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Application node.
    App,
    /// Abstraction binding the variable with this number.
    Lam(u32),
}

/// A rooted graph annotated with the term it spells.
#[derive(Debug, Clone)]
pub struct LambdaGraph {
    graph: Graph,
    roles: SecondaryMap<VertexId, Role>,
    downstream: SecondaryMap<EdgeId, Side>,
    root: RootData,
    exp: Exp,
    issues: Vec<ExtractionError>,
}

impl LambdaGraph {
    /// The rooted graph the term was read from.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Role assigned to a vertex, if the traversal reached it.
    #[must_use]
    pub fn role(&self, vertex: VertexId) -> Option<Role> {
        self.roles.get(vertex).copied()
    }

    /// Every assigned role, in slot order.
    pub fn roles(&self) -> impl Iterator<Item = (VertexId, Role)> + '_ {
        self.roles.iter().map(|(id, role)| (id, *role))
    }

    /// The side of `edge` the term flows toward, if the edge was reached.
    #[must_use]
    pub fn downstream(&self, edge: EdgeId) -> Option<Side> {
        self.downstream.get(edge).copied()
    }

    #[must_use]
    pub fn root(&self) -> &RootData {
        &self.root
    }

    /// The extracted term. May contain `Error` leaves; see [`Self::issues`].
    #[must_use]
    pub fn exp(&self) -> &Exp {
        &self.exp
    }

    /// Problems met during the traversal, in the order they were found.
    #[must_use]
    pub fn issues(&self) -> &[ExtractionError] {
        &self.issues
    }

    /// Arrowheads for every directed edge, pointing downstream.
    #[must_use]
    pub fn arrow_heads(&self) -> Vec<ArrowHead> {
        self.downstream
            .iter()
            .filter_map(|(id, side)| self.graph.edge(id).ok().map(|e| e.shape.arrow_heads(*side)))
            .flatten()
            .collect()
    }
}

/// Reads a rooted trivalent graph as a lambda term.
///
/// The root is an abstraction whose body hangs off its second end. Every
/// other vertex is entered through one of its ends; of the two ends that
/// follow clockwise, the first is `left` and the second `right`. Once
/// `right` is used up, if the vertex across it can still be reached over
/// unused edges the vertex is an abstraction with its body across `right`
/// and `left` leading back to its variable occurrence. Otherwise it is an
/// application with the function across `right` and the argument across
/// `left`.
///
/// Each visit costs one step. Malformed input ends up as `Error` leaves in
/// the term together with a matching entry in [`LambdaGraph::issues`].
#[derive(Debug)]
pub struct ExtractLambda {
    step_budget: usize,
}

impl Default for ExtractLambda {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
        }
    }
}

impl ExtractLambda {
    /// Creates a new `ExtractLambda` operation with the default step budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertex visits allowed.
    #[must_use]
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = steps;
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::MalformedRoot`] unless the root has exactly
    /// two ends, or a graph error if the graph refers to missing entities.
    pub fn execute(&self, rooted: &RootedGraph) -> Result<LambdaGraph> {
        let graph = &rooted.graph;
        let root = rooted.root.root;
        let ends = &graph.vertex(root)?.ends;
        let [left, right] = ends[..] else {
            return Err(ExtractionError::MalformedRoot {
                degree: ends.len(),
            }
            .into());
        };

        let mut walk = Walk {
            graph,
            roles: SecondaryMap::new(),
            downstream: SecondaryMap::new(),
            steps_left: self.step_budget,
            budget: self.step_budget,
            next_name: 1,
            issues: Vec::new(),
        };
        walk.roles.insert(root, Role::Lam(0));
        walk.mark_away(left);
        walk.mark_toward(right);
        let body = walk.run(graph.across(right)?)?;
        let exp = Exp::lam(0, body);

        tracing::debug!(
            lambdas = walk.next_name,
            issues = walk.issues.len(),
            "extracted term"
        );

        Ok(LambdaGraph {
            graph: graph.clone(),
            roles: walk.roles,
            downstream: walk.downstream,
            root: rooted.root.clone(),
            exp,
            issues: walk.issues,
        })
    }
}

/// Pending work on the traversal stack.
enum Task {
    /// Read the subterm at `vertex`, entered through `incoming`.
    Visit { vertex: VertexId, incoming: EdgeEnd },
    /// Wrap the last output as the body of abstraction `n`.
    BuildLam(u32),
    /// Combine the last two outputs as function and argument.
    BuildApp,
}

/// Scratch state for one extraction.
struct Walk<'g> {
    graph: &'g Graph,
    roles: SecondaryMap<VertexId, Role>,
    downstream: SecondaryMap<EdgeId, Side>,
    steps_left: usize,
    budget: usize,
    next_name: u32,
    issues: Vec<ExtractionError>,
}

impl Walk<'_> {
    /// Reads the term rooted at `start`, visiting vertices in the same order
    /// as a recursive descent that reads the function before the argument.
    fn run(&mut self, start: (VertexId, EdgeEnd)) -> Result<Exp> {
        let mut tasks = vec![Task::Visit {
            vertex: start.0,
            incoming: start.1,
        }];
        let mut out: Vec<Exp> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit { vertex, incoming } => {
                    if let Some(exp) = self.visit(vertex, incoming, &mut tasks)? {
                        out.push(exp);
                    }
                }
                Task::BuildLam(name) => {
                    let body = out.pop().unwrap_or(Exp::Error);
                    out.push(Exp::lam(name, body));
                }
                Task::BuildApp => {
                    let arg = out.pop().unwrap_or(Exp::Error);
                    let func = out.pop().unwrap_or(Exp::Error);
                    out.push(Exp::app(func, arg));
                }
            }
        }

        Ok(out.pop().unwrap_or(Exp::Error))
    }

    /// Handles one vertex. Returns a finished leaf, or `None` after pushing
    /// the tasks that will build this vertex's subterm.
    fn visit(
        &mut self,
        vertex: VertexId,
        incoming: EdgeEnd,
        tasks: &mut Vec<Task>,
    ) -> Result<Option<Exp>> {
        if self.steps_left == 0 {
            return Ok(Some(self.fail(ExtractionError::BudgetExhausted {
                budget: self.budget,
            })));
        }
        self.steps_left -= 1;

        match self.roles.get(vertex).copied() {
            Some(Role::Lam(name)) => return Ok(Some(Exp::var(name))),
            Some(Role::App) => {
                return Ok(Some(
                    self.fail(ExtractionError::RevisitedApplication { vertex }),
                ))
            }
            None => {}
        }

        let graph = self.graph;
        let ends = &graph.vertex(vertex)?.ends;
        if ends.len() != 3 {
            let degree = ends.len();
            return Ok(Some(
                self.fail(ExtractionError::NotTrivalent { vertex, degree }),
            ));
        }
        let Some(k) = ends.iter().position(|&e| e == incoming) else {
            return Ok(Some(
                self.fail(ExtractionError::IncomingNotIncident { vertex }),
            ));
        };
        let left = ends[(k + 1) % 3];
        let right = ends[(k + 2) % 3];

        self.mark_toward(right);
        let (body, body_in) = graph.across(right)?;
        if self.connected(vertex, body)? {
            let name = self.next_name;
            self.next_name += 1;
            self.roles.insert(vertex, Role::Lam(name));
            self.mark_away(left);
            tasks.push(Task::BuildLam(name));
            tasks.push(Task::Visit {
                vertex: body,
                incoming: body_in,
            });
        } else {
            self.roles.insert(vertex, Role::App);
            self.mark_toward(left);
            let (arg, arg_in) = graph.across(left)?;
            tasks.push(Task::BuildApp);
            tasks.push(Task::Visit {
                vertex: arg,
                incoming: arg_in,
            });
            tasks.push(Task::Visit {
                vertex: body,
                incoming: body_in,
            });
        }
        Ok(None)
    }

    /// Whether `to` can be reached from `from` over edges not yet given a
    /// direction.
    fn connected(&self, from: VertexId, to: VertexId) -> Result<bool> {
        if from == to {
            return Ok(true);
        }
        let mut seen: SecondaryMap<VertexId, ()> = SecondaryMap::new();
        seen.insert(from, ());
        let mut stack = vec![from];
        while let Some(v) = stack.pop() {
            for &end in &self.graph.vertex(v)?.ends {
                if self.downstream.contains_key(end.edge) {
                    continue;
                }
                let (next, _) = self.graph.across(end)?;
                if next == to {
                    return Ok(true);
                }
                if seen.insert(next, ()).is_none() {
                    stack.push(next);
                }
            }
        }
        Ok(false)
    }

    /// Directs the edge of `end` into the vertex holding `end`. An edge keeps
    /// the first direction it is given.
    fn mark_toward(&mut self, end: EdgeEnd) {
        if !self.downstream.contains_key(end.edge) {
            self.downstream.insert(end.edge, end.side);
        }
    }

    /// Directs the edge of `end` away from the vertex holding `end`.
    fn mark_away(&mut self, end: EdgeEnd) {
        self.mark_toward(end.opposite());
    }

    fn fail(&mut self, issue: ExtractionError) -> Exp {
        tracing::warn!(%issue, "cannot read part of the drawing");
        self.issues.push(issue);
        Exp::Error
    }
}
