mod build_graph;
mod coalesce;
mod extract;
mod root;
mod segment;

pub use build_graph::BuildGraph;
pub use coalesce::Coalesce;
pub use extract::{ExtractLambda, LambdaGraph, Role, DEFAULT_STEP_BUDGET};
pub use root::{BreakAtEdge, FindRoot, RootData, RootedGraph};
pub use segment::FindMarks;

#[cfg(test)]
pub(crate) mod test_graphs;
