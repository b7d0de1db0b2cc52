//! Runs every stage over one bitmap.

use crate::error::Result;
use crate::operations::{
    BreakAtEdge, BuildGraph, Coalesce, ExtractLambda, FindMarks, FindRoot, LambdaGraph,
    RootedGraph, DEFAULT_STEP_BUDGET,
};
use crate::raster::{Bitmap, Marks};
use crate::term::{stringify, DEFAULT_BINDER};
use crate::topology::{EdgeEnd, Graph};

/// Settings shared by a pipeline's runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Vertex visits allowed per extraction.
    pub step_budget: usize,
    /// Binder printed before abstractions.
    pub binder: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            binder: DEFAULT_BINDER.to_owned(),
        }
    }
}

/// Every intermediate result of reading one drawing.
#[derive(Debug, Clone)]
pub struct Drawing {
    pub marks: Marks,
    /// The graph as drawn, bends and crossings included.
    pub graph: Graph,
    pub coalesced: Graph,
    pub rooted: RootedGraph,
    pub lambda: LambdaGraph,
    /// The printed term.
    pub term: String,
}

/// Reads drawings as lambda terms.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    #[must_use]
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Segments, builds, coalesces, roots at the topmost vertex, extracts
    /// and prints.
    ///
    /// # Errors
    ///
    /// Returns an error if coalescing rejects a vertex, if there is nothing
    /// to root, or if extraction cannot start.
    pub fn run(&self, bitmap: &Bitmap) -> Result<Drawing> {
        let marks = FindMarks::new(bitmap).execute();
        let graph = BuildGraph::new(&marks).execute()?;
        let coalesced = Coalesce::new().execute(&graph)?;
        let rooted = FindRoot::new().execute(&coalesced)?;
        self.finish(marks, graph, coalesced, rooted)
    }

    /// Re-reads `drawing` with the root forced onto `end`, usually one of
    /// the drawing's `other_roots`.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not in the coalesced graph or
    /// extraction cannot start.
    pub fn reroot(&self, drawing: &Drawing, end: EdgeEnd) -> Result<Drawing> {
        let rooted = BreakAtEdge::new(end).execute(&drawing.coalesced)?;
        self.finish(
            drawing.marks.clone(),
            drawing.graph.clone(),
            drawing.coalesced.clone(),
            rooted,
        )
    }

    fn finish(
        &self,
        marks: Marks,
        graph: Graph,
        coalesced: Graph,
        rooted: RootedGraph,
    ) -> Result<Drawing> {
        let lambda = ExtractLambda::new()
            .with_step_budget(self.options.step_budget)
            .execute(&rooted)?;
        let term = stringify(lambda.exp(), &self.options.binder);
        tracing::debug!(%term, issues = lambda.issues().len(), "read drawing");
        Ok(Drawing {
            marks,
            graph,
            coalesced,
            rooted,
            lambda,
            term,
        })
    }
}
