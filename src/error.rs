use thiserror::Error;

use crate::topology::{EdgeId, VertexId};

/// Top-level error type for the lamdraw pipeline.
#[derive(Debug, Error)]
pub enum LamDrawError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Errors related to input bitmaps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("bitmap needs at least 3 channels, got {channels}")]
    TooFewChannels { channels: usize },

    #[error("bitmap buffer has {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Errors related to graph construction and surgery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("edge {edge:?} is not incident to vertex {vertex:?}")]
    DetachedEdgeEnd { vertex: VertexId, edge: EdgeId },

    #[error("degree-4 vertex {vertex:?} is not a simple two-strand crossing")]
    AmbiguousCrossing { vertex: VertexId },

    #[error("graph has no vertices to root")]
    EmptyGraph,

    #[error("root candidate {vertex:?} has no incident edges")]
    NoIncidentEdges { vertex: VertexId },
}

/// Problems found while reading a rooted graph as a lambda term.
///
/// Only [`ExtractionError::MalformedRoot`] aborts an extraction; the others
/// are collected alongside the `Error` leaves they produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("root vertex has {degree} edge ends, expected 2")]
    MalformedRoot { degree: usize },

    #[error("vertex {vertex:?} has {degree} edge ends, expected 3")]
    NotTrivalent { vertex: VertexId, degree: usize },

    #[error("application vertex {vertex:?} reached twice")]
    RevisitedApplication { vertex: VertexId },

    #[error("vertex {vertex:?} was entered through an edge it does not hold")]
    IncomingNotIncident { vertex: VertexId },

    #[error("step budget of {budget} exhausted")]
    BudgetExhausted { budget: usize },
}

/// Convenience type alias for results using [`LamDrawError`].
pub type Result<T> = std::result::Result<T, LamDrawError>;
