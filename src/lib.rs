pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod raster;
pub mod term;
pub mod topology;

pub use error::{LamDrawError, Result};
pub use pipeline::{Drawing, Pipeline, PipelineOptions};
