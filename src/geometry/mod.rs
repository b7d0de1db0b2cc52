mod chain;
pub mod curve;
mod shape;

pub use chain::{Chain, INNER_TENSION, OUTER_TENSION};
pub use curve::{ArcSegment, Cubic, Curve};
pub use shape::{ArrowHead, EdgeShape, ROOT_CHOICE_OFFSET};
