mod bitmap;
mod marks;

pub use bitmap::{Bitmap, Color};
pub use marks::{Blob, Label, MarkType, Marks};
