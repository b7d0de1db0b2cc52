use std::collections::BTreeSet;

use crate::math::Point2;

use super::bitmap::Color;

/// Blob label. `0` marks background; blobs are numbered from `1`.
pub type Label = u32;

/// What a blob of ink stands for, judged by its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkType {
    Node,
    Edge,
    Unknown,
}

impl MarkType {
    /// Classifies an ink color by exact match.
    #[must_use]
    pub fn of(color: Color) -> Self {
        if color == Color::RED {
            Self::Node
        } else if color == Color::BLUE {
            Self::Edge
        } else {
            Self::Unknown
        }
    }
}

/// A maximal 4-connected region of same-colored ink.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub id: Label,
    pub kind: MarkType,
    /// Mean of the member pixel coordinates.
    pub centroid: Point2,
    pub pixel_count: usize,
    /// Other blobs touching this one, ascending.
    pub adjacent: BTreeSet<Label>,
}

/// Result of segmenting a bitmap into blobs.
#[derive(Debug, Clone, PartialEq)]
pub struct Marks {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) labels: Vec<Label>,
    pub(crate) blobs: Vec<Blob>,
}

impl Marks {
    /// Grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Label of the pixel at `(x, y)`, `0` for background or out of bounds.
    #[must_use]
    pub fn label_at(&self, x: usize, y: usize) -> Label {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.labels[y * self.width + x]
    }

    /// The row-major label grid.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Blob with the given label.
    #[must_use]
    pub fn blob(&self, id: Label) -> Option<&Blob> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.blobs.get(idx)
    }

    /// All blobs in label order.
    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Number of blobs found.
    #[must_use]
    pub fn count(&self) -> usize {
        self.blobs.len()
    }
}
