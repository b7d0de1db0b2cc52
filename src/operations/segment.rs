use std::collections::BTreeSet;

use crate::math::Point2;
use crate::raster::{Bitmap, Blob, Color, Label, MarkType, Marks};

/// Running totals for one blob while it is being filled.
struct Accumulator {
    kind: MarkType,
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

/// Segments a bitmap into blobs of same-colored ink.
///
/// Every non-white pixel belongs to exactly one blob: a maximal
/// 4-connected region of exactly one color. Red blobs are nodes, blue
/// blobs are edges, anything else is kept as `Unknown` and ignored
/// downstream.
pub struct FindMarks<'a> {
    bitmap: &'a Bitmap,
}

impl<'a> FindMarks<'a> {
    /// Creates a new `FindMarks` operation.
    #[must_use]
    pub fn new(bitmap: &'a Bitmap) -> Self {
        Self { bitmap }
    }

    /// Executes the segmentation. This cannot fail.
    #[must_use]
    pub fn execute(&self) -> Marks {
        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        let mut labels: Vec<Label> = vec![0; w * h];
        let mut acc: Vec<Accumulator> = Vec::new();

        for y in 0..h {
            for x in 0..w {
                if labels[y * w + x] != 0 {
                    continue;
                }
                let color = self.bitmap.pixel(x, y);
                if color == Color::WHITE {
                    continue;
                }
                let label = Label::try_from(acc.len() + 1).unwrap_or(Label::MAX);
                acc.push(self.fill(&mut labels, x, y, color, label));
            }
        }

        let mut blobs: Vec<Blob> = acc
            .iter()
            .zip(1..)
            .map(|(a, id)| {
                #[allow(clippy::cast_precision_loss)]
                let n = a.count as f64;
                Blob {
                    id,
                    kind: a.kind,
                    centroid: Point2::new(a.sum_x / n, a.sum_y / n),
                    pixel_count: a.count,
                    adjacent: BTreeSet::new(),
                }
            })
            .collect();

        link_adjacent(&labels, w, h, &mut blobs);

        tracing::debug!(width = w, height = h, blobs = blobs.len(), "segmented bitmap");

        Marks {
            width: w,
            height: h,
            labels,
            blobs,
        }
    }

    /// Iterative 4-connected flood fill from `(x, y)` over pixels of `color`.
    #[allow(clippy::cast_precision_loss)]
    fn fill(
        &self,
        labels: &mut [Label],
        x: usize,
        y: usize,
        color: Color,
        label: Label,
    ) -> Accumulator {
        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        let mut acc = Accumulator {
            kind: MarkType::of(color),
            sum_x: 0.0,
            sum_y: 0.0,
            count: 0,
        };
        let mut stack = vec![(x, y)];

        while let Some((px, py)) = stack.pop() {
            let ix = py * w + px;
            if labels[ix] != 0 || self.bitmap.pixel(px, py) != color {
                continue;
            }
            labels[ix] = label;
            acc.sum_x += px as f64;
            acc.sum_y += py as f64;
            acc.count += 1;

            if px + 1 < w {
                stack.push((px + 1, py));
            }
            if px > 0 {
                stack.push((px - 1, py));
            }
            if py + 1 < h {
                stack.push((px, py + 1));
            }
            if py > 0 {
                stack.push((px, py - 1));
            }
        }

        acc
    }
}

/// Records which blobs touch, looking at every pixel's right and down
/// neighbor. Adjacency is symmetric and never reflexive.
fn link_adjacent(labels: &[Label], w: usize, h: usize, blobs: &mut [Blob]) {
    let mut link = |here: Label, there: Label| {
        if there == 0 || there == here {
            return;
        }
        blobs[here as usize - 1].adjacent.insert(there);
        blobs[there as usize - 1].adjacent.insert(here);
    };

    for y in 0..h {
        for x in 0..w {
            let here = labels[y * w + x];
            if here == 0 {
                continue;
            }
            if x + 1 < w {
                link(here, labels[y * w + x + 1]);
            }
            if y + 1 < h {
                link(here, labels[(y + 1) * w + x]);
            }
        }
    }
}
