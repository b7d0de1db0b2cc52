use lamdraw::raster::{Bitmap, Color};

/// Half the side of a painted node square.
pub const NODE_HALF: i64 = 12;
/// Pixels within this distance of an edge's center line are inked.
pub const STROKE_RADIUS: f64 = 1.5;

/// Paints a drawing the way a user would: blue strokes between node
/// centers, red squares over their ends.
///
/// Strokes and squares are point-symmetric about the stroke midpoint, so
/// every edge blob's centroid lands exactly on it.
pub fn draw(width: usize, height: usize, nodes: &[(i64, i64)], edges: &[(usize, usize)]) -> Bitmap {
    let mut bmp = Bitmap::new_fill(width, height, Color::WHITE);
    for &(i, j) in edges {
        stroke(&mut bmp, nodes[i], nodes[j], STROKE_RADIUS);
    }
    for &center in nodes {
        square(&mut bmp, center, NODE_HALF, Color::RED);
    }
    bmp
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn stroke(bmp: &mut Bitmap, a: (i64, i64), b: (i64, i64), radius: f64) {
    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (dx, dy) = ((b.0 - a.0) as f64, (b.1 - a.1) as f64);
    let len2 = dx * dx + dy * dy;
    let reach = radius.ceil() as i64;
    for y in a.1.min(b.1) - reach..=a.1.max(b.1) + reach {
        for x in a.0.min(b.0) - reach..=a.0.max(b.0) + reach {
            let (fx, fy) = (x as f64, y as f64);
            let t = if len2 > 0.0 {
                (((fx - ax) * dx + (fy - ay) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (px, py) = (ax + t * dx, ay + t * dy);
            let (ex, ey) = (fx - px, fy - py);
            if ex * ex + ey * ey <= radius * radius {
                put(bmp, x, y, Color::BLUE);
            }
        }
    }
}

pub fn square(bmp: &mut Bitmap, center: (i64, i64), half: i64, color: Color) {
    for y in center.1 - half..=center.1 + half {
        for x in center.0 - half..=center.0 + half {
            put(bmp, x, y, color);
        }
    }
}

fn put(bmp: &mut Bitmap, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
        bmp.set_pixel(x, y, color);
    }
}

/// Apex, bottom-left, bottom-right and center, all joined.
pub fn tetrahedron() -> Bitmap {
    draw(
        400,
        320,
        &[(200, 40), (40, 280), (360, 280), (200, 190)],
        &[(0, 1), (0, 3), (0, 2), (1, 2), (1, 3), (2, 3)],
    )
}

/// An outer diamond around an inner one, with spokes between matching
/// corners.
pub fn cube() -> Bitmap {
    draw(
        400,
        400,
        &[
            (200, 20),
            (380, 200),
            (200, 380),
            (20, 200),
            (200, 120),
            (280, 200),
            (200, 280),
            (120, 200),
        ],
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ],
    )
}

/// Two nodes joined by a straight stroke and by two strokes that each bend
/// through a degree-2 node.
pub fn degree2() -> Bitmap {
    draw(
        300,
        300,
        &[(150, 30), (150, 270), (40, 150), (260, 150)],
        &[(0, 1), (0, 2), (2, 1), (0, 3), (3, 1)],
    )
}

/// A square with both diagonals, drawn through a node where they cross.
pub fn crossed_square() -> Bitmap {
    draw(
        260,
        260,
        &[(30, 30), (230, 30), (130, 130), (30, 230), (230, 230)],
        &[(0, 1), (1, 4), (4, 3), (3, 0), (0, 2), (2, 4), (1, 2), (2, 3)],
    )
}

/// An outer triangle around an inner one, with spokes between matching
/// corners.
pub fn prism() -> Bitmap {
    draw(
        400,
        360,
        &[(200, 20), (20, 340), (380, 340), (200, 130), (130, 270), (270, 270)],
        &[
            (0, 1),
            (1, 2),
            (2, 0),
            (3, 4),
            (4, 5),
            (5, 3),
            (0, 3),
            (1, 4),
            (2, 5),
        ],
    )
}

/// The tetrahedron with a closed diamond of bends drawn beside it.
pub fn tetrahedron_with_ring() -> Bitmap {
    draw(
        560,
        320,
        &[
            (200, 40),
            (40, 280),
            (360, 280),
            (200, 190),
            (480, 80),
            (540, 160),
            (480, 240),
            (420, 160),
        ],
        &[
            (0, 1),
            (0, 3),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
        ],
    )
}
