use crate::error::ImageError;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Node ink.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Edge ink.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Creates a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A row-major, channel-interleaved 8-bit image.
///
/// Only the first three channels (red, green, blue) are read; an alpha or
/// any further channel is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wraps a raw pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 channels are given or the buffer
    /// length is not `width * height * channels`.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        if channels < 3 {
            return Err(ImageError::TooFewChannels { channels });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(ImageError::SizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Creates a 3-channel bitmap filled with one color.
    #[must_use]
    pub fn new_fill(width: usize, height: usize, color: Color) -> Self {
        let data = [color.r, color.g, color.b].repeat(width * height);
        Self {
            width,
            height,
            channels: 3,
            data,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channels per pixel.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Color of the pixel at `(x, y)`. The caller keeps `x < width`, `y < height`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let ix = self.channels * (y * self.width + x);
        Color::new(self.data[ix], self.data[ix + 1], self.data[ix + 2])
    }

    /// Paints the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let ix = self.channels * (y * self.width + x);
        self.data[ix] = color.r;
        self.data[ix + 1] = color.g;
        self.data[ix + 2] = color.b;
    }
}
