//! Row-major RGB pixel grid shared by the decoder, transforms and encoder.

use thiserror::Error;

/// A single pixel as `[red, green, blue]`.
pub type Pixel = [u8; 3];

/// Index of the red channel in a [`Pixel`].
pub const RED: usize = 0;
/// Index of the green channel in a [`Pixel`].
pub const GREEN: usize = 1;
/// Index of the blue channel in a [`Pixel`].
pub const BLUE: usize = 2;

/// Errors from building a matrix out of caller-supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row's length differs from the first row's.
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel count does not match `width * height`.
    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A top-down, row-major grid of RGB pixels.
///
/// Row 0 is the visual top row. Every row has exactly `width` pixels; this is
/// guaranteed by construction since the pixels are stored contiguously.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelMatrix {
    /// Create a matrix with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// Create a matrix by evaluating `f(x, y)` for every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a matrix from a flat row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, MatrixError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a matrix from nested rows, top row first.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            pixels.extend(r);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels (length of every row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether the matrix has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// Returns `false` (and changes nothing) if the position is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] = pixel;
        true
    }

    /// Row `y` as a slice, top row first.
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks_exact(0) panics, so zero-width matrices yield no rows
        let width = self.width.max(1);
        let rows = if self.width == 0 { 0 } else { self.height };
        self.pixels.chunks_exact(width).take(rows)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// All pixels in row-major order, mutably.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Every channel value in row-major, then red-green-blue order.
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.pixels.iter_mut().flatten()
    }
}
