//! Unweighted 3x3 box blur.

use crate::matrix::PixelMatrix;

/// Fixed divisor for the 3x3 neighborhood.
const KERNEL_AREA: u32 = 9;

/// Blur `matrix` with a flat 3x3 box filter.
///
/// Each output channel is the sum of that channel over the 3x3 neighborhood,
/// divided by 9 and truncated. Out-of-bounds neighbors contribute 0 but the
/// divisor stays 9, so edge and corner pixels come out darker than the
/// interior.
///
/// The input is only read; the result is a new matrix of the same size.
pub fn blur(matrix: &PixelMatrix) -> PixelMatrix {
    let width = matrix.width();
    let height = matrix.height();
    let src = matrix.pixels();

    PixelMatrix::from_fn(width, height, |x, y| {
        let mut sum = [0u32; 3];

        let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);
        for ny in rows {
            let cols = x.saturating_sub(1)..=(x + 1).min(width - 1);
            for nx in cols {
                let p = src[ny * width + nx];
                for (s, &c) in sum.iter_mut().zip(&p) {
                    *s += u32::from(c);
                }
            }
        }

        // Sum is at most 9 * 255, so the quotient always fits a byte
        sum.map(|s| (s / KERNEL_AREA) as u8)
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
