//! Clockwise quadrant rotation.
//!
//! The image is split into four equal quadrants which each move one position
//! clockwise. Pixels keep their position within a quadrant:
//!
//! ```text
//! +----+----+        +----+----+
//! | TL | TR |        | BL | TL |
//! +----+----+   ->   +----+----+
//! | BL | BR |        | BR | TR |
//! +----+----+        +----+----+
//! ```

use super::TransformError;
use crate::matrix::PixelMatrix;

/// Rotate the four quadrants of `matrix` one step clockwise.
///
/// The input is only read; the result is a new matrix of the same size.
///
/// # Errors
///
/// Returns `InvalidDimensions` if the width or height is odd.
pub fn rotate_quadrants(matrix: &PixelMatrix) -> Result<PixelMatrix, TransformError> {
    let width = matrix.width();
    let height = matrix.height();
    if width % 2 != 0 || height % 2 != 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    let half_w = width / 2;
    let half_h = height / 2;
    let src = matrix.pixels();

    Ok(PixelMatrix::from_fn(width, height, |x, y| {
        // Inverse mapping: find which source pixel lands at (x, y)
        let (sx, sy) = match (x < half_w, y < half_h) {
            (true, true) => (x, y + half_h),   // top-left <- bottom-left
            (true, false) => (x + half_w, y),  // bottom-left <- bottom-right
            (false, false) => (x, y - half_h), // bottom-right <- top-right
            (false, true) => (x - half_w, y),  // top-right <- top-left
        };
        src[sy * width + sx]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each quadrant of a 2x2 image is a single pixel.
    fn quad_pixels() -> PixelMatrix {
        PixelMatrix::from_rows(vec![
            vec![[1, 1, 1], [2, 2, 2]], // TL, TR
            vec![[3, 3, 3], [4, 4, 4]], // BL, BR
        ])
        .unwrap()
    }

    #[test]
    fn test_two_by_two_rotation() {
        let result = rotate_quadrants(&quad_pixels()).unwrap();
        assert_eq!(result.get(0, 0), Some([3, 3, 3])); // TL <- BL
        assert_eq!(result.get(1, 0), Some([1, 1, 1])); // TR <- TL
        assert_eq!(result.get(1, 1), Some([2, 2, 2])); // BR <- TR
        assert_eq!(result.get(0, 1), Some([4, 4, 4])); // BL <- BR
    }

    #[test]
    fn test_positions_preserved_within_quadrant() {
        // 4x4: quadrant tag in red, in-quadrant position in green
        let m = PixelMatrix::from_fn(4, 4, |x, y| {
            let quadrant = (y / 2) * 2 + x / 2;
            let local = (y % 2) * 2 + x % 2;
            [quadrant as u8, local as u8, 0]
        });
        let result = rotate_quadrants(&m).unwrap();

        // Top-left quadrant now holds the old bottom-left (quadrant 2)
        assert_eq!(result.get(0, 0), Some([2, 0, 0]));
        assert_eq!(result.get(1, 1), Some([2, 3, 0]));
        // Top-right quadrant holds the old top-left (quadrant 0)
        assert_eq!(result.get(3, 0), Some([0, 1, 0]));
        // Bottom-right holds the old top-right (quadrant 1)
        assert_eq!(result.get(2, 3), Some([1, 2, 0]));
        // Bottom-left holds the old bottom-right (quadrant 3)
        assert_eq!(result.get(0, 2), Some([3, 0, 0]));
    }

    #[test]
    fn test_input_unchanged() {
        let m = quad_pixels();
        let snapshot = m.clone();
        let _ = rotate_quadrants(&m).unwrap();
        assert_eq!(m, snapshot);
    }

    #[test]
    fn test_odd_width_rejected() {
        let m = PixelMatrix::filled(3, 4, [0; 3]);
        assert_eq!(
            rotate_quadrants(&m),
            Err(TransformError::InvalidDimensions {
                width: 3,
                height: 4
            })
        );
    }

    #[test]
    fn test_odd_height_rejected() {
        let m = PixelMatrix::filled(4, 1, [0; 3]);
        assert!(matches!(
            rotate_quadrants(&m),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rectangular_rotation() {
        // 4 wide, 2 tall: quadrants are 2x1
        let m = PixelMatrix::from_fn(4, 2, |x, y| [x as u8, y as u8, 0]);
        let result = rotate_quadrants(&m).unwrap();
        assert_eq!(result.row(0).unwrap(), &[[0, 1, 0], [1, 1, 0], [0, 0, 0], [1, 0, 0]]);
        assert_eq!(result.row(1).unwrap(), &[[2, 1, 0], [3, 1, 0], [2, 0, 0], [3, 0, 0]]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
