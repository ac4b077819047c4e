//! Per-channel operations that rewrite the matrix in place.

use crate::matrix::{PixelMatrix, BLUE, RED};

/// Shade given to the first odd channel by [`custom_filter`].
pub const CUSTOM_FILTER_START_SHADE: u8 = 100;

/// Values at or above this become 255 under [`high_contrast`].
const CONTRAST_THRESHOLD: u8 = 128;

/// Replace every channel value `v` with `255 - v`.
pub fn invert(matrix: &mut PixelMatrix) {
    for c in matrix.channels_mut() {
        *c = 255 - *c;
    }
}

/// Threshold every channel: 0-127 becomes 0, 128-255 becomes 255.
pub fn high_contrast(matrix: &mut PixelMatrix) {
    for c in matrix.channels_mut() {
        *c = if *c >= CONTRAST_THRESHOLD { 255 } else { 0 };
    }
}

/// Gradient filter driven by a running shade counter.
///
/// Channels are visited in row-major order, then red-green-blue within each
/// pixel. Even values become 0. Each odd value takes the current shade, and
/// the shade then advances by one, so consecutive odd channels receive 100,
/// 101, 102 and so on. The shade is a byte and wraps from 255 back to 0.
///
/// The counter is the fold accumulator; nothing persists between calls.
pub fn custom_filter(matrix: &mut PixelMatrix) {
    matrix
        .channels_mut()
        .fold(CUSTOM_FILTER_START_SHADE, |shade, c| {
            if *c % 2 == 0 {
                *c = 0;
                shade
            } else {
                *c = shade;
                shade.wrapping_add(1)
            }
        });
}

/// Exchange the red and blue channels of every pixel; green is untouched.
pub fn swap_red_blue(matrix: &mut PixelMatrix) {
    for pixel in matrix.pixels_mut() {
        pixel.swap(RED, BLUE);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn matrix_strategy() -> impl Strategy<Value = PixelMatrix> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<[u8; 3]>(), w * h)
                .prop_map(move |pixels| PixelMatrix::from_pixels(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: invert is its own inverse.
        #[test]
        fn prop_invert_self_inverse(original in matrix_strategy()) {
            let mut m = original.clone();
            invert(&mut m);
            invert(&mut m);
            prop_assert_eq!(m, original);
        }

        /// Property: high_contrast is idempotent.
        #[test]
        fn prop_high_contrast_idempotent(original in matrix_strategy()) {
            let mut once = original.clone();
            high_contrast(&mut once);
            let mut twice = once.clone();
            high_contrast(&mut twice);
            prop_assert_eq!(twice, once);
        }

        /// Property: high_contrast only produces 0 or 255.
        #[test]
        fn prop_high_contrast_binary(original in matrix_strategy()) {
            let mut m = original;
            high_contrast(&mut m);
            for p in m.pixels() {
                for &c in p {
                    prop_assert!(c == 0 || c == 255);
                }
            }
        }

        /// Property: swap_red_blue is its own inverse and leaves green alone.
        #[test]
        fn prop_swap_self_inverse(original in matrix_strategy()) {
            let mut m = original.clone();
            swap_red_blue(&mut m);
            for (a, b) in m.pixels().iter().zip(original.pixels()) {
                prop_assert_eq!(a[1], b[1]);
            }
            swap_red_blue(&mut m);
            prop_assert_eq!(m, original);
        }

        /// Property: custom_filter zeroes exactly the even channels.
        #[test]
        fn prop_custom_filter_zeroes_even(original in matrix_strategy()) {
            let mut m = original.clone();
            custom_filter(&mut m);
            let before = original.pixels().iter().flatten();
            let after = m.pixels().iter().flatten();
            for (&b, &a) in before.zip(after) {
                if b % 2 == 0 {
                    prop_assert_eq!(a, 0);
                }
            }
        }
    }
}
