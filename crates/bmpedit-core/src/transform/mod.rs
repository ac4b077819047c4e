//! Pixel transform operations.
//!
//! Every operation maps a [`PixelMatrix`] to a matrix of the same width and
//! height. Channel values stay within 0-255 by construction.
//!
//! # Ownership
//!
//! - Per-channel operations (`invert`, `high_contrast`, `custom_filter`,
//!   `swap_red_blue`) borrow the matrix mutably and return nothing
//! - Neighborhood operations (`rotate_quadrants`, `blur`) read the input and
//!   return a freshly allocated matrix
//!
//! [`Operation::apply`] hides the difference: it takes the matrix by value and
//! always returns the resulting matrix.

mod blur;
mod channel;
mod quadrants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matrix::PixelMatrix;

pub use blur::blur;
pub use channel::{custom_filter, high_contrast, invert, swap_red_blue, CUSTOM_FILTER_START_SHADE};
pub use quadrants::rotate_quadrants;

/// Errors from selecting or running a transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// `rotate_quadrants` needs an even width and height.
    #[error("Invalid dimensions: {width}x{height} (width and height must be even)")]
    InvalidDimensions { width: usize, height: usize },

    /// The selector names none of the supported operations.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// The closed set of supported transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Each channel `v` becomes `255 - v`.
    Invert,
    /// Each channel becomes 255 if it is at least 128, else 0.
    HighContrast,
    /// Quadrants move one position clockwise.
    RotateQuadrants,
    /// Even channels become 0, odd channels take a rising shade.
    CustomFilter,
    /// Red and blue channels are exchanged.
    SwapRedBlue,
    /// 3x3 box blur with a fixed divisor of 9.
    Blur,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::Invert,
        Operation::HighContrast,
        Operation::RotateQuadrants,
        Operation::CustomFilter,
        Operation::SwapRedBlue,
        Operation::Blur,
    ];

    /// The selector string naming this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Invert => "invert",
            Operation::HighContrast => "high_contrast",
            Operation::RotateQuadrants => "rotate_quadrants",
            Operation::CustomFilter => "custom_filter",
            Operation::SwapRedBlue => "swap_red_blue",
            Operation::Blur => "blur",
        }
    }

    /// Run the operation, consuming `matrix` and returning the result.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use bmpedit_core::matrix::PixelMatrix;
    /// use bmpedit_core::transform::Operation;
    ///
    /// let matrix = PixelMatrix::filled(2, 2, [10, 20, 30]);
    /// let inverted = Operation::Invert.apply(matrix).unwrap();
    /// assert_eq!(inverted.get(0, 0), Some([245, 235, 225]));
    /// ```
    pub fn apply(self, mut matrix: PixelMatrix) -> Result<PixelMatrix, TransformError> {
        match self {
            Operation::Invert => invert(&mut matrix),
            Operation::HighContrast => high_contrast(&mut matrix),
            Operation::CustomFilter => custom_filter(&mut matrix),
            Operation::SwapRedBlue => swap_red_blue(&mut matrix),
            Operation::RotateQuadrants => return rotate_quadrants(&matrix),
            Operation::Blur => return Ok(blur(&matrix)),
        }
        Ok(matrix)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| TransformError::UnknownOperation(s.to_string()))
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for Operation {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.name()))
    }
}
