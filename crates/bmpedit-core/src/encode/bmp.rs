//! 24-bit uncompressed bitmap encoder.

use crate::decode::{
    read_header, BitmapHeader, DecodeError, BITS_PER_PIXEL, BYTES_PER_PIXEL, HEADER_LEN,
    PIXEL_DATA_OFFSET,
};
use crate::matrix::PixelMatrix;
use thiserror::Error;

/// Size of the BITMAPINFOHEADER written by [`write_bitmap`].
const INFO_HEADER_LEN: u32 = 40;

/// 72 DPI expressed in pixels per metre.
const PIXELS_PER_METRE: u32 = 2835;

/// Errors that can occur during bitmap encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The original buffer could not be parsed.
    #[error(transparent)]
    Header(#[from] DecodeError),

    /// Matrix dimensions differ from the original header's.
    #[error(
        "Matrix is {actual_width}x{actual_height}, bitmap header declares {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: usize,
        actual_height: usize,
    },

    /// Width or height is zero or does not fit the header fields.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Write `matrix` into a copy of `original`, returning the new file bytes.
///
/// The matrix rows are written back in bottom-up file order with each pixel
/// stored as `[blue, green, red]`. Header bytes (offsets 0-53), row padding,
/// and anything after the last row are copied unchanged, so the output has
/// exactly the same length as `original`.
///
/// # Arguments
///
/// * `original` - The bytes of the file the matrix was decoded from
/// * `matrix` - Top-down pixel matrix with the same dimensions as the file
///
/// # Errors
///
/// - `Header` if `original` is not a valid 24-bit bitmap
/// - `DimensionMismatch` if the matrix does not match the header geometry
pub fn encode_into(original: &[u8], matrix: &PixelMatrix) -> Result<Vec<u8>, EncodeError> {
    let header = read_header(original)?;
    check_dimensions(&header, matrix)?;

    let mut data = original.to_vec();
    write_rows(&mut data, &header, matrix);
    Ok(data)
}

/// Write `matrix` as a complete 24-bit uncompressed bitmap.
///
/// Produces a 14-byte file header, a 40-byte info header, and zero-filled
/// row padding.
///
/// # Example
///
/// ```ignore
/// use bmpedit_core::encode::write_bitmap;
/// use bmpedit_core::matrix::PixelMatrix;
///
/// let matrix = PixelMatrix::filled(2, 2, [255, 0, 0]);
/// let bytes = write_bitmap(&matrix).unwrap();
/// assert_eq!(&bytes[0..2], b"BM");
/// assert_eq!(bytes.len(), 54 + 2 * 8);
/// ```
pub fn write_bitmap(matrix: &PixelMatrix) -> Result<Vec<u8>, EncodeError> {
    let invalid = || EncodeError::InvalidDimensions {
        width: matrix.width(),
        height: matrix.height(),
    };
    if matrix.width() == 0 || matrix.height() == 0 {
        return Err(invalid());
    }
    let width = u32::try_from(matrix.width()).map_err(|_| invalid())?;
    let height = u32::try_from(matrix.height()).map_err(|_| invalid())?;

    let header = BitmapHeader::new(width, height);
    let image_size = u32::try_from(header.pixel_data_len()).map_err(|_| invalid())?;
    let file_size = image_size
        .checked_add(HEADER_LEN as u32)
        .ok_or_else(invalid)?;

    let mut data = Vec::with_capacity(header.required_len());

    // BITMAPFILEHEADER
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&file_size.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes()); // reserved
    data.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER
    data.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&(BITS_PER_PIXEL as u16).to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    data.extend_from_slice(&image_size.to_le_bytes());
    data.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    data.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    data.extend_from_slice(&0u32.to_le_bytes()); // important colors
    debug_assert_eq!(data.len(), HEADER_LEN);

    data.resize(header.required_len(), 0);
    write_rows(&mut data, &header, matrix);
    Ok(data)
}

fn check_dimensions(header: &BitmapHeader, matrix: &PixelMatrix) -> Result<(), EncodeError> {
    if matrix.width() != header.width as usize || matrix.height() != header.height as usize {
        return Err(EncodeError::DimensionMismatch {
            expected_width: header.width,
            expected_height: header.height,
            actual_width: matrix.width(),
            actual_height: matrix.height(),
        });
    }
    Ok(())
}

/// Overwrite the pixel bytes of `data`, skipping padding.
///
/// `data` must already be at least `header.required_len()` bytes long.
fn write_rows(data: &mut [u8], header: &BitmapHeader, matrix: &PixelMatrix) {
    let row_bytes = header.width as usize * BYTES_PER_PIXEL;

    // Bottom matrix row goes first in the file
    for (file_row, row) in matrix.rows().rev().enumerate() {
        let start = header.row_offset(file_row);
        let dst = &mut data[start..start + row_bytes];
        for (bgr, &[r, g, b]) in dst.chunks_exact_mut(BYTES_PER_PIXEL).zip(row) {
            bgr.copy_from_slice(&[b, g, r]);
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_bitmap;
    use proptest::prelude::*;

    /// Strategy for a small matrix with arbitrary pixel values.
    fn matrix_strategy() -> impl Strategy<Value = PixelMatrix> {
        (1usize..=17, 1usize..=9).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<[u8; 3]>(), w * h)
                .prop_map(move |pixels| PixelMatrix::from_pixels(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: Decoding then re-encoding reproduces the file exactly.
        #[test]
        fn prop_identity_roundtrip(
            matrix in matrix_strategy(),
            padding_fill in any::<u8>(),
        ) {
            let mut original = write_bitmap(&matrix).unwrap();
            let header = read_header(&original).unwrap();
            // Fill padding with arbitrary bytes so they must be preserved
            for row in 0..header.height as usize {
                let pad_start = header.row_offset(row) + header.width as usize * 3;
                for b in &mut original[pad_start..pad_start + header.row_padding()] {
                    *b = padding_fill;
                }
            }

            let decoded = decode_bitmap(&original).unwrap();
            prop_assert_eq!(&decoded, &matrix);
            prop_assert_eq!(encode_into(&original, &decoded).unwrap(), original);
        }

        /// Property: Output length always equals the original's length.
        #[test]
        fn prop_encode_preserves_length(
            matrix in matrix_strategy(),
            trailing in 0usize..16,
        ) {
            let mut original = write_bitmap(&matrix).unwrap();
            original.extend(std::iter::repeat(0x5A).take(trailing));
            let replacement = PixelMatrix::filled(matrix.width(), matrix.height(), [1, 2, 3]);
            let encoded = encode_into(&original, &replacement).unwrap();
            prop_assert_eq!(encoded.len(), original.len());
        }
    }
}
