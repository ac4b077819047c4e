//! Header geometry and error types for bitmap decoding.

use thiserror::Error;

/// Size of the file header plus info header.
pub const HEADER_LEN: usize = 54;

/// Byte offset where pixel data begins.
pub const PIXEL_DATA_OFFSET: usize = HEADER_LEN;

/// Bytes per stored pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// The only supported bit depth.
pub const BITS_PER_PIXEL: u32 = 24;

pub(crate) const WIDTH_OFFSET: usize = 18;
pub(crate) const HEIGHT_OFFSET: usize = 22;
pub(crate) const BPP_OFFSET: usize = 28;
pub(crate) const COMPRESSION_OFFSET: usize = 30;

/// Error types for bitmap decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Width or height unreadable or zero, or the buffer is too short for the
    /// declared geometry.
    #[error("Malformed bitmap header: {0}")]
    MalformedHeader(String),

    /// The header describes a variant outside the 24-bit uncompressed form.
    #[error("Unsupported bitmap format: {0}")]
    UnsupportedFormat(String),
}

/// Geometry read from a bitmap header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl BitmapHeader {
    /// Create a header for the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Padding bytes appended to each stored row.
    ///
    /// Formula: `(4 - (3 * width) % 4) % 4`
    #[inline]
    pub fn row_padding(&self) -> usize {
        (4 - (BYTES_PER_PIXEL * self.width as usize) % 4) % 4
    }

    /// Stored row length in bytes, including padding.
    #[inline]
    pub fn row_stride(&self) -> usize {
        BYTES_PER_PIXEL * self.width as usize + self.row_padding()
    }

    /// Total length of the pixel data section in bytes.
    pub fn pixel_data_len(&self) -> usize {
        self.row_stride() * self.height as usize
    }

    /// Minimum buffer length holding the header and all pixel rows.
    pub fn required_len(&self) -> usize {
        PIXEL_DATA_OFFSET + self.pixel_data_len()
    }

    /// Byte offset of stored row `file_row` (0 = bottom row of the image).
    #[inline]
    pub(crate) fn row_offset(&self, file_row: usize) -> usize {
        PIXEL_DATA_OFFSET + file_row * self.row_stride()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_padding() {
        // 3 * width bytes, rounded up to a multiple of 4
        assert_eq!(BitmapHeader::new(1, 1).row_padding(), 1);
        assert_eq!(BitmapHeader::new(2, 1).row_padding(), 2);
        assert_eq!(BitmapHeader::new(3, 1).row_padding(), 3);
        assert_eq!(BitmapHeader::new(4, 1).row_padding(), 0);
        assert_eq!(BitmapHeader::new(5, 1).row_padding(), 1);
    }

    #[test]
    fn test_row_stride_is_multiple_of_four() {
        for width in 1..=32 {
            let header = BitmapHeader::new(width, 1);
            assert_eq!(header.row_stride() % 4, 0, "width {}", width);
            assert!(header.row_stride() >= 3 * width as usize);
        }
    }

    #[test]
    fn test_required_len() {
        // 2x2: each row is 6 bytes + 2 padding
        let header = BitmapHeader::new(2, 2);
        assert_eq!(header.pixel_data_len(), 16);
        assert_eq!(header.required_len(), 70);
    }

    #[test]
    fn test_row_offset() {
        let header = BitmapHeader::new(3, 4);
        assert_eq!(header.row_offset(0), 54);
        assert_eq!(header.row_offset(1), 54 + 12);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::MalformedHeader("width is 0".to_string());
        assert_eq!(err.to_string(), "Malformed bitmap header: width is 0");
    }
}
