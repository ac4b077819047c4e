//! 24-bit uncompressed bitmap decoder.

use super::types::{
    BitmapHeader, DecodeError, BITS_PER_PIXEL, BPP_OFFSET, BYTES_PER_PIXEL, COMPRESSION_OFFSET,
    HEADER_LEN, HEIGHT_OFFSET, WIDTH_OFFSET,
};
use crate::codec::read_le;
use crate::matrix::{Pixel, PixelMatrix};

/// Parse and validate the header geometry of a bitmap.
///
/// # Errors
///
/// - `MalformedHeader` if the buffer is shorter than the header, width or
///   height is zero or negative, or the buffer cannot hold every declared row
/// - `UnsupportedFormat` if the bit depth is not 24 or the data is compressed.
///   A header built by hand with only the width and height filled in has a
///   bit depth of 0 and is rejected here.
///
/// Width and height are signed 32-bit fields. Negative heights (top-down
/// bitmaps) are not supported.
pub fn read_header(data: &[u8]) -> Result<BitmapHeader, DecodeError> {
    if data.len() < HEADER_LEN {
        return Err(DecodeError::MalformedHeader(format!(
            "buffer is {} bytes, header needs {}",
            data.len(),
            HEADER_LEN
        )));
    }

    let field = |offset: usize, len: usize, name: &str| {
        read_le(data, offset, len)
            .ok_or_else(|| DecodeError::MalformedHeader(format!("{name} field unreadable")))
    };

    let width = field(WIDTH_OFFSET, 4, "width")? as i32;
    let height = field(HEIGHT_OFFSET, 4, "height")? as i32;
    if width <= 0 || height <= 0 {
        return Err(DecodeError::MalformedHeader(format!(
            "non-positive dimensions {width}x{height}"
        )));
    }
    let (width, height) = (width.unsigned_abs(), height.unsigned_abs());

    let bpp = field(BPP_OFFSET, 2, "bits per pixel")?;
    if bpp != BITS_PER_PIXEL {
        return Err(DecodeError::UnsupportedFormat(format!(
            "{bpp} bits per pixel (only {BITS_PER_PIXEL} is supported)"
        )));
    }

    let compression = field(COMPRESSION_OFFSET, 4, "compression")?;
    if compression != 0 {
        return Err(DecodeError::UnsupportedFormat(format!(
            "compression method {compression}"
        )));
    }

    let header = BitmapHeader::new(width, height);

    // Compute the required length without overflowing on absurd dimensions
    let required = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .map(|row| row + header.row_padding())
        .and_then(|stride| stride.checked_mul(height as usize))
        .and_then(|pixels| pixels.checked_add(HEADER_LEN));

    match required {
        Some(required) if required <= data.len() => Ok(header),
        Some(required) => Err(DecodeError::MalformedHeader(format!(
            "{width}x{height} image needs {required} bytes, buffer has {}",
            data.len()
        ))),
        None => Err(DecodeError::MalformedHeader(format!(
            "dimensions {width}x{height} overflow"
        ))),
    }
}

/// Decode a 24-bit uncompressed bitmap into a top-down pixel matrix.
///
/// Rows are stored bottom-up in the file, so the last stored row becomes row 0
/// of the matrix. Each stored `[blue, green, red]` triple is reordered to
/// `[red, green, blue]`. Row padding bytes are skipped without being read.
///
/// # Arguments
///
/// * `data` - The complete file contents
///
/// # Example
///
/// ```ignore
/// let bytes = std::fs::read("image.bmp")?;
/// let matrix = decode_bitmap(&bytes)?;
/// let [r, g, b] = matrix.get(0, 0).unwrap(); // top-left pixel
/// ```
pub fn decode_bitmap(data: &[u8]) -> Result<PixelMatrix, DecodeError> {
    let header = read_header(data)?;
    let width = header.width as usize;
    let height = header.height as usize;

    tracing::debug!(
        width,
        height,
        padding = header.row_padding(),
        "decoding bitmap"
    );

    let mut pixels: Vec<Pixel> = Vec::with_capacity(width * height);
    for y in 0..height {
        let start = header.row_offset(height - 1 - y);
        let row = &data[start..start + width * BYTES_PER_PIXEL];
        pixels.extend(
            row.chunks_exact(BYTES_PER_PIXEL)
                .map(|bgr| [bgr[2], bgr[1], bgr[0]]),
        );
    }

    PixelMatrix::from_pixels(width, height, pixels)
        .map_err(|e| DecodeError::MalformedHeader(e.to_string()))
}
