//! Fixed-width unsigned integer decoding for header fields.
//!
//! Bitmap headers store their geometry as little-endian integers. The helpers
//! here turn a short byte slice into the integer it represents under a chosen
//! byte order.

use thiserror::Error;

/// Widest field the codec accepts, in bytes.
pub const MAX_FIELD_LEN: usize = 4;

/// Errors produced while decoding integer fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Zero bytes, or more bytes than fit in a `u32`.
    #[error("Invalid field length: {0} bytes (expected 1 to 4)")]
    InvalidLength(usize),
}

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first (bitmap header fields).
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Decode `bytes` as an unsigned integer.
///
/// For [`ByteOrder::Little`], `bytes[i]` contributes `bytes[i] * 256^i`.
/// For [`ByteOrder::Big`], the weighting is reversed.
///
/// # Example
///
/// ```ignore
/// use bmpedit_core::codec::{bytes_to_uint, ByteOrder};
///
/// assert_eq!(bytes_to_uint(&[0x36, 0x01], ByteOrder::Little).unwrap(), 310);
/// assert_eq!(bytes_to_uint(&[0x01, 0x36], ByteOrder::Big).unwrap(), 310);
/// ```
pub fn bytes_to_uint(bytes: &[u8], order: ByteOrder) -> Result<u32, CodecError> {
    if bytes.is_empty() || bytes.len() > MAX_FIELD_LEN {
        return Err(CodecError::InvalidLength(bytes.len()));
    }

    let fold = |acc: u32, &b: &u8| (acc << 8) | u32::from(b);
    let value = match order {
        ByteOrder::Little => bytes.iter().rev().fold(0, fold),
        ByteOrder::Big => bytes.iter().fold(0, fold),
    };
    Ok(value)
}

/// Read a little-endian `u32` field of `len` bytes starting at `offset`.
///
/// Returns `None` if the field runs past the end of `data` or `len` is not
/// a valid field length.
pub(crate) fn read_le(data: &[u8], offset: usize, len: usize) -> Option<u32> {
    let field = data.get(offset..offset.checked_add(len)?)?;
    bytes_to_uint(field, ByteOrder::Little).ok()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
