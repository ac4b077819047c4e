//! Bitmap encoding.
//!
//! This module provides functionality for:
//! - Writing a transformed matrix back into an existing bitmap's byte layout,
//!   leaving the header and row padding untouched
//! - Writing a complete 24-bit bitmap for a matrix that has no source file
//!
//! # Examples
//!
//! ```ignore
//! use bmpedit_core::decode::decode_bitmap;
//! use bmpedit_core::encode::encode_into;
//!
//! let original = std::fs::read("photo.bmp").unwrap();
//! let matrix = decode_bitmap(&original).unwrap();
//! let bytes = encode_into(&original, &matrix).unwrap();
//! assert_eq!(bytes, original);
//! ```

mod bmp;

pub use bmp::{encode_into, write_bitmap, EncodeError};
