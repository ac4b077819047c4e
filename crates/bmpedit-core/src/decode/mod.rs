//! Bitmap decoding.
//!
//! This module turns the raw bytes of a restricted 24-bit uncompressed bitmap
//! into a top-down [`PixelMatrix`](crate::matrix::PixelMatrix).
//!
//! # File Layout
//!
//! - Width at byte 18 and height at byte 22 (4 bytes each, little-endian)
//! - Pixel data from byte 54, bottom row first
//! - 3 bytes per pixel in blue-green-red order
//! - Each row padded with unused bytes to a multiple of 4
//!
//! # Examples
//!
//! ```ignore
//! use bmpedit_core::decode::decode_bitmap;
//!
//! let bytes = std::fs::read("photo.bmp").unwrap();
//! let matrix = decode_bitmap(&bytes).unwrap();
//! println!("Decoded {}x{} image", matrix.width(), matrix.height());
//! ```

mod bmp;
mod types;

pub use bmp::{decode_bitmap, read_header};
pub use types::{
    BitmapHeader, DecodeError, BITS_PER_PIXEL, BYTES_PER_PIXEL, HEADER_LEN, PIXEL_DATA_OFFSET,
};
