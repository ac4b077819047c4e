//! bmpedit Core - 24-bit bitmap codec and pixel transforms
//!
//! This crate decodes restricted 24-bit uncompressed bitmaps into a top-down
//! RGB [`PixelMatrix`], runs one of six pixel transforms on it, and writes the
//! result back into the original file layout.
//!
//! # Data Flow
//!
//! 1. [`decode::decode_bitmap`] reads header geometry and pixel rows
//! 2. [`transform::Operation::apply`] runs one transform
//! 3. [`encode::encode_into`] writes pixels back, header and padding untouched
//!
//! [`pipeline`] chains the three stages over byte buffers and files.

pub mod codec;
pub mod decode;
pub mod encode;
pub mod matrix;
pub mod pipeline;
pub mod transform;

pub use decode::{decode_bitmap, BitmapHeader, DecodeError};
pub use encode::{encode_into, write_bitmap, EncodeError};
pub use matrix::{Pixel, PixelMatrix};
pub use pipeline::{transform_bitmap, transform_file, Error};
pub use transform::{Operation, TransformError};
