//! Decode, transform, and re-encode a bitmap in one call.
//!
//! Each stage runs to completion before the next starts. Nothing is written to
//! disk until decoding, the transform, and encoding have all succeeded, so a
//! failure never leaves a partial output file behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::{decode_bitmap, DecodeError};
use crate::encode::{encode_into, EncodeError};
use crate::transform::{Operation, TransformError};

/// Errors from running the full pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The input has no file name to derive the output name from.
    #[error("Input path has no file name: {0}")]
    MissingFileName(PathBuf),

    /// Reading the input or writing the output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Apply `operation` to the bitmap in `data` and return the new file bytes.
///
/// The result has the same length and header as `data`; only pixel bytes
/// differ.
pub fn transform_bitmap(data: &[u8], operation: Operation) -> Result<Vec<u8>, Error> {
    let matrix = decode_bitmap(data)?;
    tracing::debug!(
        %operation,
        width = matrix.width(),
        height = matrix.height(),
        "applying operation"
    );
    let matrix = operation.apply(matrix)?;
    Ok(encode_into(data, &matrix)?)
}

/// Name of the file written for `operation` applied to `input`.
///
/// Format: `<operation>_<file name>`, e.g. `blur_cat.bmp`.
pub fn output_file_name(operation: Operation, input: &Path) -> Result<String, Error> {
    let name = input
        .file_name()
        .ok_or_else(|| Error::MissingFileName(input.to_path_buf()))?;
    Ok(format!("{}_{}", operation.name(), name.to_string_lossy()))
}

/// Read `input`, apply `operation`, and write the result into `out_dir`.
///
/// Returns the path of the written file.
pub fn transform_file(input: &Path, operation: Operation, out_dir: &Path) -> Result<PathBuf, Error> {
    let output = out_dir.join(output_file_name(operation, input)?);

    let data = fs::read(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let encoded = transform_bitmap(&data, operation)?;

    fs::write(&output, &encoded).map_err(|source| Error::Io {
        path: output.clone(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        %operation,
        bytes = encoded.len(),
        "wrote transformed bitmap"
    );
    Ok(output)
}
