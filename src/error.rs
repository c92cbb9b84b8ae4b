// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::format::Format;
use std::path::PathBuf;

/// Errors surfaced by printer construction and by the encoders.
///
/// Logging calls themselves never return these; see [crate::Printer::push].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to marshal fields to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to marshal fields to CBOR: {0}")]
    Cbor(String),
    #[error("format {0} cannot be decoded")]
    Unsupported(Format),
}

pub type Result<T> = std::result::Result<T, Error>;
