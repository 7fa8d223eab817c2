//! Error types shared by the E1AP workspace

use thiserror::Error;

/// Errors raised while reading capture files.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a capture file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A hex capture could not be turned into bytes.
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}
