//! Errors shared by the procedure builders and parsers

use thiserror::Error;

use crate::codec::E1apCodecError;
use crate::pdu::E1apPdu;

/// Errors that can occur while building or parsing E1AP procedures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcedureError {
    /// Codec error during encoding/decoding
    #[error("Codec error: {0}")]
    CodecError(#[from] E1apCodecError),

    /// Invalid message type received
    #[error("Invalid message type: expected {expected}, got {actual}")]
    InvalidMessageType {
        expected: &'static str,
        actual: &'static str,
    },

    /// Invalid IE value
    #[error("Invalid IE value: {0}")]
    InvalidIeValue(String),
}

impl ProcedureError {
    pub(crate) fn unexpected(expected: &'static str, pdu: &E1apPdu) -> Self {
        ProcedureError::InvalidMessageType {
            expected,
            actual: pdu.message_name(),
        }
    }
}
