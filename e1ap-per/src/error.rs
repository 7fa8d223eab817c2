//! PER codec errors

use thiserror::Error;

use crate::ProtocolIeId;

/// Errors raised while encoding or decoding PER.
///
/// Every failure aborts the whole PDU: callers propagate with `?` and never
/// substitute defaults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerError {
    #[error("Unexpected end of data: need {needed} bits, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    #[error("Value {value} outside {lb}..={ub}")]
    ValueOutOfRange { value: i64, lb: i64, ub: i64 },

    #[error("Size {size} outside {lb}..={}", .ub.map_or_else(|| "MAX".to_string(), |ub| ub.to_string()))]
    SizeOutOfRange {
        size: usize,
        lb: usize,
        ub: Option<usize>,
    },

    #[error("Invalid choice index {index} for {type_name}")]
    InvalidChoiceIndex {
        type_name: &'static str,
        index: usize,
    },

    #[error("Invalid enumerated index {index} for {type_name}")]
    InvalidEnumIndex {
        type_name: &'static str,
        index: usize,
    },

    #[error("Unknown IE id {id} in {object_set}")]
    UnknownIeId {
        object_set: &'static str,
        id: ProtocolIeId,
    },

    #[error("Unknown procedure code {code}")]
    UnknownProcedureCode { code: u8 },

    #[error("Mandatory IE {id} missing from {container}")]
    MissingMandatoryIe {
        container: &'static str,
        id: ProtocolIeId,
    },

    #[error("Character {ch:?} not permitted in {type_name}")]
    InvalidCharacter { type_name: &'static str, ch: char },

    #[error("Length {length} needs fragmentation, which is not supported")]
    FragmentationUnsupported { length: usize },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result alias used throughout the PER runtime.
pub type PerResult<T> = Result<T, PerError>;
