//! E1AP PDU codec
//!
//! Top-level entry points over the PER runtime. The plain functions use the
//! aligned variant and the strict unknown-IE policy; the `_with` variants
//! take them from a [`CodecConfig`].

use e1ap_common::logging::{log_e1ap_message, Direction};
use e1ap_common::CodecConfig;
use e1ap_per::{decode_from_slice, encode_to_vec, DecodeOptions, PerError, PerVariant};
use thiserror::Error;

use crate::pdu::E1apPdu;

/// E1AP codec error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum E1apCodecError {
    /// Error during PER encoding
    #[error("PER encoding error: {0}")]
    EncodeError(PerError),

    /// Error during PER decoding
    #[error("PER decoding error: {0}")]
    DecodeError(PerError),

    /// Input refused before decoding
    #[error("PDU of {size} bytes exceeds the {max} byte limit")]
    PduTooLarge { size: usize, max: usize },
}

impl E1apCodecError {
    /// The underlying PER error, if any.
    pub fn per_error(&self) -> Option<&PerError> {
        match self {
            E1apCodecError::EncodeError(e) | E1apCodecError::DecodeError(e) => Some(e),
            E1apCodecError::PduTooLarge { .. } => None,
        }
    }
}

/// Encode an E1AP PDU to bytes using APER
///
/// # Arguments
/// * `pdu` - The E1AP PDU to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - The encoded bytes
/// * `Err(E1apCodecError)` - If encoding fails
pub fn encode_e1ap_pdu(pdu: &E1apPdu) -> Result<Vec<u8>, E1apCodecError> {
    encode_e1ap_pdu_with(pdu, &CodecConfig::default())
}

/// Decode an E1AP PDU from bytes using APER
///
/// # Arguments
/// * `bytes` - The bytes to decode
///
/// # Returns
/// * `Ok(E1apPdu)` - The decoded PDU
/// * `Err(E1apCodecError)` - If decoding fails
pub fn decode_e1ap_pdu(bytes: &[u8]) -> Result<E1apPdu, E1apCodecError> {
    decode_e1ap_pdu_with(bytes, &CodecConfig::default())
}

/// Encode an E1AP PDU with the PER variant and size limit of `config`.
pub fn encode_e1ap_pdu_with(
    pdu: &E1apPdu,
    config: &CodecConfig,
) -> Result<Vec<u8>, E1apCodecError> {
    let bytes = encode_to_vec(pdu, PerVariant::from(config.variant))
        .map_err(E1apCodecError::EncodeError)?;
    if bytes.len() > config.max_pdu_size {
        return Err(E1apCodecError::PduTooLarge {
            size: bytes.len(),
            max: config.max_pdu_size,
        });
    }
    log_e1ap_message(Direction::Tx, pdu.message_name(), &bytes);
    Ok(bytes)
}

/// Decode an E1AP PDU with the variant, unknown-IE policy and size limit
/// of `config`.
pub fn decode_e1ap_pdu_with(
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<E1apPdu, E1apCodecError> {
    if bytes.len() > config.max_pdu_size {
        return Err(E1apCodecError::PduTooLarge {
            size: bytes.len(),
            max: config.max_pdu_size,
        });
    }
    let pdu: E1apPdu = decode_from_slice(bytes, DecodeOptions::from(config)).map_err(|e| {
        tracing::debug!(len = bytes.len(), error = %e, "E1AP decode failed");
        E1apCodecError::DecodeError(e)
    })?;
    log_e1ap_message(Direction::Rx, pdu.message_name(), bytes);
    Ok(pdu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::{Cause, CauseRadioNetwork, ResetType, TransactionId};
    use crate::messages::Reset;
    use e1ap_common::{PerVariantSetting, UnknownIePolicySetting};

    fn reset_pdu() -> E1apPdu {
        Reset {
            transaction_id: TransactionId(4),
            cause: Cause::RadioNetwork(CauseRadioNetwork::NormalRelease),
            reset_type: ResetType::all(),
        }
        .into()
    }

    #[test]
    fn test_reset_pdu_roundtrip() {
        let bytes = encode_e1ap_pdu(&reset_pdu()).unwrap();
        // initiatingMessage, procedure code 0, reject
        assert_eq!(&bytes[..3], &[0x00, 0x00, 0x00]);
        assert_eq!(bytes[3] as usize, bytes.len() - 4);
        assert_eq!(decode_e1ap_pdu(&bytes).unwrap(), reset_pdu());
    }

    #[test]
    fn test_unaligned_config() {
        let config = CodecConfig {
            variant: PerVariantSetting::Unaligned,
            unknown_ie_policy: UnknownIePolicySetting::Criticality,
            ..Default::default()
        };
        let bytes = encode_e1ap_pdu_with(&reset_pdu(), &config).unwrap();
        assert_ne!(bytes, encode_e1ap_pdu(&reset_pdu()).unwrap());
        assert_eq!(decode_e1ap_pdu_with(&bytes, &config).unwrap(), reset_pdu());
    }

    #[test]
    fn test_size_limit() {
        let config = CodecConfig {
            max_pdu_size: 8,
            ..Default::default()
        };
        let bytes = encode_e1ap_pdu(&reset_pdu()).unwrap();
        assert_eq!(
            decode_e1ap_pdu_with(&bytes, &config).unwrap_err(),
            E1apCodecError::PduTooLarge {
                size: bytes.len(),
                max: 8
            }
        );
        assert!(matches!(
            encode_e1ap_pdu_with(&reset_pdu(), &config),
            Err(E1apCodecError::PduTooLarge { max: 8, .. })
        ));
    }

    #[test]
    fn test_truncated_pdu() {
        let bytes = encode_e1ap_pdu(&reset_pdu()).unwrap();
        let err = decode_e1ap_pdu(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(
            err.per_error(),
            Some(PerError::UnexpectedEnd { .. })
        ));
    }
}
