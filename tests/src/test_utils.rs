//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and assertions.

use e1ap::codec::{decode_e1ap_pdu_with, encode_e1ap_pdu_with, E1apCodecError};
use e1ap::pdu::E1apPdu;
use e1ap_common::{format_hex_compact, CodecConfig, PerVariantSetting, UnknownIePolicySetting};
use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize logging for tests with optional filter
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Codec configuration for one variant and unknown-IE policy
pub fn config_for(variant: PerVariantSetting, policy: UnknownIePolicySetting) -> CodecConfig {
    CodecConfig {
        variant,
        unknown_ie_policy: policy,
        ..Default::default()
    }
}

/// Encode `pdu` with ALIGNED and UNALIGNED PER, in that order
pub fn encode_both_variants(pdu: &E1apPdu) -> Result<(Vec<u8>, Vec<u8>), E1apCodecError> {
    let aligned = encode_e1ap_pdu_with(
        pdu,
        &config_for(PerVariantSetting::Aligned, UnknownIePolicySetting::Strict),
    )?;
    let unaligned = encode_e1ap_pdu_with(
        pdu,
        &config_for(PerVariantSetting::Unaligned, UnknownIePolicySetting::Strict),
    )?;
    Ok((aligned, unaligned))
}

/// Encode `pdu`, decode the result and check the two values match.
///
/// Returns the encoding so callers can compare it against a capture.
pub fn assert_pdu_roundtrip(pdu: &E1apPdu, config: &CodecConfig) -> TestResult<Vec<u8>> {
    let bytes = encode_e1ap_pdu_with(pdu, config)?;
    let decoded = decode_e1ap_pdu_with(&bytes, config)?;
    if &decoded != pdu {
        return Err(format!(
            "{} did not survive a {:?} round trip: {}",
            pdu.message_name(),
            config.variant,
            format_hex_compact(&bytes, 4)
        )
        .into());
    }
    tracing::debug!(message = pdu.message_name(), len = bytes.len(), "Round trip ok");
    Ok(bytes)
}
