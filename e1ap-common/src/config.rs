//! Codec configuration
//!
//! A small YAML document selects the PER variant, the unknown-IE policy and
//! input limits used by the E1AP codec and the dump tool.
//!
//! ```yaml
//! variant: aligned
//! unknown_ie_policy: strict
//! max_pdu_size: 65535
//! log_level: info
//! ```
//!
//! Every key is optional; omitted keys take the defaults shown above.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogLevel;

/// Largest PDU the codec accepts by default, in bytes.
pub const DEFAULT_MAX_PDU_SIZE: usize = 65535;

/// PER flavour used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerVariantSetting {
    /// ALIGNED PER, mandated for E1AP
    #[default]
    Aligned,
    /// UNALIGNED PER
    Unaligned,
}

/// What a decoder does with a ProtocolIE or ProtocolExtension id it does not
/// know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownIePolicySetting {
    /// Fail the decode on any unknown id
    #[default]
    Strict,
    /// Skip unknown ids sent with criticality ignore or notify
    Criticality,
}

/// Codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub variant: PerVariantSetting,
    pub unknown_ie_policy: UnknownIePolicySetting,
    /// Inputs longer than this are refused before decoding starts
    pub max_pdu_size: usize,
    pub log_level: LogLevel,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            variant: PerVariantSetting::default(),
            unknown_ie_policy: UnknownIePolicySetting::default(),
            max_pdu_size: DEFAULT_MAX_PDU_SIZE,
            log_level: LogLevel::default(),
        }
    }
}

/// Errors that can occur while loading a codec configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),
}

/// Errors reported by [`validate_codec_config`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// `max_pdu_size` cannot hold a PDU at all
    #[error("Invalid max_pdu_size: {0}")]
    InvalidMaxPduSize(String),
}

/// Loads a codec configuration from a YAML file and validates it.
pub fn load_codec_config<P: AsRef<Path>>(path: P) -> Result<CodecConfig, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_codec_config_from_str(&contents)
}

/// Loads a codec configuration from a YAML string and validates it.
///
/// An empty document yields [`CodecConfig::default`].
pub fn load_codec_config_from_str(yaml: &str) -> Result<CodecConfig, ConfigError> {
    let config = if yaml.trim().is_empty() {
        CodecConfig::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?
    };
    validate_codec_config(&config)?;
    Ok(config)
}

/// Validates a codec configuration.
///
/// The smallest E1AP PDU (a CHOICE index, a procedure code, a criticality
/// and an empty container inside an open type) needs 4 octets.
pub fn validate_codec_config(config: &CodecConfig) -> Result<(), ConfigValidationError> {
    if config.max_pdu_size < 4 {
        return Err(ConfigValidationError::InvalidMaxPduSize(format!(
            "{} bytes is below the 4 byte minimum",
            config.max_pdu_size
        )));
    }
    Ok(())
}
