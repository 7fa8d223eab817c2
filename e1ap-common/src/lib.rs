//! Common types and utilities for the E1AP codec
//!
//! This crate provides the bit-level buffers the PER runtime is built on,
//! shared value types, the codec configuration and logging helpers.

pub mod bit_buffer;
pub mod bit_string;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use bit_buffer::{BitBuffer, BitBufferReader};
pub use bit_string::BitString;
pub use config::{
    load_codec_config, load_codec_config_from_str, validate_codec_config, CodecConfig,
    ConfigError, ConfigValidationError, PerVariantSetting, UnknownIePolicySetting,
    DEFAULT_MAX_PDU_SIZE,
};
pub use error::Error;
pub use logging::{
    format_hex_compact, format_hex_dump, init_logging, init_logging_with_filter,
    log_e1ap_message, parse_hex, read_capture, Direction, HexDump, LogLevel,
};
pub use types::Plmn;
