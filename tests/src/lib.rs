//! Integration test framework for the E1AP codec
//!
//! Shared fixtures and helpers for the scenario tests in this crate. Each
//! scenario plays both ends of the E1 interface: one side builds and
//! encodes a PDU, the other decodes and parses it and answers.
//!
//! # Components
//!
//! - [`test_fixtures`] - gNB-CU-UP / gNB-CU-CP node fixtures and reference captures
//! - [`test_utils`] - Logging setup and round-trip assertions
//!
//! # Test Categories
//!
//! 1. **E1 Setup** - gNB-CU-UP E1 Setup request, response and failure
//! 2. **Interface Management** - Reset, Reset Acknowledge and Error Indication
//! 3. **Bearer Notifications** - Inactivity and DL Data Notification
//! 4. **Codec Configuration** - YAML configuration driving variant and policy

pub mod test_fixtures;
pub mod test_utils;

pub use test_fixtures::{captures, TestCuCpConfig, TestCuUpConfig};
pub use test_utils::{
    assert_pdu_roundtrip, config_for, encode_both_variants, init_test_logging, TestResult,
};
