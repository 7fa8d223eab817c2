//! Codec configuration integration tests
//!
//! YAML configuration files selecting the PER variant, the unknown-IE
//! policy and the PDU size limit, applied to complete PDUs.

use std::io::Write;

use e1ap::codec::{decode_e1ap_pdu_with, encode_e1ap_pdu_with, E1apCodecError};
use e1ap::ies::{Cause, CauseTransport};
use e1ap::procedures::{
    build_e1_setup_request, build_reset, parse_reset, E1ConnectionId, ResetParams, ResetScope,
};
use e1ap_common::{
    load_codec_config, parse_hex, CodecConfig, ConfigError, PerVariantSetting,
    UnknownIePolicySetting,
};
use e1ap_tests::{
    assert_pdu_roundtrip, captures, encode_both_variants, init_test_logging, TestCuUpConfig,
    TestResult,
};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn config_file(yaml: &str) -> TestResult<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_unaligned_config_file() -> TestResult {
    init_test_logging();

    let file = config_file("variant: unaligned\nlog_level: debug\n")?;
    let config = load_codec_config(file.path())?;
    assert_eq!(config.variant, PerVariantSetting::Unaligned);

    let pdu = build_e1_setup_request(&TestCuUpConfig::default().setup_request(4))?;
    let (_, unaligned) = encode_both_variants(&pdu)?;
    assert_eq!(encode_e1ap_pdu_with(&pdu, &config)?, unaligned);
    assert_eq!(decode_e1ap_pdu_with(&unaligned, &config)?, pdu);
    Ok(())
}

#[test]
fn test_lenient_config_file() -> TestResult {
    // Reset capture with an unknown IE (id 999, ignore) appended
    let mut bytes = parse_hex(captures::RESET)?;
    bytes[3] += 5;
    bytes[6] = 0x04;
    bytes.extend_from_slice(&[0x03, 0xE7, 0x40, 0x01, 0x00]);

    let strict = load_codec_config(config_file("unknown_ie_policy: strict\n")?.path())?;
    assert!(decode_e1ap_pdu_with(&bytes, &strict).is_err());

    let lenient = load_codec_config(config_file("unknown_ie_policy: criticality\n")?.path())?;
    let reset = parse_reset(&decode_e1ap_pdu_with(&bytes, &lenient)?)?;
    assert_eq!(reset.transaction_id, 1);
    assert_eq!(reset.scope, ResetScope::All);
    Ok(())
}

#[test]
fn test_size_limit_from_config_file() -> TestResult {
    let config = load_codec_config(config_file("max_pdu_size: 16\n")?.path())?;
    let bytes = parse_hex(captures::RESET)?;

    let err = decode_e1ap_pdu_with(&bytes, &config).unwrap_err();
    assert_eq!(
        err,
        E1apCodecError::PduTooLarge {
            size: bytes.len(),
            max: 16
        }
    );

    let reset = build_reset(&ResetParams {
        transaction_id: 1,
        cause: Cause::Transport(CauseTransport::Unspecified),
        scope: ResetScope::All,
    })?;
    assert!(matches!(
        encode_e1ap_pdu_with(&reset, &config),
        Err(E1apCodecError::PduTooLarge { max: 16, .. })
    ));
    Ok(())
}

#[test]
fn test_bad_config_files() -> TestResult {
    let too_small = load_codec_config(config_file("max_pdu_size: 2\n")?.path());
    assert!(matches!(too_small, Err(ConfigError::ValidationError(_))));

    let unknown_key = load_codec_config(config_file("alignment: none\n")?.path());
    assert!(matches!(unknown_key, Err(ConfigError::ParseError(_))));

    let missing = load_codec_config("/nonexistent/e1ap-codec.yaml");
    assert!(matches!(missing, Err(ConfigError::IoError(_))));
    Ok(())
}

#[test]
fn test_empty_config_file_is_default() -> TestResult {
    let config = load_codec_config(config_file("")?.path())?;
    assert_eq!(config, CodecConfig::default());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_partial_reset_under_any_config(
        unaligned in any::<bool>(),
        lenient in any::<bool>(),
        ids in prop::collection::vec((any::<u32>(), any::<u32>()), 1..16),
    ) {
        let config = CodecConfig {
            variant: if unaligned { PerVariantSetting::Unaligned } else { PerVariantSetting::Aligned },
            unknown_ie_policy: if lenient {
                UnknownIePolicySetting::Criticality
            } else {
                UnknownIePolicySetting::Strict
            },
            ..Default::default()
        };
        let connections: Vec<_> = ids
            .into_iter()
            .map(|(cp, up)| E1ConnectionId::new(Some(cp), Some(up)))
            .collect();
        let pdu = build_reset(&ResetParams {
            transaction_id: 9,
            cause: Cause::Transport(CauseTransport::TransportResourceUnavailable),
            scope: ResetScope::PartOfInterface(connections),
        })
        .unwrap();
        prop_assert!(assert_pdu_roundtrip(&pdu, &config).is_ok());
    }
}
