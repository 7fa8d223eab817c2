//! Interface management integration tests
//!
//! Reset and Reset Acknowledge between the two nodes, and Error Indications
//! raised by a receiver that could not decode what it got.

use e1ap::codec::{decode_e1ap_pdu, decode_e1ap_pdu_with, encode_e1ap_pdu};
use e1ap::constants::ID_RESET_TYPE;
use e1ap::ies::{Cause, CauseMisc, CauseProtocol, CauseRadioNetwork, TypeOfError};
use e1ap::procedures::{
    build_error_indication, build_reset, build_reset_acknowledge_for, decode_error_indication,
    decode_reset, encode_error_indication, encode_reset, error_indication_for_decode_error,
    is_error_indication, is_reset, parse_reset_acknowledge, E1ConnectionId,
    ErrorIndicationParams, ProcedureError, ResetParams, ResetScope,
};
use e1ap_common::{parse_hex, PerVariantSetting, UnknownIePolicySetting};
use e1ap_per::PerError;
use e1ap_tests::{
    assert_pdu_roundtrip, captures, config_for, init_test_logging, TestResult,
};

/// Reset capture with an extra IE (id 999) appended under `criticality`
fn reset_with_unknown_ie(criticality: u8) -> TestResult<Vec<u8>> {
    let mut bytes = parse_hex(captures::RESET)?;
    bytes[3] += 5;
    bytes[6] = 0x04;
    bytes.extend_from_slice(&[0x03, 0xE7, criticality, 0x01, 0x00]);
    Ok(bytes)
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_all_exchange() -> TestResult {
    init_test_logging();

    let params = ResetParams {
        transaction_id: 1,
        cause: Cause::Misc(CauseMisc::Unspecified),
        scope: ResetScope::All,
    };
    let bytes = encode_reset(&params)?;
    assert_eq!(bytes, parse_hex(captures::RESET)?);

    let reset = decode_reset(&bytes)?;
    assert_eq!(reset.scope, ResetScope::All);

    let ack_bytes = encode_e1ap_pdu(&build_reset_acknowledge_for(&reset)?)?;
    let ack = parse_reset_acknowledge(&decode_e1ap_pdu(&ack_bytes)?)?;
    assert_eq!(ack.transaction_id, 1);
    assert!(ack.connections.is_empty());
    assert!(ack.criticality_diagnostics.is_none());
    Ok(())
}

#[test]
fn test_partial_reset_is_echoed() -> TestResult {
    init_test_logging();

    let connections = vec![
        E1ConnectionId::new(Some(10), Some(20)),
        E1ConnectionId::new(Some(11), None),
        E1ConnectionId::new(None, Some(4_000_000_000)),
    ];
    let params = ResetParams {
        transaction_id: 200,
        cause: Cause::RadioNetwork(CauseRadioNetwork::Unspecified),
        scope: ResetScope::PartOfInterface(connections.clone()),
    };

    let reset = decode_reset(&encode_reset(&params)?)?;
    assert_eq!(reset.scope, ResetScope::PartOfInterface(connections.clone()));

    let ack = build_reset_acknowledge_for(&reset)?;
    let decoded = decode_e1ap_pdu(&encode_e1ap_pdu(&ack)?)?;
    let ack = parse_reset_acknowledge(&decoded)?;
    assert_eq!(ack.transaction_id, 200);
    assert_eq!(ack.connections, connections);
    Ok(())
}

#[test]
fn test_partial_reset_needs_connections() {
    let params = ResetParams {
        transaction_id: 0,
        cause: Cause::Misc(CauseMisc::OmIntervention),
        scope: ResetScope::PartOfInterface(Vec::new()),
    };
    assert!(matches!(
        build_reset(&params),
        Err(ProcedureError::InvalidIeValue(_))
    ));
}

// ============================================================================
// Error Indication
// ============================================================================

#[test]
fn test_missing_reset_type_is_reported() -> TestResult {
    init_test_logging();

    let err = decode_e1ap_pdu(&parse_hex(captures::RESET_MISSING_RESET_TYPE)?).unwrap_err();
    let per_error = err.per_error().ok_or("decode error without a PER cause")?;
    assert_eq!(
        per_error,
        &PerError::MissingMandatoryIe {
            container: "ResetIEs",
            id: ID_RESET_TYPE
        }
    );

    let params = error_indication_for_decode_error(1, per_error);
    let bytes = encode_error_indication(&params)?;
    assert!(is_error_indication(&decode_e1ap_pdu(&bytes)?));

    let indication = decode_error_indication(&bytes)?;
    assert_eq!(indication.transaction_id, 1);
    assert_eq!(
        indication.cause,
        Some(Cause::Protocol(CauseProtocol::AbstractSyntaxErrorReject))
    );

    let diagnostics = indication
        .criticality_diagnostics
        .ok_or("Criticality Diagnostics missing")?;
    let items = diagnostics
        .ies_criticality_diagnostics
        .ok_or("IE diagnostics missing")?;
    assert_eq!(items.len(), 1);
    let item = items.iter().next().ok_or("empty IE diagnostics")?;
    assert_eq!(item.ie_id, ID_RESET_TYPE);
    assert_eq!(item.type_of_error, TypeOfError::Missing);
    Ok(())
}

#[test]
fn test_unknown_reject_ie_is_reported_even_when_lenient() -> TestResult {
    let lenient = config_for(PerVariantSetting::Aligned, UnknownIePolicySetting::Criticality);

    // ignore: skipped
    let reset = decode_e1ap_pdu_with(&reset_with_unknown_ie(0x40)?, &lenient)?;
    assert!(is_reset(&reset));

    // reject: never skipped
    let err = decode_e1ap_pdu_with(&reset_with_unknown_ie(0x00)?, &lenient).unwrap_err();
    let per_error = err.per_error().ok_or("decode error without a PER cause")?;
    assert!(matches!(per_error, PerError::UnknownIeId { id: 999, .. }));

    let indication = decode_error_indication(&encode_error_indication(
        &error_indication_for_decode_error(1, per_error),
    )?)?;
    let items = indication
        .criticality_diagnostics
        .and_then(|d| d.ies_criticality_diagnostics)
        .ok_or("IE diagnostics missing")?;
    let item = items.iter().next().ok_or("empty IE diagnostics")?;
    assert_eq!(item.ie_id, 999);
    assert_eq!(item.type_of_error, TypeOfError::NotUnderstood);
    Ok(())
}

#[test]
fn test_truncated_input_is_a_transfer_syntax_error() -> TestResult {
    let bytes = parse_hex(captures::RESET)?;
    let err = decode_e1ap_pdu(&bytes[..8]).unwrap_err();
    let params = error_indication_for_decode_error(
        0,
        err.per_error().ok_or("decode error without a PER cause")?,
    );
    assert_eq!(
        params.cause,
        Some(Cause::Protocol(CauseProtocol::TransferSyntaxError))
    );
    assert!(params.criticality_diagnostics.is_none());
    Ok(())
}

#[test]
fn test_ue_associated_error_indication_roundtrip() -> TestResult {
    let pdu = build_error_indication(&ErrorIndicationParams {
        transaction_id: 3,
        gnb_cu_cp_ue_e1ap_id: Some(7),
        gnb_cu_up_ue_e1ap_id: Some(8),
        cause: Some(Cause::RadioNetwork(
            CauseRadioNetwork::UnknownOrInconsistentPairOfUeE1apId,
        )),
        criticality_diagnostics: None,
    })?;

    for variant in [PerVariantSetting::Aligned, PerVariantSetting::Unaligned] {
        assert_pdu_roundtrip(&pdu, &config_for(variant, UnknownIePolicySetting::Strict))?;
    }
    Ok(())
}

#[test]
fn test_error_indication_needs_content() {
    let err = build_error_indication(&ErrorIndicationParams::default()).unwrap_err();
    assert!(matches!(err, ProcedureError::InvalidIeValue(_)));
}
