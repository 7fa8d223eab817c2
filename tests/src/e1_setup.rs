//! gNB-CU-UP E1 Setup integration tests
//!
//! The gNB-CU-UP sends its Setup Request, the gNB-CU-CP decodes it and
//! answers with a Response or a Failure depending on the PLMNs it serves.

use e1ap::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use e1ap::ies::{Cause, CauseMisc, TimeToWait};
use e1ap::procedures::{
    build_e1_setup_request, build_e1_setup_response, decode_e1_setup_outcome,
    encode_e1_setup_request, is_e1_setup_request, parse_e1_setup_request, E1SetupOutcome,
    ProcedureError,
};
use e1ap_common::{parse_hex, PerVariantSetting, UnknownIePolicySetting};
use e1ap_per::ToJson;
use e1ap_tests::{
    assert_pdu_roundtrip, captures, config_for, encode_both_variants, init_test_logging,
    TestCuCpConfig, TestCuUpConfig, TestResult,
};

/// Run one Setup exchange over encoded bytes and return the CU-UP's view
fn run_setup(cu_up: &TestCuUpConfig, cu_cp: &TestCuCpConfig, tid: u8) -> TestResult<E1SetupOutcome> {
    let request_bytes = encode_e1_setup_request(&cu_up.setup_request(tid))?;

    let received = decode_e1ap_pdu(&request_bytes)?;
    assert!(is_e1_setup_request(&received));
    let request = parse_e1_setup_request(&received)?;

    let answer_bytes = encode_e1ap_pdu(&cu_cp.answer_setup(&request))?;
    Ok(decode_e1_setup_outcome(&answer_bytes)?)
}

#[test]
fn test_setup_accepted() -> TestResult {
    init_test_logging();

    let outcome = run_setup(&TestCuUpConfig::default(), &TestCuCpConfig::default(), 5)?;
    assert_eq!(
        outcome,
        E1SetupOutcome::Success {
            transaction_id: 5,
            gnb_cu_cp_name: Some("cu-cp".to_string()),
        }
    );
    Ok(())
}

#[test]
fn test_setup_rejected_for_unserved_plmn() -> TestResult {
    init_test_logging();

    let cu_up = TestCuUpConfig::default().with_plmn(310, 410);
    let outcome = run_setup(&cu_up, &TestCuCpConfig::default(), 17)?;
    assert_eq!(
        outcome,
        E1SetupOutcome::Failure {
            transaction_id: 17,
            cause: Cause::Misc(CauseMisc::Unspecified),
            time_to_wait: Some(TimeToWait::V10s),
        }
    );
    Ok(())
}

#[test]
fn test_request_fields_survive_transfer() -> TestResult {
    let cu_up = TestCuUpConfig::default().with_name("cu-up-west");
    let bytes = encode_e1_setup_request(&cu_up.setup_request(0))?;
    let request = parse_e1_setup_request(&decode_e1ap_pdu(&bytes)?)?;

    assert_eq!(request.gnb_cu_up_id, cu_up.gnb_cu_up_id);
    assert_eq!(request.gnb_cu_up_name.as_deref(), Some("cu-up-west"));
    assert_eq!(request.cn_support, cu_up.cn_support);
    assert_eq!(request.supported_plmns, cu_up.plmns);
    assert_eq!(request.gnb_cu_up_capacity, Some(200));
    Ok(())
}

#[test]
fn test_minimal_request_matches_capture() -> TestResult {
    let cu_up = TestCuUpConfig {
        name: None,
        capacity: None,
        ..Default::default()
    }
    .with_plmn(1, 1);

    let bytes = encode_e1_setup_request(&cu_up.setup_request(0))?;
    assert_eq!(hex::encode(&bytes), hex::encode(parse_hex(captures::E1_SETUP_REQUEST)?));
    Ok(())
}

#[test]
fn test_response_matches_capture() -> TestResult {
    let pdu = build_e1_setup_response(9, None);
    let bytes = assert_pdu_roundtrip(
        &pdu,
        &config_for(PerVariantSetting::Aligned, UnknownIePolicySetting::Strict),
    )?;
    assert_eq!(bytes, parse_hex(captures::E1_SETUP_RESPONSE)?);

    let json: serde_json::Value = serde_json::from_str(&pdu.to_json()?)?;
    assert_eq!(
        json["successfulOutcome"]["GNB-CU-UP-E1SetupResponse"]["transaction_id"],
        9
    );
    Ok(())
}

#[test]
fn test_unaligned_request_is_not_longer() -> TestResult {
    let pdu = build_e1_setup_request(&TestCuUpConfig::default().setup_request(1))?;
    let (aligned, unaligned) = encode_both_variants(&pdu)?;
    assert!(unaligned.len() <= aligned.len());

    assert_pdu_roundtrip(
        &pdu,
        &config_for(PerVariantSetting::Unaligned, UnknownIePolicySetting::Strict),
    )?;
    Ok(())
}

#[test]
fn test_invalid_requests_are_refused_before_encoding() {
    let mut too_wide = TestCuUpConfig::default();
    too_wide.gnb_cu_up_id = 1 << 36;
    assert!(matches!(
        build_e1_setup_request(&too_wide.setup_request(0)),
        Err(ProcedureError::InvalidIeValue(_))
    ));

    let mut no_plmns = TestCuUpConfig::default();
    no_plmns.plmns.clear();
    assert!(matches!(
        build_e1_setup_request(&no_plmns.setup_request(0)),
        Err(ProcedureError::InvalidIeValue(_))
    ));
}

#[test]
fn test_cu_cp_answer_is_not_a_request() -> TestResult {
    let answer = TestCuCpConfig::default().answer_setup(&parse_e1_setup_request(
        &build_e1_setup_request(&TestCuUpConfig::default().setup_request(2))?,
    )?);
    assert!(!is_e1_setup_request(&answer));
    assert!(matches!(
        parse_e1_setup_request(&answer),
        Err(ProcedureError::InvalidMessageType { .. })
    ));
    Ok(())
}
