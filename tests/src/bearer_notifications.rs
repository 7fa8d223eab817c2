//! Bearer context notification integration tests
//!
//! gNB-CU-UP to gNB-CU-CP reports about a UE: Bearer Context Inactivity
//! Notification and DL Data Notification.

use e1ap::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use e1ap::ies::{DrbActivity, PduSessionResourceActivity, UeActivity};
use e1ap::procedures::{
    build_dl_data_notification, build_inactivity_notification, decode_dl_data_notification,
    decode_inactivity_notification, encode_dl_data_notification, encode_inactivity_notification,
    parse_dl_data_notification, parse_inactivity_notification, ActivityReport,
    DlDataNotificationParams, InactivityNotificationParams, NotifiedPduSession, ProcedureError,
};
use e1ap_common::{PerVariantSetting, UnknownIePolicySetting};
use e1ap_per::PerError;
use e1ap_tests::{assert_pdu_roundtrip, config_for, init_test_logging, TestResult};

fn inactivity(activity: ActivityReport) -> InactivityNotificationParams {
    InactivityNotificationParams {
        gnb_cu_cp_ue_e1ap_id: 1001,
        gnb_cu_up_ue_e1ap_id: 2002,
        activity,
    }
}

// ============================================================================
// Bearer Context Inactivity Notification
// ============================================================================

#[test]
fn test_inactivity_at_each_granularity() -> TestResult {
    init_test_logging();

    let reports = [
        ActivityReport::Drbs(vec![(1, DrbActivity::Active), (32, DrbActivity::NotActive)]),
        ActivityReport::PduSessions(vec![
            (0, PduSessionResourceActivity::NotActive),
            (255, PduSessionResourceActivity::Active),
        ]),
        ActivityReport::Ue(UeActivity::NotActive),
    ];

    for report in reports {
        let params = inactivity(report);
        let received = decode_inactivity_notification(&encode_inactivity_notification(&params)?)?;
        assert_eq!(received, params);
    }
    Ok(())
}

#[test]
fn test_inactivity_in_both_variants() -> TestResult {
    let pdu = build_inactivity_notification(&inactivity(ActivityReport::Drbs(
        (1..=32).map(|id| (id, DrbActivity::NotActive)).collect(),
    )))?;

    for variant in [PerVariantSetting::Aligned, PerVariantSetting::Unaligned] {
        assert_pdu_roundtrip(&pdu, &config_for(variant, UnknownIePolicySetting::Strict))?;
    }
    Ok(())
}

#[test]
fn test_inactivity_list_bounds() {
    let empty = inactivity(ActivityReport::Drbs(Vec::new()));
    assert!(matches!(
        build_inactivity_notification(&empty),
        Err(ProcedureError::InvalidIeValue(_))
    ));

    let too_many = inactivity(ActivityReport::PduSessions(
        (0..257u16)
            .map(|id| ((id % 256) as u8, PduSessionResourceActivity::Active))
            .collect(),
    ));
    assert!(matches!(
        build_inactivity_notification(&too_many),
        Err(ProcedureError::InvalidIeValue(_))
    ));
}

// ============================================================================
// DL Data Notification
// ============================================================================

#[test]
fn test_dl_data_notification_with_sessions() -> TestResult {
    init_test_logging();

    let params = DlDataNotificationParams {
        gnb_cu_cp_ue_e1ap_id: 7,
        gnb_cu_up_ue_e1ap_id: 8,
        ppi: Some(3),
        pdu_sessions: vec![
            NotifiedPduSession {
                pdu_session_id: 1,
                qos_flows: vec![1, 5, 9],
            },
            NotifiedPduSession {
                pdu_session_id: 2,
                qos_flows: vec![63],
            },
        ],
    };

    let received = decode_dl_data_notification(&encode_dl_data_notification(&params)?)?;
    assert_eq!(received, params);
    Ok(())
}

#[test]
fn test_dl_data_notification_minimal() -> TestResult {
    let params = DlDataNotificationParams {
        gnb_cu_cp_ue_e1ap_id: 0,
        gnb_cu_up_ue_e1ap_id: u32::MAX,
        ..Default::default()
    };
    let pdu = build_dl_data_notification(&params)?;
    let decoded = decode_e1ap_pdu(&encode_e1ap_pdu(&pdu)?)?;
    assert_eq!(parse_dl_data_notification(&decoded)?, params);

    // not an inactivity notification
    assert!(matches!(
        parse_inactivity_notification(&decoded),
        Err(ProcedureError::InvalidMessageType { .. })
    ));
    Ok(())
}

#[test]
fn test_dl_data_notification_rejects_bad_flows() {
    let no_flows = DlDataNotificationParams {
        pdu_sessions: vec![NotifiedPduSession {
            pdu_session_id: 1,
            qos_flows: Vec::new(),
        }],
        ..Default::default()
    };
    assert!(matches!(
        build_dl_data_notification(&no_flows),
        Err(ProcedureError::InvalidIeValue(_))
    ));

    // QFI is 0..63 with no extension marker
    let wide_qfi = DlDataNotificationParams {
        pdu_sessions: vec![NotifiedPduSession {
            pdu_session_id: 1,
            qos_flows: vec![64],
        }],
        ..Default::default()
    };
    let err = encode_dl_data_notification(&wide_qfi).unwrap_err();
    match err {
        ProcedureError::CodecError(codec) => assert!(matches!(
            codec.per_error(),
            Some(PerError::ValueOutOfRange { value: 64, .. })
        )),
        other => panic!("unexpected error: {other}"),
    }
}
