//! E1AP message bodies (TS 38.463 clause 9.2)
//!
//! Each message is a `SEQUENCE { protocolIEs ProtocolIE-Container, ... }`.
//! The IE tables below give, per IE, the id, the criticality it is sent
//! with and whether it is mandatory.

use crate::constants::*;
use crate::ies::{
    ActivityInformation, Cause, CnSupport, CriticalityDiagnostics, GnbCuCpName, GnbCuCpUeE1apId,
    GnbCuUpCapacity, GnbCuUpId, GnbCuUpName, GnbCuUpUeE1apId, PduSessionToNotifyList, Ppi,
    ResetType, SupportedPlmnsList, TimeToWait, TransactionId,
    UeAssociatedLogicalE1ConnectionListResAck,
};

// ============================================================================
// Interface management
// ============================================================================

protocol_ies! {
    /// RESET (9.2.1.1)
    pub struct Reset("ResetIEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        mandatory cause: Cause = (ID_CAUSE, Ignore),
        mandatory reset_type: ResetType = (ID_RESET_TYPE, Reject),
    }
}

protocol_ies! {
    /// RESET ACKNOWLEDGE (9.2.1.2)
    pub struct ResetAcknowledge("ResetAcknowledgeIEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        optional connection_list: UeAssociatedLogicalE1ConnectionListResAck =
            (ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_LIST_RES_ACK, Ignore),
        optional criticality_diagnostics: CriticalityDiagnostics =
            (ID_CRITICALITY_DIAGNOSTICS, Ignore),
    }
}

protocol_ies! {
    /// ERROR INDICATION (9.2.1.3)
    pub struct ErrorIndication("ErrorIndication-IEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        optional gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId = (ID_GNB_CU_CP_UE_E1AP_ID, Ignore),
        optional gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId = (ID_GNB_CU_UP_UE_E1AP_ID, Ignore),
        optional cause: Cause = (ID_CAUSE, Ignore),
        optional criticality_diagnostics: CriticalityDiagnostics =
            (ID_CRITICALITY_DIAGNOSTICS, Ignore),
    }
}

protocol_ies! {
    /// GNB-CU-UP E1 SETUP REQUEST (9.2.1.4)
    pub struct GnbCuUpE1SetupRequest("GNB-CU-UP-E1SetupRequestIEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        mandatory gnb_cu_up_id: GnbCuUpId = (ID_GNB_CU_UP_ID, Reject),
        optional gnb_cu_up_name: GnbCuUpName = (ID_GNB_CU_UP_NAME, Ignore),
        mandatory cn_support: CnSupport = (ID_CN_SUPPORT, Reject),
        mandatory supported_plmns: SupportedPlmnsList = (ID_SUPPORTED_PLMNS, Reject),
        optional gnb_cu_up_capacity: GnbCuUpCapacity = (ID_GNB_CU_UP_CAPACITY, Ignore),
    }
}

protocol_ies! {
    /// GNB-CU-UP E1 SETUP RESPONSE (9.2.1.5)
    pub struct GnbCuUpE1SetupResponse("GNB-CU-UP-E1SetupResponseIEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        optional gnb_cu_cp_name: GnbCuCpName = (ID_GNB_CU_CP_NAME, Ignore),
    }
}

protocol_ies! {
    /// GNB-CU-UP E1 SETUP FAILURE (9.2.1.6)
    pub struct GnbCuUpE1SetupFailure("GNB-CU-UP-E1SetupFailureIEs") {
        mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
        mandatory cause: Cause = (ID_CAUSE, Ignore),
        optional time_to_wait: TimeToWait = (ID_TIME_TO_WAIT, Ignore),
        optional criticality_diagnostics: CriticalityDiagnostics =
            (ID_CRITICALITY_DIAGNOSTICS, Ignore),
    }
}

// ============================================================================
// Bearer context management
// ============================================================================

protocol_ies! {
    /// BEARER CONTEXT INACTIVITY NOTIFICATION (9.2.2.11)
    pub struct BearerContextInactivityNotification("BearerContextInactivityNotificationIEs") {
        mandatory gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId = (ID_GNB_CU_CP_UE_E1AP_ID, Reject),
        mandatory gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId = (ID_GNB_CU_UP_UE_E1AP_ID, Reject),
        mandatory activity_information: ActivityInformation =
            (ID_ACTIVITY_INFORMATION, Reject),
    }
}

protocol_ies! {
    /// DL DATA NOTIFICATION (9.2.2.12)
    pub struct DlDataNotification("DLDataNotificationIEs") {
        mandatory gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId = (ID_GNB_CU_CP_UE_E1AP_ID, Reject),
        mandatory gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId = (ID_GNB_CU_UP_UE_E1AP_ID, Reject),
        optional ppi: Ppi = (ID_PPI, Ignore),
        optional pdu_session_to_notify_list: PduSessionToNotifyList =
            (ID_PDU_SESSION_TO_NOTIFY_LIST, Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::{CauseMisc, DrbActivity, DrbActivityItem, DrbActivityList, DrbId};
    use e1ap_per::{
        decode_from_slice, encode_to_vec, Criticality, DecodeOptions, ObjectSet, PerError,
        PerVariant, Presence, UnknownIePolicy,
    };

    /// Reset { TID 1, misc/unspecified, reset all }
    const RESET_BODY: [u8; 19] = [
        0x00, 0x00, 0x03, // preamble, IE count
        0x00, 0x39, 0x00, 0x02, 0x00, 0x01, // transactionID
        0x00, 0x00, 0x40, 0x01, 0x68, // cause
        0x00, 0x04, 0x00, 0x01, 0x00, // resetType
    ];

    fn reset() -> Reset {
        Reset {
            transaction_id: TransactionId(1),
            cause: Cause::Misc(CauseMisc::Unspecified),
            reset_type: ResetType::all(),
        }
    }

    /// `RESET_BODY` with a fourth IE (id 999) of the given criticality byte
    fn reset_with_unknown_ie(criticality: u8) -> Vec<u8> {
        let mut bytes = RESET_BODY.to_vec();
        bytes[2] = 0x04;
        bytes.extend_from_slice(&[0x03, 0xE7, criticality, 0x01, 0x00]);
        bytes
    }

    #[test]
    fn test_reset_encoding() {
        let bytes = encode_to_vec(&reset(), PerVariant::Aligned).unwrap();
        assert_eq!(bytes, RESET_BODY);
        let decoded: Reset = decode_from_slice(&bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, reset());
    }

    #[test]
    fn test_unknown_ie_strict() {
        let bytes = reset_with_unknown_ie(0x40);
        let err = decode_from_slice::<Reset>(&bytes, DecodeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            PerError::UnknownIeId {
                object_set: "ResetIEs",
                id: 999
            }
        );
    }

    #[test]
    fn test_unknown_ie_skipped_by_criticality() {
        let lenient = DecodeOptions::new(PerVariant::Aligned, UnknownIePolicy::Criticality);

        let decoded: Reset = decode_from_slice(&reset_with_unknown_ie(0x40), lenient).unwrap();
        assert_eq!(decoded, reset());

        // reject is never skipped
        let err = decode_from_slice::<Reset>(&reset_with_unknown_ie(0x00), lenient).unwrap_err();
        assert!(matches!(err, PerError::UnknownIeId { id: 999, .. }));
    }

    #[test]
    fn test_missing_mandatory_ie() {
        // First two IEs only
        let mut bytes = RESET_BODY[..14].to_vec();
        bytes[2] = 0x02;
        let err = decode_from_slice::<Reset>(&bytes, DecodeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            PerError::MissingMandatoryIe {
                container: "ResetIEs",
                id: ID_RESET_TYPE
            }
        );
    }

    #[test]
    fn test_ie_order_on_decode_is_free() {
        // resetType first, transactionID last
        let mut bytes = RESET_BODY[..3].to_vec();
        bytes.extend_from_slice(&RESET_BODY[14..]);
        bytes.extend_from_slice(&RESET_BODY[9..14]);
        bytes.extend_from_slice(&RESET_BODY[3..9]);
        let decoded: Reset = decode_from_slice(&bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, reset());
    }

    #[test]
    fn test_optional_ies_absent() {
        let response = GnbCuUpE1SetupResponse {
            transaction_id: TransactionId(9),
            gnb_cu_cp_name: None,
        };
        let bytes = encode_to_vec(&response, PerVariant::Aligned).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0x01, 0x00, 0x39, 0x00, 0x02, 0x00, 0x09]);
        let decoded: GnbCuUpE1SetupResponse =
            decode_from_slice(&bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_inactivity_notification_roundtrip() {
        let notification = BearerContextInactivityNotification {
            gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId(10),
            gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId(20),
            activity_information: ActivityInformation::DrbActivityList(DrbActivityList::new(
                vec![DrbActivityItem::new(DrbId(5), DrbActivity::Active)],
            )),
        };
        for variant in [PerVariant::Aligned, PerVariant::Unaligned] {
            let bytes = encode_to_vec(&notification, variant).unwrap();
            let decoded: BearerContextInactivityNotification =
                decode_from_slice(&bytes, DecodeOptions::new(variant, UnknownIePolicy::Strict))
                    .unwrap();
            assert_eq!(decoded, notification);
        }
    }

    #[test]
    fn test_message_tables() {
        assert_eq!(GnbCuUpE1SetupRequest::ENTRIES.len(), 6);
        assert_eq!(GnbCuUpE1SetupRequest::idx_to_id(2), Some(ID_GNB_CU_UP_NAME));
        assert_eq!(
            GnbCuUpE1SetupRequest::get_presence(ID_SUPPORTED_PLMNS),
            Some(Presence::Mandatory)
        );
        assert_eq!(
            GnbCuUpE1SetupRequest::get_crit(ID_GNB_CU_UP_CAPACITY),
            Some(Criticality::Ignore)
        );
        assert_eq!(DlDataNotification::get_crit(ID_PPI), Some(Criticality::Ignore));
        assert!(!ErrorIndication::is_id_valid(ID_RESET_TYPE));
    }

    #[test]
    fn test_message_json() {
        let json = serde_json::to_value(reset()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "transaction_id": 1,
                "cause": { "misc": "unspecified" },
                "reset_type": { "e1-Interface": "reset-all" }
            })
        );
    }
}
