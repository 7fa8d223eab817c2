//! DL Data Notification Procedure
//!
//! Implements the DL Data Notification procedure as defined in 3GPP TS 38.463
//! Section 8.3.7. The gNB-CU-UP tells the gNB-CU-CP that downlink data
//! arrived for a UE in RRC Inactive state, optionally naming the paging
//! policy and the QoS flows the data belongs to.

use super::error::ProcedureError;
use crate::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use crate::constants::{MAX_NOOF_PDU_SESSION_RESOURCE, MAX_NOOF_QOS_FLOWS};
use crate::ies::{
    GnbCuCpUeE1apId, GnbCuUpUeE1apId, PduSessionId, PduSessionToNotifyItem,
    PduSessionToNotifyList, Ppi, QosFlowIdentifier, QosFlowItem, QosFlowList,
};
use crate::messages::DlDataNotification;
use crate::pdu::{E1apPdu, InitiatingMessage};

/// QoS flows of one PDU session that received downlink data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifiedPduSession {
    pub pdu_session_id: u8,
    /// QoS flow identifiers (0..63)
    pub qos_flows: Vec<u8>,
}

/// Parameters for building a DL Data Notification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DlDataNotificationParams {
    pub gnb_cu_cp_ue_e1ap_id: u32,
    pub gnb_cu_up_ue_e1ap_id: u32,
    /// Paging Policy Indicator (0..7)
    pub ppi: Option<u8>,
    /// Empty means the list is omitted
    pub pdu_sessions: Vec<NotifiedPduSession>,
}

/// Parsed DL Data Notification
pub type DlDataNotificationData = DlDataNotificationParams;

fn build_session(session: &NotifiedPduSession) -> Result<PduSessionToNotifyItem, ProcedureError> {
    if session.qos_flows.is_empty() || session.qos_flows.len() > MAX_NOOF_QOS_FLOWS {
        return Err(ProcedureError::InvalidIeValue(format!(
            "PDU session {} lists {} QoS flows, expected 1..={}",
            session.pdu_session_id,
            session.qos_flows.len(),
            MAX_NOOF_QOS_FLOWS
        )));
    }
    let flows = session
        .qos_flows
        .iter()
        .map(|&qfi| QosFlowItem::new(QosFlowIdentifier(qfi)))
        .collect();
    Ok(PduSessionToNotifyItem::new(
        PduSessionId(session.pdu_session_id),
        QosFlowList::new(flows),
    ))
}

/// Build a DL Data Notification PDU
///
/// # Returns
/// * `Ok(E1apPdu)` - The constructed PDU
/// * `Err(ProcedureError)` - If a session has no QoS flows or there are too many sessions
pub fn build_dl_data_notification(
    params: &DlDataNotificationParams,
) -> Result<E1apPdu, ProcedureError> {
    let pdu_session_to_notify_list = if params.pdu_sessions.is_empty() {
        None
    } else {
        if params.pdu_sessions.len() > MAX_NOOF_PDU_SESSION_RESOURCE {
            return Err(ProcedureError::InvalidIeValue(format!(
                "{} PDU sessions to notify, at most {} allowed",
                params.pdu_sessions.len(),
                MAX_NOOF_PDU_SESSION_RESOURCE
            )));
        }
        let items = params
            .pdu_sessions
            .iter()
            .map(build_session)
            .collect::<Result<Vec<_>, _>>()?;
        Some(PduSessionToNotifyList::new(items))
    };

    Ok(DlDataNotification {
        gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId(params.gnb_cu_cp_ue_e1ap_id),
        gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId(params.gnb_cu_up_ue_e1ap_id),
        ppi: params.ppi.map(Ppi),
        pdu_session_to_notify_list,
    }
    .into())
}

/// Parse a DL Data Notification from an E1AP PDU
pub fn parse_dl_data_notification(
    pdu: &E1apPdu,
) -> Result<DlDataNotificationData, ProcedureError> {
    let notification = match pdu {
        E1apPdu::InitiatingMessage(InitiatingMessage::DlDataNotification(notification)) => {
            notification
        }
        _ => return Err(ProcedureError::unexpected("DLDataNotification", pdu)),
    };

    let pdu_sessions = notification
        .pdu_session_to_notify_list
        .iter()
        .flat_map(|list| list.iter())
        .map(|item| NotifiedPduSession {
            pdu_session_id: item.pdu_session_id.value(),
            qos_flows: item
                .qos_flow_list
                .iter()
                .map(|flow| flow.qos_flow_identifier.value())
                .collect(),
        })
        .collect();

    Ok(DlDataNotificationData {
        gnb_cu_cp_ue_e1ap_id: notification.gnb_cu_cp_ue_e1ap_id.value(),
        gnb_cu_up_ue_e1ap_id: notification.gnb_cu_up_ue_e1ap_id.value(),
        ppi: notification.ppi.map(Ppi::value),
        pdu_sessions,
    })
}

/// Build and encode a DL Data Notification
pub fn encode_dl_data_notification(
    params: &DlDataNotificationParams,
) -> Result<Vec<u8>, ProcedureError> {
    let pdu = build_dl_data_notification(params)?;
    Ok(encode_e1ap_pdu(&pdu)?)
}

/// Decode and parse a DL Data Notification
pub fn decode_dl_data_notification(
    bytes: &[u8],
) -> Result<DlDataNotificationData, ProcedureError> {
    let pdu = decode_e1ap_pdu(bytes)?;
    parse_dl_data_notification(&pdu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_params() -> DlDataNotificationParams {
        DlDataNotificationParams {
            gnb_cu_cp_ue_e1ap_id: 3,
            gnb_cu_up_ue_e1ap_id: 4,
            ppi: Some(7),
            pdu_sessions: vec![
                NotifiedPduSession {
                    pdu_session_id: 1,
                    qos_flows: vec![1, 5, 63],
                },
                NotifiedPduSession {
                    pdu_session_id: 2,
                    qos_flows: vec![9],
                },
            ],
        }
    }

    #[test]
    fn test_dl_data_notification_roundtrip() {
        let params = create_test_params();
        let bytes = encode_dl_data_notification(&params).unwrap();
        assert_eq!(decode_dl_data_notification(&bytes).unwrap(), params);
    }

    #[test]
    fn test_minimal_dl_data_notification() {
        let params = DlDataNotificationParams {
            gnb_cu_cp_ue_e1ap_id: 3,
            gnb_cu_up_ue_e1ap_id: 4,
            ..Default::default()
        };
        let pdu = build_dl_data_notification(&params).unwrap();
        match &pdu {
            E1apPdu::InitiatingMessage(InitiatingMessage::DlDataNotification(message)) => {
                assert!(message.ppi.is_none());
                assert!(message.pdu_session_to_notify_list.is_none());
            }
            other => panic!("unexpected PDU {other:?}"),
        }
        let bytes = encode_e1ap_pdu(&pdu).unwrap();
        // initiatingMessage, procedure code 14, ignore
        assert_eq!(&bytes[..3], &[0x00, 0x0E, 0x40]);
        assert_eq!(parse_dl_data_notification(&pdu).unwrap(), params);
        assert_eq!(decode_dl_data_notification(&bytes).unwrap(), params);
    }

    #[test]
    fn test_session_without_flows_rejected() {
        let mut params = create_test_params();
        params.pdu_sessions[1].qos_flows.clear();
        assert!(matches!(
            build_dl_data_notification(&params),
            Err(ProcedureError::InvalidIeValue(_))
        ));
    }
}
