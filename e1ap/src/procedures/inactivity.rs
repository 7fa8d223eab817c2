//! Bearer Context Inactivity Notification Procedure
//!
//! Implements the Bearer Context Inactivity Notification procedure as defined
//! in 3GPP TS 38.463 Section 8.3.6. The gNB-CU-UP reports user inactivity at
//! UE, PDU session or DRB granularity.

use super::error::ProcedureError;
use crate::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use crate::constants::{MAX_NOOF_DRBS, MAX_NOOF_PDU_SESSION_RESOURCE};
use crate::ies::{
    ActivityInformation, DrbActivity, DrbActivityItem, DrbActivityList, DrbId, GnbCuCpUeE1apId,
    GnbCuUpUeE1apId, PduSessionId, PduSessionResourceActivity, PduSessionResourceActivityItem,
    PduSessionResourceActivityList, UeActivity,
};
use crate::messages::BearerContextInactivityNotification;
use crate::pdu::{E1apPdu, InitiatingMessage};

/// Activity report at one of the three granularities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityReport {
    /// Per DRB: (DRB ID, activity)
    Drbs(Vec<(u8, DrbActivity)>),
    /// Per PDU session: (PDU session ID, activity)
    PduSessions(Vec<(u8, PduSessionResourceActivity)>),
    /// Whole UE
    Ue(UeActivity),
}

/// Parameters for building a Bearer Context Inactivity Notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactivityNotificationParams {
    pub gnb_cu_cp_ue_e1ap_id: u32,
    pub gnb_cu_up_ue_e1ap_id: u32,
    pub activity: ActivityReport,
}

/// Parsed Bearer Context Inactivity Notification
pub type InactivityNotificationData = InactivityNotificationParams;

fn check_count(what: &str, count: usize, max: usize) -> Result<(), ProcedureError> {
    if count == 0 || count > max {
        return Err(ProcedureError::InvalidIeValue(format!(
            "{count} {what} entries, expected 1..={max}"
        )));
    }
    Ok(())
}

/// Build a Bearer Context Inactivity Notification PDU
///
/// # Returns
/// * `Ok(E1apPdu)` - The constructed PDU
/// * `Err(ProcedureError)` - If a DRB or PDU session list is empty or too long
pub fn build_inactivity_notification(
    params: &InactivityNotificationParams,
) -> Result<E1apPdu, ProcedureError> {
    let activity_information = match &params.activity {
        ActivityReport::Drbs(drbs) => {
            check_count("DRB activity", drbs.len(), MAX_NOOF_DRBS)?;
            ActivityInformation::DrbActivityList(DrbActivityList::new(
                drbs.iter()
                    .map(|&(drb_id, activity)| DrbActivityItem::new(DrbId(drb_id), activity))
                    .collect(),
            ))
        }
        ActivityReport::PduSessions(sessions) => {
            check_count(
                "PDU session activity",
                sessions.len(),
                MAX_NOOF_PDU_SESSION_RESOURCE,
            )?;
            ActivityInformation::PduSessionResourceActivityList(
                PduSessionResourceActivityList::new(
                    sessions
                        .iter()
                        .map(|&(id, activity)| {
                            PduSessionResourceActivityItem::new(PduSessionId(id), activity)
                        })
                        .collect(),
                ),
            )
        }
        ActivityReport::Ue(activity) => ActivityInformation::UeActivity(*activity),
    };

    Ok(BearerContextInactivityNotification {
        gnb_cu_cp_ue_e1ap_id: GnbCuCpUeE1apId(params.gnb_cu_cp_ue_e1ap_id),
        gnb_cu_up_ue_e1ap_id: GnbCuUpUeE1apId(params.gnb_cu_up_ue_e1ap_id),
        activity_information,
    }
    .into())
}

/// Parse a Bearer Context Inactivity Notification from an E1AP PDU
pub fn parse_inactivity_notification(
    pdu: &E1apPdu,
) -> Result<InactivityNotificationData, ProcedureError> {
    let notification = match pdu {
        E1apPdu::InitiatingMessage(InitiatingMessage::BearerContextInactivityNotification(
            notification,
        )) => notification,
        _ => {
            return Err(ProcedureError::unexpected(
                "BearerContextInactivityNotification",
                pdu,
            ))
        }
    };

    let activity = match &notification.activity_information {
        ActivityInformation::DrbActivityList(list) => ActivityReport::Drbs(
            list.iter()
                .map(|item| (item.drb_id.value(), item.drb_activity))
                .collect(),
        ),
        ActivityInformation::PduSessionResourceActivityList(list) => ActivityReport::PduSessions(
            list.iter()
                .map(|item| {
                    (
                        item.pdu_session_id.value(),
                        item.pdu_session_resource_activity,
                    )
                })
                .collect(),
        ),
        ActivityInformation::UeActivity(activity) => ActivityReport::Ue(*activity),
        ActivityInformation::ChoiceExtension(container) => {
            return Err(ProcedureError::InvalidIeValue(format!(
                "unsupported ActivityInformation extension (IE id {})",
                container.id
            )))
        }
    };

    Ok(InactivityNotificationData {
        gnb_cu_cp_ue_e1ap_id: notification.gnb_cu_cp_ue_e1ap_id.value(),
        gnb_cu_up_ue_e1ap_id: notification.gnb_cu_up_ue_e1ap_id.value(),
        activity,
    })
}

/// Build and encode a Bearer Context Inactivity Notification
pub fn encode_inactivity_notification(
    params: &InactivityNotificationParams,
) -> Result<Vec<u8>, ProcedureError> {
    let pdu = build_inactivity_notification(params)?;
    Ok(encode_e1ap_pdu(&pdu)?)
}

/// Decode and parse a Bearer Context Inactivity Notification
pub fn decode_inactivity_notification(
    bytes: &[u8],
) -> Result<InactivityNotificationData, ProcedureError> {
    let pdu = decode_e1ap_pdu(bytes)?;
    parse_inactivity_notification(&pdu)
}
