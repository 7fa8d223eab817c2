//! Error Indication Procedure
//!
//! Implements the Error Indication procedure as defined in 3GPP TS 38.463
//! Section 8.2.2. A node reports errors in a received message that cannot be
//! reported through an appropriate failure message.

use e1ap_per::{Criticality, PerError};

use super::error::ProcedureError;
use crate::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use crate::ies::{
    Cause, CauseProtocol, CriticalityDiagnostics, CriticalityDiagnosticsIeList,
    CriticalityDiagnosticsIeListItem, GnbCuCpUeE1apId, GnbCuUpUeE1apId, ProcedureCode,
    TransactionId, TriggeringMessage, TypeOfError,
};
use crate::messages::ErrorIndication;
use crate::pdu::{E1apPdu, InitiatingMessage};

/// Parameters for building an Error Indication
#[derive(Debug, Clone, Default)]
pub struct ErrorIndicationParams {
    pub transaction_id: u8,
    /// gNB-CU-CP UE E1AP ID, when the error concerns a UE
    pub gnb_cu_cp_ue_e1ap_id: Option<u32>,
    /// gNB-CU-UP UE E1AP ID, when the error concerns a UE
    pub gnb_cu_up_ue_e1ap_id: Option<u32>,
    pub cause: Option<Cause>,
    pub criticality_diagnostics: Option<CriticalityDiagnostics>,
}

/// Parsed Error Indication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorIndicationData {
    pub transaction_id: u8,
    pub gnb_cu_cp_ue_e1ap_id: Option<u32>,
    pub gnb_cu_up_ue_e1ap_id: Option<u32>,
    pub cause: Option<Cause>,
    pub criticality_diagnostics: Option<CriticalityDiagnostics>,
}

// ============================================================================
// Error Indication Builder
// ============================================================================

/// Build an Error Indication PDU
///
/// # Arguments
/// * `params` - Parameters for the Error Indication
///
/// # Returns
/// * `Ok(E1apPdu)` - The constructed PDU
/// * `Err(ProcedureError)` - If neither a cause nor criticality diagnostics are given
pub fn build_error_indication(params: &ErrorIndicationParams) -> Result<E1apPdu, ProcedureError> {
    if params.cause.is_none() && params.criticality_diagnostics.is_none() {
        return Err(ProcedureError::InvalidIeValue(
            "Error Indication needs a Cause or Criticality Diagnostics".to_string(),
        ));
    }

    Ok(ErrorIndication {
        transaction_id: TransactionId(params.transaction_id),
        gnb_cu_cp_ue_e1ap_id: params.gnb_cu_cp_ue_e1ap_id.map(GnbCuCpUeE1apId),
        gnb_cu_up_ue_e1ap_id: params.gnb_cu_up_ue_e1ap_id.map(GnbCuUpUeE1apId),
        cause: params.cause.clone(),
        criticality_diagnostics: params.criticality_diagnostics.clone(),
    }
    .into())
}

/// Derive the Error Indication that reports a failed decode
///
/// Unknown or missing IEs and unknown procedure codes are abstract syntax
/// errors and carry Criticality Diagnostics naming the offending element.
/// Everything else is reported as a transfer syntax error.
pub fn error_indication_for_decode_error(
    transaction_id: u8,
    error: &PerError,
) -> ErrorIndicationParams {
    let ie_diagnostics = |ie_id, type_of_error| CriticalityDiagnostics {
        triggering_message: Some(TriggeringMessage::InitiatingMessage),
        ies_criticality_diagnostics: Some(CriticalityDiagnosticsIeList::new(vec![
            CriticalityDiagnosticsIeListItem::new(Criticality::Reject, ie_id, type_of_error),
        ])),
        ..Default::default()
    };

    let (cause, criticality_diagnostics) = match error {
        PerError::UnknownIeId { id, .. } => (
            CauseProtocol::AbstractSyntaxErrorReject,
            Some(ie_diagnostics(*id, TypeOfError::NotUnderstood)),
        ),
        PerError::MissingMandatoryIe { id, .. } => (
            CauseProtocol::AbstractSyntaxErrorReject,
            Some(ie_diagnostics(*id, TypeOfError::Missing)),
        ),
        PerError::UnknownProcedureCode { code } => (
            CauseProtocol::AbstractSyntaxErrorReject,
            Some(CriticalityDiagnostics {
                procedure_code: Some(ProcedureCode(*code)),
                ..Default::default()
            }),
        ),
        _ => (CauseProtocol::TransferSyntaxError, None),
    };

    ErrorIndicationParams {
        transaction_id,
        cause: Some(Cause::Protocol(cause)),
        criticality_diagnostics,
        ..Default::default()
    }
}

// ============================================================================
// Error Indication Parser
// ============================================================================

/// Parse an Error Indication from an E1AP PDU
pub fn parse_error_indication(pdu: &E1apPdu) -> Result<ErrorIndicationData, ProcedureError> {
    let indication = match pdu {
        E1apPdu::InitiatingMessage(InitiatingMessage::ErrorIndication(indication)) => indication,
        _ => return Err(ProcedureError::unexpected("ErrorIndication", pdu)),
    };

    Ok(ErrorIndicationData {
        transaction_id: indication.transaction_id.value(),
        gnb_cu_cp_ue_e1ap_id: indication.gnb_cu_cp_ue_e1ap_id.map(GnbCuCpUeE1apId::value),
        gnb_cu_up_ue_e1ap_id: indication.gnb_cu_up_ue_e1ap_id.map(GnbCuUpUeE1apId::value),
        cause: indication.cause.clone(),
        criticality_diagnostics: indication.criticality_diagnostics.clone(),
    })
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Build and encode an Error Indication
pub fn encode_error_indication(params: &ErrorIndicationParams) -> Result<Vec<u8>, ProcedureError> {
    let pdu = build_error_indication(params)?;
    Ok(encode_e1ap_pdu(&pdu)?)
}

/// Decode and parse an Error Indication
pub fn decode_error_indication(bytes: &[u8]) -> Result<ErrorIndicationData, ProcedureError> {
    let pdu = decode_e1ap_pdu(bytes)?;
    parse_error_indication(&pdu)
}

/// Check if a PDU is an Error Indication
pub fn is_error_indication(pdu: &E1apPdu) -> bool {
    matches!(
        pdu,
        E1apPdu::InitiatingMessage(InitiatingMessage::ErrorIndication(_))
    )
}
