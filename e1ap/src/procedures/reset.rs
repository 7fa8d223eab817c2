//! Reset Procedure
//!
//! Implements the Reset procedure as defined in 3GPP TS 38.463 Section 8.2.1.
//! Either node may initiate it to reset the whole E1 interface or a list of
//! UE-associated logical E1-connections.

use super::error::ProcedureError;
use crate::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use crate::constants::MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET;
use crate::ies::{
    Cause, CriticalityDiagnostics, GnbCuCpUeE1apId, GnbCuUpUeE1apId, ResetType, TransactionId,
    UeAssociatedLogicalE1ConnectionItem,
};
use crate::messages::{Reset, ResetAcknowledge};
use crate::pdu::{E1apPdu, InitiatingMessage, SuccessfulOutcome};

/// A UE-associated logical E1-connection, named by either or both UE E1AP IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct E1ConnectionId {
    pub gnb_cu_cp_ue_e1ap_id: Option<u32>,
    pub gnb_cu_up_ue_e1ap_id: Option<u32>,
}

impl E1ConnectionId {
    pub fn new(gnb_cu_cp_ue_e1ap_id: Option<u32>, gnb_cu_up_ue_e1ap_id: Option<u32>) -> Self {
        Self {
            gnb_cu_cp_ue_e1ap_id,
            gnb_cu_up_ue_e1ap_id,
        }
    }

    fn to_item(self) -> UeAssociatedLogicalE1ConnectionItem {
        UeAssociatedLogicalE1ConnectionItem::new(
            self.gnb_cu_cp_ue_e1ap_id.map(GnbCuCpUeE1apId),
            self.gnb_cu_up_ue_e1ap_id.map(GnbCuUpUeE1apId),
        )
    }

    fn from_item(item: &UeAssociatedLogicalE1ConnectionItem) -> Self {
        Self {
            gnb_cu_cp_ue_e1ap_id: item.gnb_cu_cp_ue_e1ap_id.map(GnbCuCpUeE1apId::value),
            gnb_cu_up_ue_e1ap_id: item.gnb_cu_up_ue_e1ap_id.map(GnbCuUpUeE1apId::value),
        }
    }
}

/// What a Reset applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetScope {
    /// The whole E1 interface
    All,
    /// The listed UE-associated logical E1-connections
    PartOfInterface(Vec<E1ConnectionId>),
}

/// Parameters for building a Reset
#[derive(Debug, Clone)]
pub struct ResetParams {
    pub transaction_id: u8,
    pub cause: Cause,
    pub scope: ResetScope,
}

/// Parsed Reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetData {
    pub transaction_id: u8,
    pub cause: Cause,
    pub scope: ResetScope,
}

/// Parsed Reset Acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetAcknowledgeData {
    pub transaction_id: u8,
    /// Connections that were reset; empty when the whole interface was
    pub connections: Vec<E1ConnectionId>,
    pub criticality_diagnostics: Option<CriticalityDiagnostics>,
}

fn check_connections(connections: &[E1ConnectionId]) -> Result<(), ProcedureError> {
    if connections.is_empty() || connections.len() > MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET {
        return Err(ProcedureError::InvalidIeValue(format!(
            "{} E1 connections, expected 1..={}",
            connections.len(),
            MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET
        )));
    }
    Ok(())
}

// ============================================================================
// Reset Builder / Parser
// ============================================================================

/// Build a Reset PDU
///
/// # Arguments
/// * `params` - Parameters for the Reset
///
/// # Returns
/// * `Ok(E1apPdu)` - The constructed PDU
/// * `Err(ProcedureError)` - If a partial reset names no connections
pub fn build_reset(params: &ResetParams) -> Result<E1apPdu, ProcedureError> {
    let reset_type = match &params.scope {
        ResetScope::All => ResetType::all(),
        ResetScope::PartOfInterface(connections) => {
            check_connections(connections)?;
            ResetType::PartOfE1Interface(connections.iter().map(|c| c.to_item()).collect())
        }
    };

    Ok(Reset {
        transaction_id: TransactionId(params.transaction_id),
        cause: params.cause.clone(),
        reset_type,
    }
    .into())
}

/// Parse a Reset from an E1AP PDU
pub fn parse_reset(pdu: &E1apPdu) -> Result<ResetData, ProcedureError> {
    let reset = match pdu {
        E1apPdu::InitiatingMessage(InitiatingMessage::Reset(reset)) => reset,
        _ => return Err(ProcedureError::unexpected("Reset", pdu)),
    };

    let scope = match &reset.reset_type {
        ResetType::E1Interface(_) => ResetScope::All,
        ResetType::PartOfE1Interface(list) => ResetScope::PartOfInterface(
            list.iter().map(|entry| E1ConnectionId::from_item(&entry.0)).collect(),
        ),
        ResetType::ChoiceExtension(container) => {
            return Err(ProcedureError::InvalidIeValue(format!(
                "unsupported ResetType extension (IE id {})",
                container.id
            )))
        }
    };

    Ok(ResetData {
        transaction_id: reset.transaction_id.value(),
        cause: reset.cause.clone(),
        scope,
    })
}

// ============================================================================
// Reset Acknowledge Builder / Parser
// ============================================================================

/// Build a Reset Acknowledge PDU
///
/// An empty `connections` slice acknowledges a reset of the whole interface.
pub fn build_reset_acknowledge(
    transaction_id: u8,
    connections: &[E1ConnectionId],
) -> Result<E1apPdu, ProcedureError> {
    let connection_list = if connections.is_empty() {
        None
    } else {
        check_connections(connections)?;
        Some(connections.iter().map(|c| c.to_item()).collect())
    };

    Ok(ResetAcknowledge {
        transaction_id: TransactionId(transaction_id),
        connection_list,
        criticality_diagnostics: None,
    }
    .into())
}

/// Build the Reset Acknowledge answering `reset`, echoing its connection list
pub fn build_reset_acknowledge_for(reset: &ResetData) -> Result<E1apPdu, ProcedureError> {
    match &reset.scope {
        ResetScope::All => build_reset_acknowledge(reset.transaction_id, &[]),
        ResetScope::PartOfInterface(connections) => {
            build_reset_acknowledge(reset.transaction_id, connections)
        }
    }
}

/// Parse a Reset Acknowledge from an E1AP PDU
pub fn parse_reset_acknowledge(pdu: &E1apPdu) -> Result<ResetAcknowledgeData, ProcedureError> {
    let ack = match pdu {
        E1apPdu::SuccessfulOutcome(SuccessfulOutcome::ResetAcknowledge(ack)) => ack,
        _ => return Err(ProcedureError::unexpected("ResetAcknowledge", pdu)),
    };

    Ok(ResetAcknowledgeData {
        transaction_id: ack.transaction_id.value(),
        connections: ack
            .connection_list
            .iter()
            .flat_map(|list| list.iter().map(|entry| E1ConnectionId::from_item(&entry.0)))
            .collect(),
        criticality_diagnostics: ack.criticality_diagnostics.clone(),
    })
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Build and encode a Reset
pub fn encode_reset(params: &ResetParams) -> Result<Vec<u8>, ProcedureError> {
    let pdu = build_reset(params)?;
    Ok(encode_e1ap_pdu(&pdu)?)
}

/// Decode and parse a Reset
pub fn decode_reset(bytes: &[u8]) -> Result<ResetData, ProcedureError> {
    let pdu = decode_e1ap_pdu(bytes)?;
    parse_reset(&pdu)
}

/// Check if a PDU is a Reset
pub fn is_reset(pdu: &E1apPdu) -> bool {
    matches!(pdu, E1apPdu::InitiatingMessage(InitiatingMessage::Reset(_)))
}
