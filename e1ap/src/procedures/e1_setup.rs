//! gNB-CU-UP E1 Setup Procedure
//!
//! Implements the gNB-CU-UP E1 Setup procedure as defined in 3GPP TS 38.463
//! Section 8.2.3. The gNB-CU-UP uses it to exchange the application level
//! data the gNB-CU-CP and gNB-CU-UP need to interoperate on the E1
//! interface.

use e1ap_common::Plmn;

use super::error::ProcedureError;
use crate::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
use crate::constants::MAX_NOOF_SPLMNS;
use crate::ies::{
    Cause, CnSupport, CriticalityDiagnostics, GnbCuCpName, GnbCuUpCapacity, GnbCuUpId,
    GnbCuUpName, NrCellIdentity, NrCgi, NrCgiSupportList, PlmnIdentity, SliceSupportList, Snssai,
    SupportedPlmnsItem, SupportedPlmnsList, TimeToWait, TransactionId,
};
use crate::messages::{GnbCuUpE1SetupFailure, GnbCuUpE1SetupRequest, GnbCuUpE1SetupResponse};
use crate::pdu::{E1apPdu, InitiatingMessage, SuccessfulOutcome, UnsuccessfulOutcome};

/// One entry of the Supported PLMNs list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedPlmn {
    pub plmn: Plmn,
    /// Supported S-NSSAIs; empty means the list is omitted
    pub slices: Vec<Snssai>,
    /// Served NR cell identities (36 bits); empty means the list is omitted
    pub nr_cells: Vec<u64>,
}

impl SupportedPlmn {
    pub fn new(plmn: Plmn) -> Self {
        Self {
            plmn,
            slices: Vec::new(),
            nr_cells: Vec::new(),
        }
    }
}

/// Parameters for building a gNB-CU-UP E1 Setup Request
#[derive(Debug, Clone)]
pub struct E1SetupRequestParams {
    pub transaction_id: u8,
    /// gNB-CU-UP ID (0..2^36-1)
    pub gnb_cu_up_id: u64,
    /// gNB-CU-UP Name (optional)
    pub gnb_cu_up_name: Option<String>,
    pub cn_support: CnSupport,
    /// Supported PLMNs (1..12)
    pub supported_plmns: Vec<SupportedPlmn>,
    /// gNB-CU-UP Capacity (optional)
    pub gnb_cu_up_capacity: Option<u8>,
}

/// Parsed gNB-CU-UP E1 Setup Request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E1SetupRequestData {
    pub transaction_id: u8,
    pub gnb_cu_up_id: u64,
    pub gnb_cu_up_name: Option<String>,
    pub cn_support: CnSupport,
    pub supported_plmns: Vec<SupportedPlmn>,
    pub gnb_cu_up_capacity: Option<u8>,
}

/// Parameters for building a gNB-CU-UP E1 Setup Failure
#[derive(Debug, Clone)]
pub struct E1SetupFailureParams {
    pub transaction_id: u8,
    pub cause: Cause,
    pub time_to_wait: Option<TimeToWait>,
    pub criticality_diagnostics: Option<CriticalityDiagnostics>,
}

/// Outcome of a gNB-CU-UP E1 Setup, as seen by the gNB-CU-UP
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum E1SetupOutcome {
    Success {
        transaction_id: u8,
        gnb_cu_cp_name: Option<String>,
    },
    Failure {
        transaction_id: u8,
        cause: Cause,
        time_to_wait: Option<TimeToWait>,
    },
}

// ============================================================================
// E1 Setup Request Builder
// ============================================================================

/// Build a gNB-CU-UP E1 Setup Request PDU
///
/// # Arguments
/// * `params` - Parameters for the E1 Setup Request
///
/// # Returns
/// * `Ok(E1apPdu)` - The constructed PDU
/// * `Err(ProcedureError)` - If a parameter is outside its IE's range
pub fn build_e1_setup_request(params: &E1SetupRequestParams) -> Result<E1apPdu, ProcedureError> {
    let gnb_cu_up_id = GnbCuUpId(params.gnb_cu_up_id);
    let in_range = i64::try_from(params.gnb_cu_up_id)
        .map(|id| GnbCuUpId::CONSTRAINT.contains(id))
        .unwrap_or(false);
    if !in_range {
        return Err(ProcedureError::InvalidIeValue(format!(
            "gNB-CU-UP ID {} exceeds 36 bits",
            params.gnb_cu_up_id
        )));
    }

    if params.supported_plmns.is_empty() || params.supported_plmns.len() > MAX_NOOF_SPLMNS {
        return Err(ProcedureError::InvalidIeValue(format!(
            "{} supported PLMNs, expected 1..={}",
            params.supported_plmns.len(),
            MAX_NOOF_SPLMNS
        )));
    }
    if let Some(bad) = params.supported_plmns.iter().find(|entry| !entry.plmn.is_valid()) {
        return Err(ProcedureError::InvalidIeValue(format!(
            "PLMN {} does not fit MCC/MNC digits",
            bad.plmn
        )));
    }

    let request = GnbCuUpE1SetupRequest {
        transaction_id: TransactionId(params.transaction_id),
        gnb_cu_up_id,
        gnb_cu_up_name: params.gnb_cu_up_name.as_deref().map(GnbCuUpName::new),
        cn_support: params.cn_support,
        supported_plmns: build_supported_plmns(&params.supported_plmns),
        gnb_cu_up_capacity: params.gnb_cu_up_capacity.map(GnbCuUpCapacity),
    };

    Ok(request.into())
}

fn build_supported_plmns(plmns: &[SupportedPlmn]) -> SupportedPlmnsList {
    plmns
        .iter()
        .map(|entry| {
            let plmn_identity = PlmnIdentity::from(entry.plmn);
            let mut item = SupportedPlmnsItem::new(plmn_identity);
            if !entry.slices.is_empty() {
                item.slice_support_list = Some(SliceSupportList::new(
                    entry.slices.iter().cloned().map(Into::into).collect(),
                ));
            }
            if !entry.nr_cells.is_empty() {
                item.nr_cgi_support_list = Some(NrCgiSupportList::new(
                    entry
                        .nr_cells
                        .iter()
                        .map(|&cell| NrCgi::new(plmn_identity, NrCellIdentity(cell)).into())
                        .collect(),
                ));
            }
            item
        })
        .collect::<Vec<_>>()
        .into()
}

// ============================================================================
// E1 Setup Request Parser
// ============================================================================

/// Parse a gNB-CU-UP E1 Setup Request from an E1AP PDU
pub fn parse_e1_setup_request(pdu: &E1apPdu) -> Result<E1SetupRequestData, ProcedureError> {
    let request = match pdu {
        E1apPdu::InitiatingMessage(InitiatingMessage::GnbCuUpE1SetupRequest(request)) => request,
        _ => return Err(ProcedureError::unexpected("GNB-CU-UP-E1SetupRequest", pdu)),
    };

    let supported_plmns = request
        .supported_plmns
        .iter()
        .map(|item| SupportedPlmn {
            plmn: item.plmn_identity.to_plmn(),
            slices: item
                .slice_support_list
                .iter()
                .flat_map(|list| list.iter().map(|slice| slice.snssai.clone()))
                .collect(),
            nr_cells: item
                .nr_cgi_support_list
                .iter()
                .flat_map(|list| list.iter().map(|cell| cell.nr_cgi.nr_cell_identity.0))
                .collect(),
        })
        .collect();

    Ok(E1SetupRequestData {
        transaction_id: request.transaction_id.value(),
        gnb_cu_up_id: request.gnb_cu_up_id.value(),
        gnb_cu_up_name: request
            .gnb_cu_up_name
            .as_ref()
            .map(|name| name.as_str().to_string()),
        cn_support: request.cn_support,
        supported_plmns,
        gnb_cu_up_capacity: request.gnb_cu_up_capacity.map(GnbCuUpCapacity::value),
    })
}

// ============================================================================
// E1 Setup Response / Failure Builders
// ============================================================================

/// Build a gNB-CU-UP E1 Setup Response PDU
pub fn build_e1_setup_response(transaction_id: u8, gnb_cu_cp_name: Option<&str>) -> E1apPdu {
    GnbCuUpE1SetupResponse {
        transaction_id: TransactionId(transaction_id),
        gnb_cu_cp_name: gnb_cu_cp_name.map(GnbCuCpName::new),
    }
    .into()
}

/// Build a gNB-CU-UP E1 Setup Failure PDU
pub fn build_e1_setup_failure(params: &E1SetupFailureParams) -> E1apPdu {
    GnbCuUpE1SetupFailure {
        transaction_id: TransactionId(params.transaction_id),
        cause: params.cause.clone(),
        time_to_wait: params.time_to_wait,
        criticality_diagnostics: params.criticality_diagnostics.clone(),
    }
    .into()
}

// ============================================================================
// E1 Setup Outcome Parser
// ============================================================================

/// Parse the answer to a gNB-CU-UP E1 Setup Request
///
/// # Returns
/// * `Ok(E1SetupOutcome)` - Response or failure contents
/// * `Err(ProcedureError)` - If `pdu` is neither
pub fn parse_e1_setup_outcome(pdu: &E1apPdu) -> Result<E1SetupOutcome, ProcedureError> {
    match pdu {
        E1apPdu::SuccessfulOutcome(SuccessfulOutcome::GnbCuUpE1SetupResponse(response)) => {
            Ok(E1SetupOutcome::Success {
                transaction_id: response.transaction_id.value(),
                gnb_cu_cp_name: response
                    .gnb_cu_cp_name
                    .as_ref()
                    .map(|name| name.as_str().to_string()),
            })
        }
        E1apPdu::UnsuccessfulOutcome(UnsuccessfulOutcome::GnbCuUpE1SetupFailure(failure)) => {
            Ok(E1SetupOutcome::Failure {
                transaction_id: failure.transaction_id.value(),
                cause: failure.cause.clone(),
                time_to_wait: failure.time_to_wait,
            })
        }
        _ => Err(ProcedureError::unexpected(
            "GNB-CU-UP-E1SetupResponse or GNB-CU-UP-E1SetupFailure",
            pdu,
        )),
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Build and encode a gNB-CU-UP E1 Setup Request
pub fn encode_e1_setup_request(params: &E1SetupRequestParams) -> Result<Vec<u8>, ProcedureError> {
    let pdu = build_e1_setup_request(params)?;
    Ok(encode_e1ap_pdu(&pdu)?)
}

/// Decode and parse the answer to a gNB-CU-UP E1 Setup Request
pub fn decode_e1_setup_outcome(bytes: &[u8]) -> Result<E1SetupOutcome, ProcedureError> {
    let pdu = decode_e1ap_pdu(bytes)?;
    parse_e1_setup_outcome(&pdu)
}

/// Check if a PDU is a gNB-CU-UP E1 Setup Request
pub fn is_e1_setup_request(pdu: &E1apPdu) -> bool {
    matches!(
        pdu,
        E1apPdu::InitiatingMessage(InitiatingMessage::GnbCuUpE1SetupRequest(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::{CauseMisc, CauseRadioNetwork};

    fn create_test_params() -> E1SetupRequestParams {
        let mut plmn = SupportedPlmn::new(Plmn::new(1, 1, false));
        plmn.slices = vec![Snssai::new(1, None), Snssai::new(1, Some([0x00, 0x00, 0x01]))];
        plmn.nr_cells = vec![0x0_0000_0010];
        E1SetupRequestParams {
            transaction_id: 0,
            gnb_cu_up_id: 1,
            gnb_cu_up_name: Some("cu-up-1".to_string()),
            cn_support: CnSupport::C5gc,
            supported_plmns: vec![plmn],
            gnb_cu_up_capacity: Some(255),
        }
    }

    #[test]
    fn test_build_e1_setup_request() {
        let pdu = build_e1_setup_request(&create_test_params()).unwrap();
        assert!(is_e1_setup_request(&pdu));
        assert_eq!(pdu.procedure_code(), crate::constants::ID_GNB_CU_UP_E1_SETUP);
    }

    #[test]
    fn test_e1_setup_request_roundtrip() {
        let params = create_test_params();
        let bytes = encode_e1_setup_request(&params).unwrap();
        let pdu = decode_e1ap_pdu(&bytes).unwrap();
        let data = parse_e1_setup_request(&pdu).unwrap();

        assert_eq!(data.transaction_id, 0);
        assert_eq!(data.gnb_cu_up_id, 1);
        assert_eq!(data.gnb_cu_up_name.as_deref(), Some("cu-up-1"));
        assert_eq!(data.cn_support, CnSupport::C5gc);
        assert_eq!(data.supported_plmns, params.supported_plmns);
        assert_eq!(data.gnb_cu_up_capacity, Some(255));
    }

    #[test]
    fn test_e1_setup_request_validation() {
        let mut params = create_test_params();
        params.gnb_cu_up_id = 1 << 36;
        assert!(matches!(
            build_e1_setup_request(&params),
            Err(ProcedureError::InvalidIeValue(_))
        ));

        let mut params = create_test_params();
        params.supported_plmns.clear();
        assert!(matches!(
            build_e1_setup_request(&params),
            Err(ProcedureError::InvalidIeValue(_))
        ));

        let mut params = create_test_params();
        params.supported_plmns[0].plmn = Plmn::new(1000, 1, false);
        assert!(matches!(
            build_e1_setup_request(&params),
            Err(ProcedureError::InvalidIeValue(_))
        ));
    }

    #[test]
    fn test_e1_setup_response_outcome() {
        let pdu = build_e1_setup_response(0, Some("cu-cp"));
        let bytes = encode_e1ap_pdu(&pdu).unwrap();
        assert_eq!(
            decode_e1_setup_outcome(&bytes).unwrap(),
            E1SetupOutcome::Success {
                transaction_id: 0,
                gnb_cu_cp_name: Some("cu-cp".to_string())
            }
        );
    }

    #[test]
    fn test_e1_setup_failure_outcome() {
        let pdu = build_e1_setup_failure(&E1SetupFailureParams {
            transaction_id: 3,
            cause: Cause::Misc(CauseMisc::ControlProcessingOverload),
            time_to_wait: Some(TimeToWait::V5s),
            criticality_diagnostics: None,
        });
        let bytes = encode_e1ap_pdu(&pdu).unwrap();
        match decode_e1_setup_outcome(&bytes).unwrap() {
            E1SetupOutcome::Failure {
                transaction_id,
                cause,
                time_to_wait,
            } => {
                assert_eq!(transaction_id, 3);
                assert_eq!(cause, Cause::Misc(CauseMisc::ControlProcessingOverload));
                assert_eq!(time_to_wait, Some(TimeToWait::V5s));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_wrong_message() {
        let pdu = build_e1_setup_failure(&E1SetupFailureParams {
            transaction_id: 0,
            cause: Cause::RadioNetwork(CauseRadioNetwork::Unspecified),
            time_to_wait: None,
            criticality_diagnostics: None,
        });
        assert_eq!(
            parse_e1_setup_request(&pdu).unwrap_err(),
            ProcedureError::InvalidMessageType {
                expected: "GNB-CU-UP-E1SetupRequest",
                actual: "GNB-CU-UP-E1SetupFailure"
            }
        );
    }
}
