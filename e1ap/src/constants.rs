//! E1AP-Constants (3GPP TS 38.463 clause 9.4.7)
//!
//! Elementary procedure codes, protocol IE ids and list maxima used by the
//! IEs and messages in this crate.

use e1ap_per::ProtocolIeId;

// ============================================================================
// Elementary procedures
// ============================================================================

pub const ID_RESET: u8 = 0;
pub const ID_ERROR_INDICATION: u8 = 1;
pub const ID_PRIVATE_MESSAGE: u8 = 2;
pub const ID_GNB_CU_UP_E1_SETUP: u8 = 3;
pub const ID_GNB_CU_CP_E1_SETUP: u8 = 4;
pub const ID_GNB_CU_UP_CONFIGURATION_UPDATE: u8 = 5;
pub const ID_GNB_CU_CP_CONFIGURATION_UPDATE: u8 = 6;
pub const ID_E1_RELEASE: u8 = 7;
pub const ID_BEARER_CONTEXT_SETUP: u8 = 8;
pub const ID_BEARER_CONTEXT_MODIFICATION: u8 = 9;
pub const ID_BEARER_CONTEXT_MODIFICATION_REQUIRED: u8 = 10;
pub const ID_BEARER_CONTEXT_RELEASE: u8 = 11;
pub const ID_BEARER_CONTEXT_RELEASE_REQUEST: u8 = 12;
pub const ID_BEARER_CONTEXT_INACTIVITY_NOTIFICATION: u8 = 13;
pub const ID_DL_DATA_NOTIFICATION: u8 = 14;

// ============================================================================
// Protocol IE ids
// ============================================================================

pub const ID_CAUSE: ProtocolIeId = 0;
pub const ID_CRITICALITY_DIAGNOSTICS: ProtocolIeId = 1;
pub const ID_GNB_CU_CP_UE_E1AP_ID: ProtocolIeId = 2;
pub const ID_GNB_CU_UP_UE_E1AP_ID: ProtocolIeId = 3;
pub const ID_RESET_TYPE: ProtocolIeId = 4;
pub const ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_ITEM: ProtocolIeId = 5;
pub const ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_LIST_RES_ACK: ProtocolIeId = 6;
pub const ID_GNB_CU_UP_ID: ProtocolIeId = 7;
pub const ID_GNB_CU_UP_NAME: ProtocolIeId = 8;
pub const ID_GNB_CU_CP_NAME: ProtocolIeId = 9;
pub const ID_CN_SUPPORT: ProtocolIeId = 10;
pub const ID_SUPPORTED_PLMNS: ProtocolIeId = 11;
pub const ID_TIME_TO_WAIT: ProtocolIeId = 12;
pub const ID_ACTIVITY_INFORMATION: ProtocolIeId = 24;
pub const ID_TRANSACTION_ID: ProtocolIeId = 57;
pub const ID_GNB_CU_UP_CAPACITY: ProtocolIeId = 64;
pub const ID_QOS_FLOW_MAPPING_INDICATION: ProtocolIeId = 80;
pub const ID_PPI: ProtocolIeId = 92;
pub const ID_PDU_SESSION_TO_NOTIFY_LIST: ProtocolIeId = 102;
pub const ID_NPN_SUPPORT_INFO: ProtocolIeId = 125;

// ============================================================================
// Maxima
// ============================================================================

pub const MAX_NOOF_ERRORS: usize = 256;
pub const MAX_NOOF_SPLMNS: usize = 12;
pub const MAX_NOOF_SLICE_ITEMS: usize = 1024;
pub const MAX_NOOF_NRCGI: usize = 512;
pub const MAX_NOOF_EUTRAN_QOS_PARAMETERS: usize = 256;
pub const MAX_NOOF_NGRAN_QOS_PARAMETERS: usize = 256;
pub const MAX_NOOF_DRBS: usize = 32;
pub const MAX_NOOF_PDU_SESSION_RESOURCE: usize = 256;
pub const MAX_NOOF_QOS_FLOWS: usize = 64;
pub const MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET: usize = 65536;
