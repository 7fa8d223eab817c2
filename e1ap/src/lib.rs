//! E1AP (E1 Application Protocol) library
//!
//! Implements ASN.1 PER encoding/decoding for E1AP messages between the
//! gNB-CU-CP and the gNB-CU-UP (3GPP TS 38.463).
//!
//! # Modules
//!
//! - `ies` - Information elements: constrained integers, enumerations,
//!   CHOICEs and SEQUENCEs with their extension containers
//! - `messages` - ProtocolIE-Container message bodies
//! - `pdu` - `E1apPdu` and the elementary procedure table
//! - `codec` - Top-level PDU encoding/decoding
//! - `procedures` - Builders and parsers for the supported procedures
//!
//! # Example
//!
//! ```
//! use e1ap::codec::{decode_e1ap_pdu, encode_e1ap_pdu};
//! use e1ap::procedures::{build_e1_setup_response, parse_e1_setup_outcome, E1SetupOutcome};
//!
//! let pdu = build_e1_setup_response(3, Some("cu-cp"));
//! let bytes = encode_e1ap_pdu(&pdu).unwrap();
//! let outcome = parse_e1_setup_outcome(&decode_e1ap_pdu(&bytes).unwrap()).unwrap();
//! assert!(matches!(outcome, E1SetupOutcome::Success { transaction_id: 3, .. }));
//! ```

#[macro_use]
mod macros;

pub mod codec;
pub mod constants;
pub mod ies;
pub mod messages;
pub mod pdu;
pub mod procedures;


pub use codec::{
    decode_e1ap_pdu, decode_e1ap_pdu_with, encode_e1ap_pdu, encode_e1ap_pdu_with, E1apCodecError,
};
pub use pdu::{E1apPdu, InitiatingMessage, SuccessfulOutcome, UnsuccessfulOutcome};
