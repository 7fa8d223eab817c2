//! E1AP Procedures
//!
//! Builders and parsers for the E1AP procedures covered by this crate
//! (3GPP TS 38.463 clause 8). Builders take plain parameter structs and
//! return an [`E1apPdu`](crate::pdu::E1apPdu); parsers do the reverse.

pub mod dl_data_notification;
pub mod e1_setup;
pub mod error;
pub mod error_indication;
pub mod inactivity;
pub mod reset;

pub use dl_data_notification::*;
pub use e1_setup::*;
pub use error::*;
pub use error_indication::*;
pub use inactivity::*;
pub use reset::*;
