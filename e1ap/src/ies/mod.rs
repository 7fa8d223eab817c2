//! E1AP information elements (TS 38.463 clause 9.3)

pub mod activity;
pub mod cause;
pub mod common;
pub mod diagnostics;
pub mod notification;
pub mod pdcp;
pub mod plmn;
pub mod qos;
pub mod reset;

pub use activity::*;
pub use cause::*;
pub use common::*;
pub use diagnostics::*;
pub use notification::*;
pub use pdcp::*;
pub use plmn::*;
pub use qos::*;
pub use reset::*;
