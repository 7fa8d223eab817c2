//! Test fixtures and node configuration helpers
//!
//! Provides pre-configured gNB-CU-UP and gNB-CU-CP nodes and reference PDU
//! captures.

use e1ap::ies::{Cause, CauseMisc, CnSupport, Snssai, TimeToWait};
use e1ap::pdu::E1apPdu;
use e1ap::procedures::{
    build_e1_setup_failure, build_e1_setup_response, E1SetupFailureParams,
    E1SetupRequestData, E1SetupRequestParams, SupportedPlmn,
};
use e1ap_common::Plmn;

/// Test gNB-CU-UP configuration
#[derive(Debug, Clone)]
pub struct TestCuUpConfig {
    /// gNB-CU-UP ID
    pub gnb_cu_up_id: u64,
    /// gNB-CU-UP Name
    pub name: Option<String>,
    /// Core networks the CU-UP connects to
    pub cn_support: CnSupport,
    /// Served PLMNs with their slices and cells
    pub plmns: Vec<SupportedPlmn>,
    /// Relative capacity (0..255)
    pub capacity: Option<u8>,
}

impl Default for TestCuUpConfig {
    fn default() -> Self {
        let mut plmn = SupportedPlmn::new(Plmn::new(1, 1, false));
        plmn.slices = vec![Snssai::new(1, None)];
        plmn.nr_cells = vec![0x0_0000_0010];
        Self {
            gnb_cu_up_id: 1,
            name: Some("cu-up-1".to_string()),
            cn_support: CnSupport::C5gc,
            plmns: vec![plmn],
            capacity: Some(200),
        }
    }
}

impl TestCuUpConfig {
    /// Replace the served PLMNs with a single PLMN without slices or cells
    pub fn with_plmn(mut self, mcc: u16, mnc: u16) -> Self {
        self.plmns = vec![SupportedPlmn::new(Plmn::new(mcc, mnc, mnc >= 100))];
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Setup Request parameters for this node
    pub fn setup_request(&self, transaction_id: u8) -> E1SetupRequestParams {
        E1SetupRequestParams {
            transaction_id,
            gnb_cu_up_id: self.gnb_cu_up_id,
            gnb_cu_up_name: self.name.clone(),
            cn_support: self.cn_support,
            supported_plmns: self.plmns.clone(),
            gnb_cu_up_capacity: self.capacity,
        }
    }
}

/// Test gNB-CU-CP configuration
#[derive(Debug, Clone)]
pub struct TestCuCpConfig {
    /// gNB-CU-CP Name
    pub name: Option<String>,
    /// PLMNs this CU-CP serves
    pub plmns: Vec<Plmn>,
    /// Wait time sent with a Setup Failure
    pub time_to_wait: TimeToWait,
}

impl Default for TestCuCpConfig {
    fn default() -> Self {
        Self {
            name: Some("cu-cp".to_string()),
            plmns: vec![Plmn::new(1, 1, false)],
            time_to_wait: TimeToWait::V10s,
        }
    }
}

impl TestCuCpConfig {
    /// Answer a Setup Request: accept when at least one PLMN is shared
    pub fn answer_setup(&self, request: &E1SetupRequestData) -> E1apPdu {
        let shared = request
            .supported_plmns
            .iter()
            .any(|entry| self.plmns.contains(&entry.plmn));

        if shared {
            build_e1_setup_response(request.transaction_id, self.name.as_deref())
        } else {
            build_e1_setup_failure(&E1SetupFailureParams {
                transaction_id: request.transaction_id,
                cause: Cause::Misc(CauseMisc::Unspecified),
                time_to_wait: Some(self.time_to_wait),
                criticality_diagnostics: None,
            })
        }
    }
}

/// Reference APER encodings
pub mod captures {
    /// gNB-CU-UP E1 Setup Request: TID 0, gNB-CU-UP ID 1, c-5gc, PLMN 001/01
    pub const E1_SETUP_REQUEST: &str =
        "0003001d 000004 003900020000 000700020001 000a000120 000b00050000 00f110";

    /// gNB-CU-UP E1 Setup Response: TID 9, no name
    pub const E1_SETUP_RESPONSE: &str = "20030009 000001 003900020009";

    /// Reset: TID 1, misc/unspecified, reset all
    pub const RESET: &str = "00000013 000003 003900020001 0000400168 0004000100";

    /// Reset without its mandatory ResetType IE
    pub const RESET_MISSING_RESET_TYPE: &str = "0000000e 000002 003900020001 0000400168";
}
