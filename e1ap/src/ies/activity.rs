//! Activity Information (TS 38.463 9.3.1.54)
//!
//! Reported by the gNB-CU-UP in Bearer Context Inactivity Notification, at
//! DRB, PDU session or UE granularity.

use e1ap_per::{
    decode_extension_container, encode_extension_container, present_extensions, Choice,
    Constraint, PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult,
    ProtocolIeSingleContainer, SizeConstraint,
};
use serde::Serialize;

use crate::constants::{MAX_NOOF_DRBS, MAX_NOOF_PDU_SESSION_RESOURCE};

per_integer! {
    /// ASN.1: DRB-ID ::= INTEGER (1..32, ...)
    pub struct DrbId(u8): "DRB-ID", Constraint::extensible(1, 32);
}

per_integer! {
    /// ASN.1: PDU-Session-ID ::= INTEGER (0..255)
    pub struct PduSessionId(u8): "PDU-Session-ID", Constraint::new(0, 255);
}

per_enumerated! {
    /// ASN.1: DRB-Activity ::= ENUMERATED { active, not-active }
    pub enum DrbActivity("DRB-Activity") {
        Active = "active",
        NotActive = "not-active",
    }
}

per_enumerated! {
    /// ASN.1: PDU-Session-Resource-Activity ::= ENUMERATED { active, not-active, ... }
    pub enum PduSessionResourceActivity("PDU-Session-Resource-Activity", extensible) {
        Active = "active",
        NotActive = "not-active",
    }
}

per_enumerated! {
    /// ASN.1: UE-Activity ::= ENUMERATED { active, not-active, ... }
    pub enum UeActivity("UE-Activity", extensible) {
        Active = "active",
        NotActive = "not-active",
    }
}

/// ASN.1: ActivityInformation ::= CHOICE {
///     dRB-Activity-List, pDU-Session-Resource-Activity-List, uE-Activity,
///     choice-extension }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ActivityInformation {
    #[serde(rename = "dRB-Activity-List")]
    DrbActivityList(DrbActivityList),
    #[serde(rename = "pDU-Session-Resource-Activity-List")]
    PduSessionResourceActivityList(PduSessionResourceActivityList),
    #[serde(rename = "uE-Activity")]
    UeActivity(UeActivity),
    #[serde(rename = "choice-extension")]
    ChoiceExtension(ProtocolIeSingleContainer),
}

impl Choice for ActivityInformation {
    const NAME: &'static str = "ActivityInformation";
    const ALTERNATIVES: &'static [&'static str] = &[
        "dRB-Activity-List",
        "pDU-Session-Resource-Activity-List",
        "uE-Activity",
        "choice-extension",
    ];

    fn index(&self) -> usize {
        match self {
            ActivityInformation::DrbActivityList(_) => 0,
            ActivityInformation::PduSessionResourceActivityList(_) => 1,
            ActivityInformation::UeActivity(_) => 2,
            ActivityInformation::ChoiceExtension(_) => 3,
        }
    }
}

impl PerEncode for ActivityInformation {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        self.encode_choice_index(encoder)?;
        match self {
            ActivityInformation::DrbActivityList(value) => value.per_encode(encoder),
            ActivityInformation::PduSessionResourceActivityList(value) => value.per_encode(encoder),
            ActivityInformation::UeActivity(value) => value.per_encode(encoder),
            ActivityInformation::ChoiceExtension(value) => value.per_encode(encoder),
        }
    }
}

impl PerDecode for ActivityInformation {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        match Self::decode_choice_index(decoder)? {
            0 => Ok(ActivityInformation::DrbActivityList(
                DrbActivityList::per_decode(decoder)?,
            )),
            1 => Ok(ActivityInformation::PduSessionResourceActivityList(
                PduSessionResourceActivityList::per_decode(decoder)?,
            )),
            2 => Ok(ActivityInformation::UeActivity(UeActivity::per_decode(
                decoder,
            )?)),
            3 => Ok(ActivityInformation::ChoiceExtension(
                ProtocolIeSingleContainer::per_decode(decoder)?,
            )),
            index => Err(Self::invalid_index(index)),
        }
    }
}

extension_set! {
    pub struct DrbActivityItemExtIes("DRB-Activity-ItemExtIEs") {}
}

/// ASN.1: DRB-Activity-Item ::= SEQUENCE { dRB-ID, dRB-Activity, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrbActivityItem {
    pub drb_id: DrbId,
    pub drb_activity: DrbActivity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<DrbActivityItemExtIes>,
}

impl DrbActivityItem {
    pub fn new(drb_id: DrbId, drb_activity: DrbActivity) -> Self {
        Self {
            drb_id,
            drb_activity,
            ie_exts: None,
        }
    }
}

impl PerEncode for DrbActivityItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.drb_id.per_encode(encoder)?;
        self.drb_activity.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for DrbActivityItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let drb_id = DrbId::per_decode(decoder)?;
        let drb_activity = DrbActivity::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            drb_id,
            drb_activity,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: DRB-Activity-List ::= SEQUENCE (SIZE (1..maxnoofDRBs)) OF DRB-Activity-Item
    pub struct DrbActivityList(Vec<DrbActivityItem>): SizeConstraint::range(1, MAX_NOOF_DRBS);
}

extension_set! {
    pub struct PduSessionResourceActivityItemExtIes("PDU-Session-Resource-Activity-ItemExtIEs") {}
}

/// ASN.1: PDU-Session-Resource-Activity-Item ::= SEQUENCE {
///     pDU-Session-ID, pDU-Session-Resource-Activity, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PduSessionResourceActivityItem {
    pub pdu_session_id: PduSessionId,
    pub pdu_session_resource_activity: PduSessionResourceActivity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<PduSessionResourceActivityItemExtIes>,
}

impl PduSessionResourceActivityItem {
    pub fn new(pdu_session_id: PduSessionId, activity: PduSessionResourceActivity) -> Self {
        Self {
            pdu_session_id,
            pdu_session_resource_activity: activity,
            ie_exts: None,
        }
    }
}

impl PerEncode for PduSessionResourceActivityItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.pdu_session_id.per_encode(encoder)?;
        self.pdu_session_resource_activity.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for PduSessionResourceActivityItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let pdu_session_id = PduSessionId::per_decode(decoder)?;
        let pdu_session_resource_activity = PduSessionResourceActivity::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            pdu_session_id,
            pdu_session_resource_activity,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: PDU-Session-Resource-Activity-List ::= SEQUENCE (SIZE (1..maxnoofPDUSessionResource)) OF ...
    pub struct PduSessionResourceActivityList(Vec<PduSessionResourceActivityItem>):
        SizeConstraint::range(1, MAX_NOOF_PDU_SESSION_RESOURCE);
}
