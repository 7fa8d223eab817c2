//! IEs of DL Data Notification (TS 38.463 9.2.2.x)

use e1ap_per::{
    decode_extension_container, encode_extension_container, present_extensions, Constraint,
    PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult, SizeConstraint,
};
use serde::Serialize;

use super::activity::PduSessionId;
use crate::constants::{
    ID_QOS_FLOW_MAPPING_INDICATION, MAX_NOOF_PDU_SESSION_RESOURCE, MAX_NOOF_QOS_FLOWS,
};

per_integer! {
    /// Paging Policy Indicator.
    ///
    /// ASN.1: PPI ::= INTEGER (0..7, ...)
    pub struct Ppi(u8): "PPI", Constraint::extensible(0, 7);
}

per_integer! {
    /// ASN.1: QoS-Flow-Identifier ::= INTEGER (0..63)
    pub struct QosFlowIdentifier(u8): "QoS-Flow-Identifier", Constraint::new(0, 63);
}

per_enumerated! {
    /// ASN.1: QoS-Flow-Mapping-Indication ::= ENUMERATED { ul, dl, ... }
    pub enum QosFlowMappingIndication("QoS-Flow-Mapping-Indication", extensible) {
        Ul = "ul",
        Dl = "dl",
    }
}

extension_set! {
    /// QoS-Flow-Item-ExtIEs: the flow mapping indication
    pub struct QosFlowItemExtIes("QoS-Flow-Item-ExtIEs") {
        qos_flow_mapping_indication: QosFlowMappingIndication =
            (ID_QOS_FLOW_MAPPING_INDICATION, Ignore),
    }
}

/// ASN.1: QoS-Flow-Item ::= SEQUENCE { qoS-Flow-Identifier, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QosFlowItem {
    pub qos_flow_identifier: QosFlowIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<QosFlowItemExtIes>,
}

impl QosFlowItem {
    pub fn new(qos_flow_identifier: QosFlowIdentifier) -> Self {
        Self {
            qos_flow_identifier,
            ie_exts: None,
        }
    }

    pub fn with_mapping_indication(mut self, indication: QosFlowMappingIndication) -> Self {
        self.ie_exts
            .get_or_insert_with(QosFlowItemExtIes::default)
            .qos_flow_mapping_indication = Some(indication);
        self
    }

    pub fn mapping_indication(&self) -> Option<QosFlowMappingIndication> {
        self.ie_exts
            .as_ref()
            .and_then(|exts| exts.qos_flow_mapping_indication)
    }
}

impl PerEncode for QosFlowItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.qos_flow_identifier.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for QosFlowItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let qos_flow_identifier = QosFlowIdentifier::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            qos_flow_identifier,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: QoS-Flow-List ::= SEQUENCE (SIZE (1..maxnoofQoSFlows)) OF QoS-Flow-Item
    pub struct QosFlowList(Vec<QosFlowItem>): SizeConstraint::range(1, MAX_NOOF_QOS_FLOWS);
}

extension_set! {
    pub struct PduSessionToNotifyItemExtIes("PDU-Session-To-Notify-Item-ExtIEs") {}
}

/// ASN.1: PDU-Session-To-Notify-Item ::= SEQUENCE {
///     pDU-Session-ID, qoS-Flow-List, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PduSessionToNotifyItem {
    pub pdu_session_id: PduSessionId,
    pub qos_flow_list: QosFlowList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<PduSessionToNotifyItemExtIes>,
}

impl PduSessionToNotifyItem {
    pub fn new(pdu_session_id: PduSessionId, qos_flow_list: QosFlowList) -> Self {
        Self {
            pdu_session_id,
            qos_flow_list,
            ie_exts: None,
        }
    }
}

impl PerEncode for PduSessionToNotifyItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.pdu_session_id.per_encode(encoder)?;
        self.qos_flow_list.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for PduSessionToNotifyItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let pdu_session_id = PduSessionId::per_decode(decoder)?;
        let qos_flow_list = QosFlowList::per_decode(decoder)?;
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
            qos_flow_list,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: PDU-Session-To-Notify-List ::= SEQUENCE (SIZE (1..maxnoofPDUSessionResource)) OF PDU-Session-To-Notify-Item
    pub struct PduSessionToNotifyList(Vec<PduSessionToNotifyItem>):
        SizeConstraint::range(1, MAX_NOOF_PDU_SESSION_RESOURCE);
}
