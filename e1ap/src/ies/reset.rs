//! Reset Type and UE-associated logical E1-connection lists (TS 38.463 9.3.1.31)

use e1ap_per::{
    decode_extension_container, decode_optional, decode_protocol_ie_header,
    encode_extension_container, encode_optional, encode_protocol_ie_field, present_extensions,
    Choice, Criticality, ObjectSet, ObjectSetEntry, PerDecode, PerDecoder, PerEncode, PerEncoder,
    PerError, PerResult, Presence, ProtocolIeSingleContainer, SizeConstraint,
};
use serde::Serialize;

use super::common::{GnbCuCpUeE1apId, GnbCuUpUeE1apId};
use crate::constants::{
    ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_ITEM, MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET,
};

per_enumerated! {
    /// ASN.1: ResetAll ::= ENUMERATED { reset-all, ... }
    pub enum ResetAll("ResetAll", extensible) {
        ResetAll = "reset-all",
    }
}

/// ASN.1: ResetType ::= CHOICE {
///     e1-Interface ResetAll,
///     partOfE1-Interface UE-associatedLogicalE1-ConnectionListRes,
///     choice-extension }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResetType {
    #[serde(rename = "e1-Interface")]
    E1Interface(ResetAll),
    #[serde(rename = "partOfE1-Interface")]
    PartOfE1Interface(UeAssociatedLogicalE1ConnectionListRes),
    #[serde(rename = "choice-extension")]
    ChoiceExtension(ProtocolIeSingleContainer),
}

impl ResetType {
    /// Reset of the whole E1 interface.
    pub fn all() -> Self {
        ResetType::E1Interface(ResetAll::ResetAll)
    }
}

impl Choice for ResetType {
    const NAME: &'static str = "ResetType";
    const ALTERNATIVES: &'static [&'static str] =
        &["e1-Interface", "partOfE1-Interface", "choice-extension"];

    fn index(&self) -> usize {
        match self {
            ResetType::E1Interface(_) => 0,
            ResetType::PartOfE1Interface(_) => 1,
            ResetType::ChoiceExtension(_) => 2,
        }
    }
}

impl PerEncode for ResetType {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        self.encode_choice_index(encoder)?;
        match self {
            ResetType::E1Interface(value) => value.per_encode(encoder),
            ResetType::PartOfE1Interface(value) => value.per_encode(encoder),
            ResetType::ChoiceExtension(value) => value.per_encode(encoder),
        }
    }
}

impl PerDecode for ResetType {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        match Self::decode_choice_index(decoder)? {
            0 => Ok(ResetType::E1Interface(ResetAll::per_decode(decoder)?)),
            1 => Ok(ResetType::PartOfE1Interface(
                UeAssociatedLogicalE1ConnectionListRes::per_decode(decoder)?,
            )),
            2 => Ok(ResetType::ChoiceExtension(
                ProtocolIeSingleContainer::per_decode(decoder)?,
            )),
            index => Err(Self::invalid_index(index)),
        }
    }
}

extension_set! {
    pub struct UeAssociatedLogicalE1ConnectionItemExtIes(
        "UE-associatedLogicalE1-ConnectionItemExtIEs"
    ) {}
}

/// ASN.1: UE-associatedLogicalE1-ConnectionItem ::= SEQUENCE {
///     gNB-CU-CP-UE-E1AP-ID OPTIONAL, gNB-CU-UP-UE-E1AP-ID OPTIONAL,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UeAssociatedLogicalE1ConnectionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gnb_cu_cp_ue_e1ap_id: Option<GnbCuCpUeE1apId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gnb_cu_up_ue_e1ap_id: Option<GnbCuUpUeE1apId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<UeAssociatedLogicalE1ConnectionItemExtIes>,
}

impl UeAssociatedLogicalE1ConnectionItem {
    pub fn new(
        gnb_cu_cp_ue_e1ap_id: Option<GnbCuCpUeE1apId>,
        gnb_cu_up_ue_e1ap_id: Option<GnbCuUpUeE1apId>,
    ) -> Self {
        Self {
            gnb_cu_cp_ue_e1ap_id,
            gnb_cu_up_ue_e1ap_id,
            ie_exts: None,
        }
    }
}

impl PerEncode for UeAssociatedLogicalE1ConnectionItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[
                self.gnb_cu_cp_ue_e1ap_id.is_some(),
                self.gnb_cu_up_ue_e1ap_id.is_some(),
                ie_exts.is_some(),
            ],
        );
        encode_optional(encoder, &self.gnb_cu_cp_ue_e1ap_id)?;
        encode_optional(encoder, &self.gnb_cu_up_ue_e1ap_id)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for UeAssociatedLogicalE1ConnectionItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [cp_id, up_id, ie_exts]) = decoder.decode_sequence_preamble::<3>(true)?;
        let value = Self {
            gnb_cu_cp_ue_e1ap_id: decode_optional(decoder, cp_id)?,
            gnb_cu_up_ue_e1ap_id: decode_optional(decoder, up_id)?,
            ie_exts: if ie_exts {
                decode_extension_container(decoder)?
            } else {
                None
            },
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(value)
    }
}

/// `ProtocolIE-SingleContainer` whose object set holds exactly one
/// connection item entry. Any other id fails the decode under every
/// unknown-IE policy.
macro_rules! connection_item_container {
    (
        $(#[$meta:meta])*
        $name:ident($asn:literal, $crit:ident)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub UeAssociatedLogicalE1ConnectionItem);

        impl ObjectSet for $name {
            const NAME: &'static str = $asn;
            const ENTRIES: &'static [ObjectSetEntry] = &[ObjectSetEntry::new(
                ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_ITEM,
                Criticality::$crit,
                Presence::Mandatory,
            )];
        }

        impl From<UeAssociatedLogicalE1ConnectionItem> for $name {
            fn from(item: UeAssociatedLogicalE1ConnectionItem) -> Self {
                Self(item)
            }
        }

        impl PerEncode for $name {
            fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
                encode_protocol_ie_field(
                    encoder,
                    ID_UE_ASSOCIATED_LOGICAL_E1_CONNECTION_ITEM,
                    Criticality::$crit,
                    &self.0,
                )
            }
        }

        impl PerDecode for $name {
            fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
                let (id, _criticality) = decode_protocol_ie_header(decoder)?;
                if !Self::is_id_valid(id) {
                    tracing::error!(object_set = $asn, id, "Unexpected IE id in single container");
                    return Err(PerError::UnknownIeId {
                        object_set: $asn,
                        id,
                    });
                }
                decoder
                    .decode_open_type(UeAssociatedLogicalE1ConnectionItem::per_decode)
                    .map(Self)
            }
        }
    };
}

connection_item_container!(
    /// Entry of UE-associatedLogicalE1-ConnectionListRes (criticality reject)
    UeAssociatedLogicalE1ConnectionItemRes("UE-associatedLogicalE1-ConnectionItemRes", Reject)
);

connection_item_container!(
    /// Entry of UE-associatedLogicalE1-ConnectionListResAck (criticality ignore)
    UeAssociatedLogicalE1ConnectionItemResAck(
        "UE-associatedLogicalE1-ConnectionItemResAck",
        Ignore
    )
);

per_list! {
    /// ASN.1: UE-associatedLogicalE1-ConnectionListRes ::=
    ///     SEQUENCE (SIZE (1..maxnoofIndividualE1ConnectionsToReset)) OF ProtocolIE-SingleContainer
    pub struct UeAssociatedLogicalE1ConnectionListRes(Vec<UeAssociatedLogicalE1ConnectionItemRes>):
        SizeConstraint::range(1, MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET);
}

per_list! {
    /// ASN.1: UE-associatedLogicalE1-ConnectionListResAck ::=
    ///     SEQUENCE (SIZE (1..maxnoofIndividualE1ConnectionsToReset)) OF ProtocolIE-SingleContainer
    pub struct UeAssociatedLogicalE1ConnectionListResAck(
        Vec<UeAssociatedLogicalE1ConnectionItemResAck>
    ): SizeConstraint::range(1, MAX_NOOF_INDIVIDUAL_E1_CONNECTIONS_TO_RESET);
}

impl FromIterator<UeAssociatedLogicalE1ConnectionItem> for UeAssociatedLogicalE1ConnectionListRes {
    fn from_iter<I: IntoIterator<Item = UeAssociatedLogicalE1ConnectionItem>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<UeAssociatedLogicalE1ConnectionItem>
    for UeAssociatedLogicalE1ConnectionListResAck
{
    fn from_iter<I: IntoIterator<Item = UeAssociatedLogicalE1ConnectionItem>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
