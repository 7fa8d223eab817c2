//! QoS parameter support advertised by a gNB-CU-UP (TS 38.463 9.3.1.x)

use e1ap_per::{
    decode_extension_container, decode_optional, encode_extension_container, encode_optional,
    present_extensions, Constraint, PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult,
    SizeConstraint,
};
use serde::Serialize;

use crate::constants::{MAX_NOOF_EUTRAN_QOS_PARAMETERS, MAX_NOOF_NGRAN_QOS_PARAMETERS};

per_integer! {
    /// ASN.1: QCI ::= INTEGER (0..255)
    pub struct Qci(u8): "QCI", Constraint::new(0, 255);
}

per_integer! {
    /// ASN.1: PriorityLevel ::= INTEGER { spare (0), highest (1), lowest (14), no-priority (15) } (0..15)
    pub struct PriorityLevel(u8): "PriorityLevel", Constraint::new(0, 15);
}

impl PriorityLevel {
    pub const SPARE: Self = Self(0);
    pub const HIGHEST: Self = Self(1);
    pub const LOWEST: Self = Self(14);
    pub const NO_PRIORITY: Self = Self(15);
}

per_enumerated! {
    /// ASN.1: Pre-emptionCapability ::= ENUMERATED { shall-not-trigger-pre-emption, may-trigger-pre-emption, ... }
    pub enum PreEmptionCapability("Pre-emptionCapability", extensible) {
        ShallNotTriggerPreEmption = "shall-not-trigger-pre-emption",
        MayTriggerPreEmption = "may-trigger-pre-emption",
    }
}

per_enumerated! {
    /// ASN.1: Pre-emptionVulnerability ::= ENUMERATED { not-pre-emptable, pre-emptable, ... }
    pub enum PreEmptionVulnerability("Pre-emptionVulnerability", extensible) {
        NotPreEmptable = "not-pre-emptable",
        PreEmptable = "pre-emptable",
    }
}

per_integer! {
    /// Bits per second.
    ///
    /// ASN.1: BitRate ::= INTEGER (0..4000000000000, ...)
    pub struct BitRate(u64): "BitRate", Constraint::extensible(0, 4_000_000_000_000);
}

per_integer! {
    /// ASN.1: INTEGER (0..255, ...) (fiveQI of Non-Dynamic5QIDescriptor)
    pub struct FiveQi(u8): "FiveQI", Constraint::extensible(0, 255);
}

per_integer! {
    /// ASN.1: QoSPriorityLevel ::= INTEGER (0..127, ...)
    pub struct QosPriorityLevel(u8): "QoSPriorityLevel", Constraint::extensible(0, 127);
}

per_integer! {
    /// Milliseconds.
    ///
    /// ASN.1: AveragingWindow ::= INTEGER (0..4095, ...)
    pub struct AveragingWindow(u16): "AveragingWindow", Constraint::extensible(0, 4095);
}

per_integer! {
    /// Bytes. Values 4096..2000000 are extension values.
    ///
    /// ASN.1: MaxDataBurstVolume ::= INTEGER (0..4095, ..., 4096..2000000)
    pub struct MaxDataBurstVolume(u32): "MaxDataBurstVolume", Constraint::extensible(0, 4095);
}

extension_set! {
    pub struct EutranAllocationAndRetentionPriorityExtIes(
        "EUTRANAllocationAndRetentionPriority-ExtIEs"
    ) {}
}

/// ASN.1: EUTRANAllocationAndRetentionPriority ::= SEQUENCE {
///     priorityLevel, pre-emptionCapability, pre-emptionVulnerability,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EutranAllocationAndRetentionPriority {
    pub priority_level: PriorityLevel,
    pub pre_emption_capability: PreEmptionCapability,
    pub pre_emption_vulnerability: PreEmptionVulnerability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<EutranAllocationAndRetentionPriorityExtIes>,
}

impl PerEncode for EutranAllocationAndRetentionPriority {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.priority_level.per_encode(encoder)?;
        self.pre_emption_capability.per_encode(encoder)?;
        self.pre_emption_vulnerability.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for EutranAllocationAndRetentionPriority {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let value = Self {
            priority_level: PriorityLevel::per_decode(decoder)?,
            pre_emption_capability: PreEmptionCapability::per_decode(decoder)?,
            pre_emption_vulnerability: PreEmptionVulnerability::per_decode(decoder)?,
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

extension_set! {
    pub struct GbrQosInformationExtIes("GBR-QosInformation-ExtIEs") {}
}

/// ASN.1: GBR-QosInformation ::= SEQUENCE {
///     e-RAB-MaximumBitrateDL, e-RAB-MaximumBitrateUL,
///     e-RAB-GuaranteedBitrateDL, e-RAB-GuaranteedBitrateUL,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GbrQosInformation {
    pub e_rab_maximum_bitrate_dl: BitRate,
    pub e_rab_maximum_bitrate_ul: BitRate,
    pub e_rab_guaranteed_bitrate_dl: BitRate,
    pub e_rab_guaranteed_bitrate_ul: BitRate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<GbrQosInformationExtIes>,
}

impl PerEncode for GbrQosInformation {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.e_rab_maximum_bitrate_dl.per_encode(encoder)?;
        self.e_rab_maximum_bitrate_ul.per_encode(encoder)?;
        self.e_rab_guaranteed_bitrate_dl.per_encode(encoder)?;
        self.e_rab_guaranteed_bitrate_ul.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for GbrQosInformation {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let value = Self {
            e_rab_maximum_bitrate_dl: BitRate::per_decode(decoder)?,
            e_rab_maximum_bitrate_ul: BitRate::per_decode(decoder)?,
            e_rab_guaranteed_bitrate_dl: BitRate::per_decode(decoder)?,
            e_rab_guaranteed_bitrate_ul: BitRate::per_decode(decoder)?,
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

extension_set! {
    pub struct EutranQosExtIes("EUTRAN-QoS-ExtIEs") {}
}

/// ASN.1: EUTRAN-QoS ::= SEQUENCE {
///     qCI, eUTRANallocationAndRetentionPriority, gbrQosInformation OPTIONAL,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EutranQos {
    pub qci: Qci,
    pub allocation_and_retention_priority: EutranAllocationAndRetentionPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbr_qos_information: Option<GbrQosInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<EutranQosExtIes>,
}

impl PerEncode for EutranQos {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[self.gbr_qos_information.is_some(), ie_exts.is_some()],
        );
        self.qci.per_encode(encoder)?;
        self.allocation_and_retention_priority.per_encode(encoder)?;
        encode_optional(encoder, &self.gbr_qos_information)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for EutranQos {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [gbr, ie_exts]) = decoder.decode_sequence_preamble::<2>(true)?;
        let value = Self {
            qci: Qci::per_decode(decoder)?,
            allocation_and_retention_priority: EutranAllocationAndRetentionPriority::per_decode(
                decoder,
            )?,
            gbr_qos_information: decode_optional(decoder, gbr)?,
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

extension_set! {
    pub struct EutranQosSupportItemExtIes("EUTRAN-QoS-Support-Item-ExtIEs") {}
}

/// ASN.1: EUTRAN-QoS-Support-Item ::= SEQUENCE { eUTRAN-QoS, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EutranQosSupportItem {
    pub eutran_qos: EutranQos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<EutranQosSupportItemExtIes>,
}

impl PerEncode for EutranQosSupportItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.eutran_qos.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for EutranQosSupportItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let eutran_qos = EutranQos::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            eutran_qos,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: EUTRAN-QoS-Support-List ::= SEQUENCE (SIZE (1..maxnoofEUTRANQOSParameters)) OF EUTRAN-QoS-Support-Item
    pub struct EutranQosSupportList(Vec<EutranQosSupportItem>):
        SizeConstraint::range(1, MAX_NOOF_EUTRAN_QOS_PARAMETERS);
}

extension_set! {
    pub struct NonDynamic5qiDescriptorExtIes("Non-Dynamic5QIDescriptor-ExtIEs") {}
}

/// ASN.1: Non-Dynamic5QIDescriptor ::= SEQUENCE {
///     fiveQI, qoSPriorityLevel OPTIONAL, averagingWindow OPTIONAL,
///     maxDataBurstVolume OPTIONAL, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonDynamic5qiDescriptor {
    pub five_qi: FiveQi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_priority_level: Option<QosPriorityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averaging_window: Option<AveragingWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_data_burst_volume: Option<MaxDataBurstVolume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<NonDynamic5qiDescriptorExtIes>,
}

impl NonDynamic5qiDescriptor {
    pub fn new(five_qi: FiveQi) -> Self {
        Self {
            five_qi,
            qos_priority_level: None,
            averaging_window: None,
            max_data_burst_volume: None,
            ie_exts: None,
        }
    }
}

impl PerEncode for NonDynamic5qiDescriptor {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[
                self.qos_priority_level.is_some(),
                self.averaging_window.is_some(),
                self.max_data_burst_volume.is_some(),
                ie_exts.is_some(),
            ],
        );
        self.five_qi.per_encode(encoder)?;
        encode_optional(encoder, &self.qos_priority_level)?;
        encode_optional(encoder, &self.averaging_window)?;
        encode_optional(encoder, &self.max_data_burst_volume)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for NonDynamic5qiDescriptor {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [priority, window, burst, ie_exts]) =
            decoder.decode_sequence_preamble::<4>(true)?;
        let value = Self {
            five_qi: FiveQi::per_decode(decoder)?,
            qos_priority_level: decode_optional(decoder, priority)?,
            averaging_window: decode_optional(decoder, window)?,
            max_data_burst_volume: decode_optional(decoder, burst)?,
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

extension_set! {
    pub struct NgranQosSupportItemExtIes("NGRANQoSSupport-Item-ExtIEs") {}
}

/// ASN.1: NGRANQoSSupport-Item ::= SEQUENCE { non-Dynamic5QIDescriptor, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgranQosSupportItem {
    pub non_dynamic_5qi_descriptor: NonDynamic5qiDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<NgranQosSupportItemExtIes>,
}

impl From<NonDynamic5qiDescriptor> for NgranQosSupportItem {
    fn from(non_dynamic_5qi_descriptor: NonDynamic5qiDescriptor) -> Self {
        Self {
            non_dynamic_5qi_descriptor,
            ie_exts: None,
        }
    }
}

impl PerEncode for NgranQosSupportItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.non_dynamic_5qi_descriptor.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for NgranQosSupportItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let non_dynamic_5qi_descriptor = NonDynamic5qiDescriptor::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            non_dynamic_5qi_descriptor,
            ie_exts,
        })
    }
}

per_list! {
    /// ASN.1: NGRANQoSSupportList ::= SEQUENCE (SIZE (1..maxnoofNGRANQOSParameters)) OF NGRANQoSSupport-Item
    pub struct NgranQosSupportList(Vec<NgranQosSupportItem>):
        SizeConstraint::range(1, MAX_NOOF_NGRAN_QOS_PARAMETERS);
}

extension_set! {
    pub struct QosParametersSupportListExtIes("QoS-Parameters-Support-List-ItemExtIEs") {}
}

/// ASN.1: QoS-Parameters-Support-List ::= SEQUENCE {
///     eUTRAN-QoS-Support-List OPTIONAL, nGRAN-QoS-Support-List OPTIONAL,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QosParametersSupportList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eutran_qos_support_list: Option<EutranQosSupportList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngran_qos_support_list: Option<NgranQosSupportList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<QosParametersSupportListExtIes>,
}

impl PerEncode for QosParametersSupportList {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[
                self.eutran_qos_support_list.is_some(),
                self.ngran_qos_support_list.is_some(),
                ie_exts.is_some(),
            ],
        );
        encode_optional(encoder, &self.eutran_qos_support_list)?;
        encode_optional(encoder, &self.ngran_qos_support_list)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for QosParametersSupportList {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [eutran, ngran, ie_exts]) = decoder.decode_sequence_preamble::<3>(true)?;
        let value = Self {
            eutran_qos_support_list: decode_optional(decoder, eutran)?,
            ngran_qos_support_list: decode_optional(decoder, ngran)?,
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
