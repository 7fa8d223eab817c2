//! PLMN, slice and cell identities carried in the E1 Setup procedures

use std::fmt;

use e1ap_common::{BitString, Plmn};
use e1ap_per::{
    decode_extension_container, decode_optional, encode_extension_container, encode_optional,
    present_extensions, serialize_hex, Choice, PerDecode, PerDecoder, PerEncode, PerEncoder,
    PerError, PerResult, ProtocolIeSingleContainer, SizeConstraint,
};
use serde::Serialize;

use super::qos::QosParametersSupportList;
use crate::constants::{ID_NPN_SUPPORT_INFO, MAX_NOOF_NRCGI, MAX_NOOF_SLICE_ITEMS, MAX_NOOF_SPLMNS};

/// ASN.1: PLMN-Identity ::= OCTET STRING (SIZE (3))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlmnIdentity(#[serde(serialize_with = "serialize_hex")] pub [u8; 3]);

impl PlmnIdentity {
    const SIZE: SizeConstraint = SizeConstraint::fixed(3);

    pub fn to_plmn(self) -> Plmn {
        Plmn::decode(self.0)
    }
}

impl From<Plmn> for PlmnIdentity {
    fn from(plmn: Plmn) -> Self {
        Self(plmn.encode())
    }
}

impl fmt::Display for PlmnIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plmn())
    }
}

impl PerEncode for PlmnIdentity {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        encoder.encode_octet_string(&self.0, &Self::SIZE)
    }
}

impl PerDecode for PlmnIdentity {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        Ok(Self(decode_fixed_octets(decoder, &Self::SIZE)?))
    }
}

/// Writes the `width` low bits of `value` as a fixed-size BIT STRING.
fn encode_fixed_bits(encoder: &mut PerEncoder, value: u64, width: usize) -> PerResult<()> {
    let ub = (1i64 << width) - 1;
    if value > ub as u64 {
        return Err(PerError::ValueOutOfRange {
            value: i64::try_from(value).unwrap_or(i64::MAX),
            lb: 0,
            ub,
        });
    }
    encoder.encode_bit_string(&BitString::from_u64(value, width), &SizeConstraint::fixed(width))
}

fn decode_fixed_bits(decoder: &mut PerDecoder<'_>, width: usize) -> PerResult<u64> {
    decoder
        .decode_bit_string(&SizeConstraint::fixed(width))?
        .to_u64()
        .ok_or_else(|| PerError::Decode(format!("{width}-bit string does not fit u64")))
}

/// Reads a fixed-size OCTET STRING straight into an array.
fn decode_fixed_octets<const N: usize>(
    decoder: &mut PerDecoder<'_>,
    size: &SizeConstraint,
) -> PerResult<[u8; N]> {
    let octets = decoder.decode_octet_string(size)?;
    <[u8; N]>::try_from(octets.as_slice()).map_err(|_| PerError::SizeOutOfRange {
        size: octets.len(),
        lb: N,
        ub: Some(N),
    })
}

/// ASN.1: NR-Cell-Identity ::= BIT STRING (SIZE (36))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NrCellIdentity(pub u64);

impl NrCellIdentity {
    pub const BITS: usize = 36;
}

impl PerEncode for NrCellIdentity {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        encode_fixed_bits(encoder, self.0, Self::BITS)
    }
}

impl PerDecode for NrCellIdentity {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        decode_fixed_bits(decoder, Self::BITS).map(Self)
    }
}

/// ASN.1: NID ::= BIT STRING (SIZE (44))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nid(pub u64);

impl Nid {
    pub const BITS: usize = 44;
}

impl PerEncode for Nid {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        encode_fixed_bits(encoder, self.0, Self::BITS)
    }
}

impl PerDecode for Nid {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        decode_fixed_bits(decoder, Self::BITS).map(Self)
    }
}

extension_set! {
    pub struct SnssaiExtIes("SNSSAI-ExtIEs") {}
}

/// ASN.1: SNSSAI ::= SEQUENCE {
///     sST OCTET STRING (SIZE (1)), sD OCTET STRING (SIZE (3)) OPTIONAL,
///     iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snssai {
    pub sst: u8,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_sd")]
    pub sd: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<SnssaiExtIes>,
}

fn serialize_sd<S: serde::Serializer>(sd: &Option<[u8; 3]>, serializer: S) -> Result<S::Ok, S::Error> {
    match sd {
        Some(sd) => serialize_hex(sd, serializer),
        None => serializer.serialize_none(),
    }
}

impl Snssai {
    const SST_SIZE: SizeConstraint = SizeConstraint::fixed(1);
    const SD_SIZE: SizeConstraint = SizeConstraint::fixed(3);

    pub fn new(sst: u8, sd: Option<[u8; 3]>) -> Self {
        Self {
            sst,
            sd,
            ie_exts: None,
        }
    }
}

impl PerEncode for Snssai {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[self.sd.is_some(), ie_exts.is_some()]);
        encoder.encode_octet_string(&[self.sst], &Self::SST_SIZE)?;
        if let Some(sd) = &self.sd {
            encoder.encode_octet_string(sd, &Self::SD_SIZE)?;
        }
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for Snssai {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [sd_present, ie_exts]) = decoder.decode_sequence_preamble::<2>(true)?;
        let [sst] = decode_fixed_octets(decoder, &Self::SST_SIZE)?;
        let sd = if sd_present {
            Some(decode_fixed_octets(decoder, &Self::SD_SIZE)?)
        } else {
            None
        };
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self { sst, sd, ie_exts })
    }
}

extension_set! {
    pub struct SliceSupportItemExtIes("Slice-Support-Item-ExtIEs") {}
}

/// ASN.1: Slice-Support-Item ::= SEQUENCE { sNSSAI, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceSupportItem {
    pub snssai: Snssai,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<SliceSupportItemExtIes>,
}

impl From<Snssai> for SliceSupportItem {
    fn from(snssai: Snssai) -> Self {
        Self {
            snssai,
            ie_exts: None,
        }
    }
}

impl PerEncode for SliceSupportItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.snssai.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for SliceSupportItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let snssai = Snssai::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self { snssai, ie_exts })
    }
}

per_list! {
    /// ASN.1: Slice-Support-List ::= SEQUENCE (SIZE (1..maxnoofSliceItems)) OF Slice-Support-Item
    pub struct SliceSupportList(Vec<SliceSupportItem>): SizeConstraint::range(1, MAX_NOOF_SLICE_ITEMS);
}

extension_set! {
    pub struct NrCgiExtIes("NR-CGI-ExtIEs") {}
}

/// ASN.1: NR-CGI ::= SEQUENCE { pLMN-Identity, nR-Cell-Identity, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NrCgi {
    pub plmn_identity: PlmnIdentity,
    pub nr_cell_identity: NrCellIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<NrCgiExtIes>,
}

impl NrCgi {
    pub fn new(plmn_identity: PlmnIdentity, nr_cell_identity: NrCellIdentity) -> Self {
        Self {
            plmn_identity,
            nr_cell_identity,
            ie_exts: None,
        }
    }
}

impl PerEncode for NrCgi {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.plmn_identity.per_encode(encoder)?;
        self.nr_cell_identity.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for NrCgi {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let plmn_identity = PlmnIdentity::per_decode(decoder)?;
        let nr_cell_identity = NrCellIdentity::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            plmn_identity,
            nr_cell_identity,
            ie_exts,
        })
    }
}

extension_set! {
    pub struct NrCgiSupportItemExtIes("NR-CGI-Support-Item-ExtIEs") {}
}

/// ASN.1: NR-CGI-Support-Item ::= SEQUENCE { nR-CGI, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NrCgiSupportItem {
    pub nr_cgi: NrCgi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<NrCgiSupportItemExtIes>,
}

impl From<NrCgi> for NrCgiSupportItem {
    fn from(nr_cgi: NrCgi) -> Self {
        Self {
            nr_cgi,
            ie_exts: None,
        }
    }
}

impl PerEncode for NrCgiSupportItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.nr_cgi.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for NrCgiSupportItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let nr_cgi = NrCgi::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self { nr_cgi, ie_exts })
    }
}

per_list! {
    /// ASN.1: NR-CGI-Support-List ::= SEQUENCE (SIZE (1..maxnoofNRCGI)) OF NR-CGI-Support-Item
    pub struct NrCgiSupportList(Vec<NrCgiSupportItem>): SizeConstraint::range(1, MAX_NOOF_NRCGI);
}

extension_set! {
    pub struct NpnSupportInfoSnpnExtIes("NPNSupportInfo-SNPN-ExtIEs") {}
}

/// ASN.1: NPNSupportInfo-SNPN ::= SEQUENCE { nID, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NpnSupportInfoSnpn {
    pub nid: Nid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<NpnSupportInfoSnpnExtIes>,
}

impl PerEncode for NpnSupportInfoSnpn {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.nid.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for NpnSupportInfoSnpn {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let nid = Nid::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self { nid, ie_exts })
    }
}

/// ASN.1: NPNSupportInfo ::= CHOICE { sNPN, choice-extension }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NpnSupportInfo {
    #[serde(rename = "sNPN")]
    Snpn(NpnSupportInfoSnpn),
    #[serde(rename = "choice-extension")]
    ChoiceExtension(ProtocolIeSingleContainer),
}

impl Choice for NpnSupportInfo {
    const NAME: &'static str = "NPNSupportInfo";
    const ALTERNATIVES: &'static [&'static str] = &["sNPN", "choice-extension"];

    fn index(&self) -> usize {
        match self {
            NpnSupportInfo::Snpn(_) => 0,
            NpnSupportInfo::ChoiceExtension(_) => 1,
        }
    }
}

impl PerEncode for NpnSupportInfo {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        self.encode_choice_index(encoder)?;
        match self {
            NpnSupportInfo::Snpn(value) => value.per_encode(encoder),
            NpnSupportInfo::ChoiceExtension(value) => value.per_encode(encoder),
        }
    }
}

impl PerDecode for NpnSupportInfo {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        match Self::decode_choice_index(decoder)? {
            0 => Ok(NpnSupportInfo::Snpn(NpnSupportInfoSnpn::per_decode(decoder)?)),
            1 => Ok(NpnSupportInfo::ChoiceExtension(
                ProtocolIeSingleContainer::per_decode(decoder)?,
            )),
            index => Err(Self::invalid_index(index)),
        }
    }
}

extension_set! {
    pub struct SupportedPlmnsExtIes("SupportedPLMNs-ExtIEs") {
        npn_support_info: NpnSupportInfo = (ID_NPN_SUPPORT_INFO, Reject),
    }
}

/// ASN.1: SupportedPLMNs-Item ::= SEQUENCE {
///     pLMN-Identity, slice-Support-List OPTIONAL, nR-CGI-Support-List OPTIONAL,
///     qoS-Parameters-Support-List OPTIONAL, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedPlmnsItem {
    pub plmn_identity: PlmnIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_support_list: Option<SliceSupportList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_cgi_support_list: Option<NrCgiSupportList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_parameters_support_list: Option<QosParametersSupportList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<SupportedPlmnsExtIes>,
}

impl SupportedPlmnsItem {
    pub fn new(plmn_identity: PlmnIdentity) -> Self {
        Self {
            plmn_identity,
            slice_support_list: None,
            nr_cgi_support_list: None,
            qos_parameters_support_list: None,
            ie_exts: None,
        }
    }
}

impl PerEncode for SupportedPlmnsItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[
                self.slice_support_list.is_some(),
                self.nr_cgi_support_list.is_some(),
                self.qos_parameters_support_list.is_some(),
                ie_exts.is_some(),
            ],
        );
        self.plmn_identity.per_encode(encoder)?;
        encode_optional(encoder, &self.slice_support_list)?;
        encode_optional(encoder, &self.nr_cgi_support_list)?;
        encode_optional(encoder, &self.qos_parameters_support_list)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for SupportedPlmnsItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [slices, cells, qos, ie_exts]) = decoder.decode_sequence_preamble::<4>(true)?;
        let value = Self {
            plmn_identity: PlmnIdentity::per_decode(decoder)?,
            slice_support_list: decode_optional(decoder, slices)?,
            nr_cgi_support_list: decode_optional(decoder, cells)?,
            qos_parameters_support_list: decode_optional(decoder, qos)?,
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

per_list! {
    /// ASN.1: SupportedPLMNs-List ::= SEQUENCE (SIZE (1..maxnoofSPLMNs)) OF SupportedPLMNs-Item
    pub struct SupportedPlmnsList(Vec<SupportedPlmnsItem>): SizeConstraint::range(1, MAX_NOOF_SPLMNS);
}
