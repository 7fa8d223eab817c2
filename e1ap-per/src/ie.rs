//! Protocol IE building blocks shared by every E1AP container
//!
//! `Criticality` and `Presence`, the object-set tables that describe which
//! ids a container may carry, and the ProtocolIE / ProtocolExtension
//! container codecs built on them.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize, Serializer};

use crate::constraint::SizeConstraint;
use crate::decoder::PerDecoder;
use crate::encoder::PerEncoder;
use crate::error::{PerError, PerResult};
use crate::traits::{Enumerated, PerDecode, PerEncode};

/// `ProtocolIE-ID ::= INTEGER (0..maxProtocolIEs)`
pub type ProtocolIeId = u16;

pub const MAX_PROTOCOL_IES: usize = 65535;
pub const MAX_PROTOCOL_EXTENSIONS: usize = 65535;

/// `ProtocolIE-Container`: `SEQUENCE (SIZE (0..maxProtocolIEs))`
pub const PROTOCOL_IE_CONTAINER_SIZE: SizeConstraint = SizeConstraint::range(0, MAX_PROTOCOL_IES);
/// `ProtocolExtensionContainer`: `SEQUENCE (SIZE (1..maxProtocolExtensions))`
pub const PROTOCOL_EXTENSION_CONTAINER_SIZE: SizeConstraint =
    SizeConstraint::range(1, MAX_PROTOCOL_EXTENSIONS);

/// `Criticality ::= ENUMERATED { reject, ignore, notify }`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    #[default]
    Reject = 0,
    Ignore = 1,
    Notify = 2,
}

impl Enumerated for Criticality {
    const NAME: &'static str = "Criticality";
    const NAMES: &'static [&'static str] = &["reject", "ignore", "notify"];
    const ROOT_COUNT: usize = 3;
    const EXTENSIBLE: bool = false;

    fn index(self) -> usize {
        usize::from(u8::from(self))
    }

    fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(|i| Self::try_from(i).ok())
    }
}

/// `Presence ::= ENUMERATED { optional, conditional, mandatory }`
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Optional = 0,
    Conditional = 1,
    Mandatory = 2,
}

impl Enumerated for Presence {
    const NAME: &'static str = "Presence";
    const NAMES: &'static [&'static str] = &["optional", "conditional", "mandatory"];
    const ROOT_COUNT: usize = 3;
    const EXTENSIBLE: bool = false;

    fn index(self) -> usize {
        usize::from(u8::from(self))
    }

    fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(|i| Self::try_from(i).ok())
    }
}

macro_rules! impl_enumerated_codec {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl PerEncode for $ty {
                fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
                    self.encode_enumerated(encoder)
                }
            }

            impl PerDecode for $ty {
                fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
                    Self::decode_enumerated(decoder)
                }
            }
        )*
    };
}

impl_enumerated_codec!(Criticality, Presence);

/// One row of an object-set table: an id allowed in a container, the
/// criticality it is sent with, and whether it must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSetEntry {
    pub id: ProtocolIeId,
    pub criticality: Criticality,
    pub presence: Presence,
}

impl ObjectSetEntry {
    pub const fn new(id: ProtocolIeId, criticality: Criticality, presence: Presence) -> Self {
        Self {
            id,
            criticality,
            presence,
        }
    }
}

/// Compile-time table of the ids a ProtocolIE or ProtocolExtension container
/// may carry.
pub trait ObjectSet {
    /// ASN.1 name of the object set, used in logs and errors
    const NAME: &'static str;
    const ENTRIES: &'static [ObjectSetEntry];

    fn idx_to_id(index: usize) -> Option<ProtocolIeId> {
        Self::ENTRIES.get(index).map(|entry| entry.id)
    }

    fn entry(id: ProtocolIeId) -> Option<&'static ObjectSetEntry> {
        Self::ENTRIES.iter().find(|entry| entry.id == id)
    }

    fn is_id_valid(id: ProtocolIeId) -> bool {
        Self::entry(id).is_some()
    }

    fn get_crit(id: ProtocolIeId) -> Option<Criticality> {
        Self::entry(id).map(|entry| entry.criticality)
    }

    fn get_presence(id: ProtocolIeId) -> Option<Presence> {
        Self::entry(id).map(|entry| entry.presence)
    }
}

/// Typed ProtocolExtensionContainer: one optional field per object-set entry.
pub trait ExtensionContainer: ObjectSet + Default {
    /// Ids of the fields currently set, in table order.
    fn present_ids(&self) -> Vec<ProtocolIeId>;

    /// Encodes the value of field `id` (the open type contents).
    fn encode_value(&self, id: ProtocolIeId, encoder: &mut PerEncoder) -> PerResult<()>;

    /// Decodes the value of field `id` from its open type and stores it.
    fn decode_value(&mut self, id: ProtocolIeId, decoder: &mut PerDecoder<'_>) -> PerResult<()>;

    fn is_empty(&self) -> bool {
        self.present_ids().is_empty()
    }
}

/// The container to put on the wire for an optional `ie_exts` field: a
/// container with no field set counts as absent.
pub fn present_extensions<C: ExtensionContainer>(ie_exts: &Option<C>) -> Option<&C> {
    ie_exts.as_ref().filter(|container| !container.is_empty())
}

/// Writes the `id` and `criticality` of a ProtocolIE-Field or
/// ProtocolExtensionField.
pub fn encode_protocol_ie_header(
    encoder: &mut PerEncoder,
    id: ProtocolIeId,
    criticality: Criticality,
) -> PerResult<()> {
    encoder.encode_constrained_whole_number(i64::from(id), 0, MAX_PROTOCOL_IES as i64)?;
    criticality.per_encode(encoder)
}

/// Reads the `id` and `criticality` of a ProtocolIE-Field or
/// ProtocolExtensionField.
pub fn decode_protocol_ie_header(
    decoder: &mut PerDecoder<'_>,
) -> PerResult<(ProtocolIeId, Criticality)> {
    let id = decoder.decode_constrained_whole_number(0, MAX_PROTOCOL_IES as i64)? as ProtocolIeId;
    let criticality = Criticality::per_decode(decoder)?;
    Ok((id, criticality))
}

/// Writes a complete ProtocolIE-Field: header, then `value` as an open type.
pub fn encode_protocol_ie_field<T: PerEncode + ?Sized>(
    encoder: &mut PerEncoder,
    id: ProtocolIeId,
    criticality: Criticality,
    value: &T,
) -> PerResult<()> {
    encode_protocol_ie_header(encoder, id, criticality)?;
    encoder.encode_open_type(|inner| value.per_encode(inner))
}

/// Error for a mandatory IE absent from a decoded container.
pub fn missing_mandatory_ie(container: &'static str, id: ProtocolIeId) -> PerError {
    tracing::error!(container, id, "Mandatory IE missing");
    PerError::MissingMandatoryIe { container, id }
}

/// Packs a ProtocolExtensionContainer: the count of present fields, then for
/// each one its id, table criticality and value in an open type.
pub fn encode_extension_container<C: ExtensionContainer>(
    container: &C,
    encoder: &mut PerEncoder,
) -> PerResult<()> {
    let ids = container.present_ids();
    encoder.encode_length(ids.len(), &PROTOCOL_EXTENSION_CONTAINER_SIZE)?;
    for id in ids {
        let criticality = C::get_crit(id).ok_or_else(|| {
            PerError::Encode(format!("id {id} is not part of {}", C::NAME))
        })?;
        encode_protocol_ie_header(encoder, id, criticality)?;
        encoder.encode_open_type(|inner| container.encode_value(id, inner))?;
    }
    Ok(())
}

/// Unpacks a ProtocolExtensionContainer.
///
/// Ids outside the object set go through the decoder's unknown-IE policy.
/// Returns `None` when no field was recognised.
pub fn decode_extension_container<C: ExtensionContainer>(
    decoder: &mut PerDecoder<'_>,
) -> PerResult<Option<C>> {
    let count = decoder.decode_length(&PROTOCOL_EXTENSION_CONTAINER_SIZE)?;
    let mut container = C::default();
    for _ in 0..count {
        let (id, criticality) = decode_protocol_ie_header(decoder)?;
        if C::is_id_valid(id) {
            decoder.decode_open_type(|inner| container.decode_value(id, inner))?;
        } else {
            decoder.handle_unknown_ie(C::NAME, id, criticality)?;
        }
    }
    Ok(if container.is_empty() {
        None
    } else {
        Some(container)
    })
}

/// A ProtocolIE-SingleContainer kept as raw octets, for `choice-extension`
/// alternatives whose contents this crate does not model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolIeSingleContainer {
    pub id: ProtocolIeId,
    pub criticality: Criticality,
    /// Complete encoding of the value (open type contents)
    #[serde(serialize_with = "serialize_hex")]
    pub value: Vec<u8>,
}

impl PerEncode for ProtocolIeSingleContainer {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        encode_protocol_ie_header(encoder, self.id, self.criticality)?;
        encoder.encode_open_type_bytes(&self.value)
    }
}

impl PerDecode for ProtocolIeSingleContainer {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (id, criticality) = decode_protocol_ie_header(decoder)?;
        let value = decoder.decode_open_type_bytes()?;
        Ok(Self {
            id,
            criticality,
            value,
        })
    }
}

/// Serializes octets as a lowercase hex string.
pub fn serialize_hex<T: AsRef<[u8]>, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(value.as_ref()))
}
