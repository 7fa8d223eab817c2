//! Codec traits implemented by every E1AP type.

use serde::Serialize;

use crate::decoder::{DecodeOptions, PerDecoder};
use crate::encoder::{PerEncoder, PerVariant};
use crate::error::{PerError, PerResult};

/// Types that can be PER encoded.
pub trait PerEncode {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()>;
}

/// Types that can be PER decoded.
pub trait PerDecode: Sized {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self>;
}

/// Encodes `value` as a complete PER encoding.
pub fn encode_to_vec<T: PerEncode + ?Sized>(value: &T, variant: PerVariant) -> PerResult<Vec<u8>> {
    let mut encoder = PerEncoder::new(variant);
    value.per_encode(&mut encoder)?;
    Ok(encoder.into_bytes())
}

/// Decodes a `T` from the start of `data`. Trailing padding is ignored.
pub fn decode_from_slice<T: PerDecode>(data: &[u8], options: DecodeOptions) -> PerResult<T> {
    let mut decoder = PerDecoder::with_options(data, options);
    T::per_decode(&mut decoder)
}

/// Encodes an OPTIONAL component. Its presence bit is written by the
/// SEQUENCE preamble.
pub fn encode_optional<T: PerEncode>(encoder: &mut PerEncoder, value: &Option<T>) -> PerResult<()> {
    match value {
        Some(value) => value.per_encode(encoder),
        None => Ok(()),
    }
}

/// Decodes an OPTIONAL component whose presence bit was `present`.
pub fn decode_optional<T: PerDecode>(
    decoder: &mut PerDecoder<'_>,
    present: bool,
) -> PerResult<Option<T>> {
    present.then(|| T::per_decode(decoder)).transpose()
}

/// ENUMERATED types: a closed list of names, root values first.
pub trait Enumerated: Copy + Sized + 'static {
    /// ASN.1 type name
    const NAME: &'static str;
    /// Value names in index order, extension values after the root
    const NAMES: &'static [&'static str];
    /// Number of root values
    const ROOT_COUNT: usize;
    const EXTENSIBLE: bool;

    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self>;

    fn as_str(self) -> &'static str {
        Self::NAMES.get(self.index()).copied().unwrap_or("")
    }

    /// Bounds-checked name lookup.
    fn name_of(index: usize) -> PerResult<&'static str> {
        Self::NAMES
            .get(index)
            .copied()
            .ok_or_else(|| invalid_enum_index(Self::NAME, index))
    }

    fn encode_enumerated(self, encoder: &mut PerEncoder) -> PerResult<()> {
        encoder.encode_enumerated(self.index(), Self::ROOT_COUNT, Self::EXTENSIBLE)
    }

    fn decode_enumerated(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let index = decoder.decode_enumerated(Self::NAME, Self::ROOT_COUNT, Self::EXTENSIBLE)?;
        Self::from_index(index).ok_or_else(|| invalid_enum_index(Self::NAME, index))
    }
}

/// ENUMERATED types whose values stand for numbers (timers, sizes).
pub trait EnumNumber: Enumerated {
    /// Numeric meaning of each value, in index order
    const NUMBERS: &'static [i32];

    fn to_number(self) -> i32 {
        Self::NUMBERS.get(self.index()).copied().unwrap_or_default()
    }

    /// Bounds-checked number lookup.
    fn number_of(index: usize) -> PerResult<i32> {
        Self::NUMBERS
            .get(index)
            .copied()
            .ok_or_else(|| invalid_enum_index(Self::NAME, index))
    }

    /// Finds the value standing for `number`.
    fn from_number(number: i32) -> Option<Self> {
        Self::NUMBERS
            .iter()
            .position(|&n| n == number)
            .and_then(Self::from_index)
    }
}

fn invalid_enum_index(type_name: &'static str, index: usize) -> PerError {
    tracing::error!(type_name, index, "Invalid enumerated index");
    PerError::InvalidEnumIndex { type_name, index }
}

/// CHOICE types, represented as Rust enums.
pub trait Choice {
    /// ASN.1 type name
    const NAME: &'static str;
    /// Alternative names in index order
    const ALTERNATIVES: &'static [&'static str];
    /// True if the CHOICE has an extension marker
    const EXTENSIBLE: bool = false;

    /// Index of the live alternative.
    fn index(&self) -> usize;

    fn alternative_name(&self) -> &'static str {
        Self::ALTERNATIVES.get(self.index()).copied().unwrap_or("")
    }

    /// Writes the extension bit and index of the live alternative.
    fn encode_choice_index(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        encoder.encode_choice_index(self.index(), Self::ALTERNATIVES.len(), Self::EXTENSIBLE)
    }

    /// Reads an alternative index. Indexes with no alternative are logged
    /// and rejected here.
    fn decode_choice_index(decoder: &mut PerDecoder<'_>) -> PerResult<usize> {
        let index = decoder.decode_choice_index(Self::NAME, Self::ALTERNATIVES.len(), Self::EXTENSIBLE)?;
        if index >= Self::ALTERNATIVES.len() {
            return Err(Self::invalid_index(index));
        }
        Ok(index)
    }

    fn invalid_index(index: usize) -> PerError {
        tracing::error!(type_name = Self::NAME, index, "Invalid choice index");
        PerError::InvalidChoiceIndex {
            type_name: Self::NAME,
            index,
        }
    }
}

/// Debug rendering of any serializable IE as pretty-printed JSON.
pub trait ToJson {
    fn to_json(&self) -> Result<String, serde_json::Error>;
}

impl<T: Serialize + ?Sized> ToJson for T {
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
