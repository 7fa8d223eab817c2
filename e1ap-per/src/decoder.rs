//! PER decoder

use e1ap_common::{BitBufferReader, BitString, CodecConfig, PerVariantSetting, UnknownIePolicySetting};

use crate::constraint::{bits_for_range, octets_for, Constraint, SizeConstraint};
use crate::encoder::{is_printable, PerVariant};
use crate::error::{PerError, PerResult};
use crate::ie::Criticality;
use crate::ProtocolIeId;

/// Handling of ProtocolIE / ProtocolExtension ids missing from the
/// receiving object set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownIePolicy {
    /// Any unknown id fails the decode, whatever its criticality.
    #[default]
    Strict,
    /// Unknown ids with criticality `ignore` or `notify` are skipped;
    /// `reject` still fails.
    Criticality,
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub variant: PerVariant,
    pub unknown_ie_policy: UnknownIePolicy,
}

impl DecodeOptions {
    pub fn new(variant: PerVariant, unknown_ie_policy: UnknownIePolicy) -> Self {
        Self {
            variant,
            unknown_ie_policy,
        }
    }
}

impl From<PerVariantSetting> for PerVariant {
    fn from(setting: PerVariantSetting) -> Self {
        match setting {
            PerVariantSetting::Aligned => PerVariant::Aligned,
            PerVariantSetting::Unaligned => PerVariant::Unaligned,
        }
    }
}

impl From<UnknownIePolicySetting> for UnknownIePolicy {
    fn from(setting: UnknownIePolicySetting) -> Self {
        match setting {
            UnknownIePolicySetting::Strict => UnknownIePolicy::Strict,
            UnknownIePolicySetting::Criticality => UnknownIePolicy::Criticality,
        }
    }
}

impl From<&CodecConfig> for DecodeOptions {
    fn from(config: &CodecConfig) -> Self {
        Self::new(config.variant.into(), config.unknown_ie_policy.into())
    }
}

/// PER decoder over a byte slice.
pub struct PerDecoder<'a> {
    reader: BitBufferReader<'a>,
    options: DecodeOptions,
}

impl<'a> PerDecoder<'a> {
    pub fn new(data: &'a [u8], variant: PerVariant) -> Self {
        Self::with_options(data, DecodeOptions::new(variant, UnknownIePolicy::default()))
    }

    pub fn aligned(data: &'a [u8]) -> Self {
        Self::new(data, PerVariant::Aligned)
    }

    pub fn unaligned(data: &'a [u8]) -> Self {
        Self::new(data, PerVariant::Unaligned)
    }

    pub fn with_options(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            reader: BitBufferReader::new(data),
            options,
        }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn variant(&self) -> PerVariant {
        self.options.variant
    }

    pub fn is_aligned(&self) -> bool {
        self.options.variant == PerVariant::Aligned
    }

    pub fn bit_position(&self) -> usize {
        self.reader.current_index()
    }

    pub fn remaining_bits(&self) -> usize {
        self.reader.remaining_bits()
    }

    fn unexpected_end(&self, needed: usize) -> PerError {
        PerError::UnexpectedEnd {
            needed,
            remaining: self.reader.remaining_bits(),
        }
    }

    pub fn read_bool(&mut self) -> PerResult<bool> {
        self.reader.read().ok_or_else(|| self.unexpected_end(1))
    }

    pub fn read_bits(&mut self, len: usize) -> PerResult<u64> {
        self.reader.read_bits(len).ok_or_else(|| self.unexpected_end(len))
    }

    pub fn read_octets(&mut self, count: usize) -> PerResult<Vec<u8>> {
        self.reader
            .read_octets(count)
            .ok_or_else(|| self.unexpected_end(count.saturating_mul(8)))
    }

    /// Skips to the next octet boundary. No-op in unaligned PER.
    pub fn align(&mut self) {
        if self.is_aligned() {
            self.reader.octet_align();
        }
    }

    /// Reads the extension bit (if `extensible`) and `N` presence bits.
    pub fn decode_sequence_preamble<const N: usize>(
        &mut self,
        extensible: bool,
    ) -> PerResult<(bool, [bool; N])> {
        let extended = if extensible { self.read_bool()? } else { false };
        let mut optionals = [false; N];
        for present in optionals.iter_mut() {
            *present = self.read_bool()?;
        }
        Ok((extended, optionals))
    }

    /// Consumes the extension additions of a SEQUENCE whose extension bit
    /// was set: a normally small bitmap length, the bitmap, then one open
    /// type per present addition. None of them are understood.
    pub fn skip_extension_additions(&mut self) -> PerResult<()> {
        let count = self.decode_normally_small()? as usize + 1;
        let mut present = 0;
        for _ in 0..count {
            if self.read_bool()? {
                present += 1;
            }
        }
        for _ in 0..present {
            self.skip_open_type()?;
        }
        if present > 0 {
            tracing::debug!(additions = present, "Skipped SEQUENCE extension additions");
        }
        Ok(())
    }

    /// Constrained whole number (X.691 11.5).
    pub fn decode_constrained_whole_number(&mut self, lb: i64, ub: i64) -> PerResult<i64> {
        if ub < lb {
            return Err(PerError::Decode(format!("empty range {lb}..={ub}")));
        }
        let constraint = Constraint::new(lb, ub);
        let range = constraint.range();
        if range == 1 {
            return Ok(lb);
        }

        let offset = match self.options.variant {
            PerVariant::Unaligned => self.read_bits(constraint.bits_needed())?,
            PerVariant::Aligned if range <= 255 => self.read_bits(constraint.bits_needed())?,
            PerVariant::Aligned if range == 256 => {
                self.align();
                self.read_bits(8)?
            }
            PerVariant::Aligned if range <= 65536 => {
                self.align();
                self.read_bits(16)?
            }
            PerVariant::Aligned => {
                let max_octets = octets_for((range - 1) as u64);
                let octets = self.decode_constrained_whole_number(1, max_octets as i64)? as usize;
                self.align();
                self.read_bits(octets * 8)?
            }
        };

        let value = i128::from(lb) + i128::from(offset);
        if value > i128::from(ub) {
            return Err(PerError::ValueOutOfRange {
                value: i64::try_from(value).unwrap_or(i64::MAX),
                lb,
                ub,
            });
        }
        Ok(value as i64)
    }

    /// INTEGER with a (possibly extensible) value constraint.
    pub fn decode_integer(&mut self, constraint: &Constraint) -> PerResult<i64> {
        if constraint.extensible && self.read_bool()? {
            return self.decode_unconstrained_whole_number();
        }
        self.decode_constrained_whole_number(constraint.lb, constraint.ub)
    }

    /// Semi-constrained whole number (X.691 11.7).
    pub fn decode_semi_constrained_whole_number(&mut self, lb: i64) -> PerResult<i64> {
        let octets = self.decode_general_length()?;
        if octets == 0 || octets > 8 {
            return Err(PerError::Decode(format!(
                "semi-constrained whole number in {octets} octets"
            )));
        }
        let offset = self.read_bits(octets * 8)?;
        i64::try_from(i128::from(lb) + i128::from(offset)).map_err(|_| PerError::ValueOutOfRange {
            value: i64::MAX,
            lb,
            ub: i64::MAX,
        })
    }

    /// Unconstrained whole number (X.691 11.8).
    pub fn decode_unconstrained_whole_number(&mut self) -> PerResult<i64> {
        let octets = self.decode_general_length()?;
        if octets == 0 || octets > 8 {
            return Err(PerError::Decode(format!(
                "unconstrained whole number in {octets} octets"
            )));
        }
        let bytes = self.read_octets(octets)?;
        let negative = bytes[0] & 0x80 != 0;
        let value = bytes
            .iter()
            .fold(if negative { -1i64 } else { 0 }, |acc, &byte| (acc << 8) | i64::from(byte));
        Ok(value)
    }

    /// Normally small non-negative whole number (X.691 11.6).
    pub fn decode_normally_small(&mut self) -> PerResult<u64> {
        if self.read_bool()? {
            let value = self.decode_semi_constrained_whole_number(0)?;
            Ok(value as u64)
        } else {
            self.read_bits(6)
        }
    }

    /// Unconstrained length determinant.
    pub fn decode_general_length(&mut self) -> PerResult<usize> {
        self.align();
        let first = self.read_bits(8)?;
        if first & 0x80 == 0 {
            Ok(first as usize)
        } else if first & 0x40 == 0 {
            let second = self.read_bits(8)?;
            Ok((((first & 0x3F) << 8) | second) as usize)
        } else {
            Err(PerError::FragmentationUnsupported {
                length: ((first & 0x3F) as usize) * 16384,
            })
        }
    }

    /// Length determinant for a size-constrained type, extension bit included.
    pub fn decode_length(&mut self, size: &SizeConstraint) -> PerResult<usize> {
        if size.extensible && self.read_bool()? {
            return self.decode_general_length();
        }

        let length = match size.ub {
            Some(ub) if ub < 65536 => {
                self.decode_constrained_whole_number(size.lb as i64, ub as i64)? as usize
            }
            _ => self.decode_general_length()?,
        };
        if !size.contains(length) {
            return Err(PerError::SizeOutOfRange {
                size: length,
                lb: size.lb,
                ub: size.ub,
            });
        }
        Ok(length)
    }

    /// ENUMERATED index. Extension values come back as `root_count + n`.
    /// A root index with no root value is rejected.
    pub fn decode_enumerated(
        &mut self,
        type_name: &'static str,
        root_count: usize,
        extensible: bool,
    ) -> PerResult<usize> {
        let (index, extended) = self.decode_index(root_count, extensible)?;
        if !extended && index >= root_count {
            tracing::error!(type_name, index, root_count, "Enumerated root index out of range");
            return Err(PerError::InvalidEnumIndex { type_name, index });
        }
        Ok(index)
    }

    /// CHOICE alternative index, with the same root bound as ENUMERATED.
    pub fn decode_choice_index(
        &mut self,
        type_name: &'static str,
        root_count: usize,
        extensible: bool,
    ) -> PerResult<usize> {
        let (index, extended) = self.decode_index(root_count, extensible)?;
        if !extended && index >= root_count {
            tracing::error!(type_name, index, root_count, "Choice root index out of range");
            return Err(PerError::InvalidChoiceIndex { type_name, index });
        }
        Ok(index)
    }

    /// Returns the index and whether it came from the extension range.
    fn decode_index(&mut self, root_count: usize, extensible: bool) -> PerResult<(usize, bool)> {
        if extensible && self.read_bool()? {
            let index = self.decode_normally_small()?;
            return Ok((root_count.saturating_add(index as usize), true));
        }
        let bits = bits_for_range(root_count as u128);
        if root_count <= 255 || !self.is_aligned() {
            return Ok((self.read_bits(bits)? as usize, false));
        }
        let index = self.decode_constrained_whole_number(0, root_count as i64 - 1)?;
        Ok((index as usize, false))
    }

    pub fn decode_octet_string(&mut self, size: &SizeConstraint) -> PerResult<Vec<u8>> {
        let length = self.decode_length(size)?;
        if size.aligns_content(length, 8) {
            self.align();
        }
        self.read_octets(length)
    }

    pub fn decode_bit_string(&mut self, size: &SizeConstraint) -> PerResult<BitString> {
        let length = self.decode_length(size)?;
        if size.aligns_content(length, 1) {
            self.align();
        }
        if length > self.remaining_bits() {
            return Err(self.unexpected_end(length));
        }
        let mut bits = BitString::new();
        for _ in 0..length {
            bits.push(self.read_bool()?);
        }
        Ok(bits)
    }

    pub fn decode_printable_string(
        &mut self,
        type_name: &'static str,
        size: &SizeConstraint,
    ) -> PerResult<String> {
        let char_bits = match self.options.variant {
            PerVariant::Aligned => 8,
            PerVariant::Unaligned => 7,
        };
        let length = self.decode_length(size)?;
        if size.aligns_content(length, char_bits) {
            self.align();
        }
        if length.saturating_mul(char_bits) > self.remaining_bits() {
            return Err(self.unexpected_end(length * char_bits));
        }

        let mut value = String::with_capacity(length);
        for _ in 0..length {
            let ch = char::from(self.read_bits(char_bits)? as u8);
            if !is_printable(ch) {
                return Err(PerError::InvalidCharacter { type_name, ch });
            }
            value.push(ch);
        }
        Ok(value)
    }

    pub fn decode_sequence_of<T, F>(
        &mut self,
        size: &SizeConstraint,
        mut decode_item: F,
    ) -> PerResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> PerResult<T>,
    {
        let count = self.decode_length(size)?;
        // Every element takes at least one bit
        let mut items = Vec::with_capacity(count.min(self.remaining_bits()));
        for _ in 0..count {
            items.push(decode_item(self)?);
        }
        Ok(items)
    }

    /// Returns the octets of an open type.
    pub fn decode_open_type_bytes(&mut self) -> PerResult<Vec<u8>> {
        let length = self.decode_general_length()?;
        self.read_octets(length)
    }

    /// Decodes an open type with `decode_value`, which sees only the open
    /// type's octets. Trailing padding inside the open type is ignored.
    pub fn decode_open_type<T, F>(&mut self, decode_value: F) -> PerResult<T>
    where
        F: FnOnce(&mut PerDecoder<'_>) -> PerResult<T>,
    {
        let octets = self.decode_open_type_bytes()?;
        let mut inner = PerDecoder::with_options(&octets, self.options);
        decode_value(&mut inner)
    }

    pub fn skip_open_type(&mut self) -> PerResult<()> {
        let length = self.decode_general_length()?;
        if length * 8 > self.remaining_bits() {
            return Err(self.unexpected_end(length * 8));
        }
        self.reader.seek(self.reader.current_index() + length * 8);
        Ok(())
    }

    /// Applies the unknown-IE policy to an id read from a container.
    ///
    /// On success the IE's open type has been consumed.
    pub fn handle_unknown_ie(
        &mut self,
        object_set: &'static str,
        id: ProtocolIeId,
        criticality: Criticality,
    ) -> PerResult<()> {
        match (self.options.unknown_ie_policy, criticality) {
            (UnknownIePolicy::Criticality, Criticality::Ignore | Criticality::Notify) => {
                tracing::warn!(object_set, id, %criticality, "Skipping unknown IE");
                self.skip_open_type()
            }
            _ => {
                tracing::error!(object_set, id, %criticality, "Unknown IE id");
                Err(PerError::UnknownIeId { object_set, id })
            }
        }
    }
}
