//! PER encoder

use e1ap_common::{BitBuffer, BitString};

use crate::constraint::{octets_for, Constraint, SizeConstraint};
use crate::error::{PerError, PerResult};

/// Largest length a single general length determinant carries. Longer
/// values would need fragmentation.
pub const MAX_UNFRAGMENTED_LENGTH: usize = 16383;

/// PER flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerVariant {
    /// ALIGNED PER, used by E1AP
    #[default]
    Aligned,
    /// UNALIGNED PER
    Unaligned,
}

/// PER encoder writing into a growable bit buffer.
#[derive(Debug, Clone, Default)]
pub struct PerEncoder {
    buffer: BitBuffer,
    variant: PerVariant,
}

impl PerEncoder {
    pub fn new(variant: PerVariant) -> Self {
        Self {
            buffer: BitBuffer::new(),
            variant,
        }
    }

    pub fn aligned() -> Self {
        Self::new(PerVariant::Aligned)
    }

    pub fn unaligned() -> Self {
        Self::new(PerVariant::Unaligned)
    }

    pub fn variant(&self) -> PerVariant {
        self.variant
    }

    pub fn is_aligned(&self) -> bool {
        self.variant == PerVariant::Aligned
    }

    /// Number of bits written so far.
    pub fn bit_position(&self) -> usize {
        self.buffer.current_index()
    }

    /// The bytes written so far, last octet zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.data()
    }

    /// Completes the encoding. An empty encoding becomes a single zero octet
    /// (X.691 11.1).
    pub fn into_bytes(self) -> Vec<u8> {
        if self.buffer.current_index() == 0 {
            return vec![0];
        }
        self.buffer.into_bytes()
    }

    pub fn write_bool(&mut self, bit: bool) {
        self.buffer.write(bit);
    }

    pub fn write_bits(&mut self, value: u64, len: usize) {
        self.buffer.write_bits(value, len);
    }

    pub fn write_octets(&mut self, octets: &[u8]) {
        self.buffer.write_octets(octets);
    }

    /// Pads to the next octet boundary. No-op in unaligned PER.
    pub fn align(&mut self) {
        if self.is_aligned() {
            self.buffer.octet_align();
        }
    }

    /// Writes the extension bit and the optional-field bitmap that open every
    /// SEQUENCE.
    pub fn encode_sequence_preamble(&mut self, extensible: bool, optionals: &[bool]) {
        if extensible {
            // Extension additions are never produced
            self.write_bool(false);
        }
        for &present in optionals {
            self.write_bool(present);
        }
    }

    /// Constrained whole number (X.691 11.5).
    pub fn encode_constrained_whole_number(
        &mut self,
        value: i64,
        lb: i64,
        ub: i64,
    ) -> PerResult<()> {
        let constraint = Constraint::new(lb, ub);
        if !constraint.contains(value) {
            return Err(PerError::ValueOutOfRange { value, lb, ub });
        }

        let range = constraint.range();
        let offset = (i128::from(value) - i128::from(lb)) as u64;

        if range == 1 {
            return Ok(());
        }

        match self.variant {
            PerVariant::Unaligned => self.write_bits(offset, constraint.bits_needed()),
            PerVariant::Aligned if range <= 255 => self.write_bits(offset, constraint.bits_needed()),
            PerVariant::Aligned if range == 256 => {
                self.align();
                self.write_bits(offset, 8);
            }
            PerVariant::Aligned if range <= 65536 => {
                self.align();
                self.write_bits(offset, 16);
            }
            PerVariant::Aligned => {
                // Indefinite-length case: octet count as a constrained
                // whole number, then the value in that many aligned octets
                let max_octets = octets_for((range - 1) as u64);
                let octets = octets_for(offset);
                self.encode_constrained_whole_number(octets as i64, 1, max_octets as i64)?;
                self.align();
                self.write_bits(offset, octets * 8);
            }
        }
        Ok(())
    }

    /// INTEGER with a (possibly extensible) value constraint.
    pub fn encode_integer(&mut self, value: i64, constraint: &Constraint) -> PerResult<()> {
        let in_root = constraint.contains(value);
        if constraint.extensible {
            self.write_bool(!in_root);
            if !in_root {
                return self.encode_unconstrained_whole_number(value);
            }
        }
        self.encode_constrained_whole_number(value, constraint.lb, constraint.ub)
    }

    /// Semi-constrained whole number (X.691 11.7): `value - lb` in minimal
    /// octets after a general length.
    pub fn encode_semi_constrained_whole_number(&mut self, value: i64, lb: i64) -> PerResult<()> {
        if value < lb {
            return Err(PerError::ValueOutOfRange {
                value,
                lb,
                ub: i64::MAX,
            });
        }
        let offset = (i128::from(value) - i128::from(lb)) as u64;
        let octets = octets_for(offset);
        self.encode_general_length(octets)?;
        self.write_bits(offset, octets * 8);
        Ok(())
    }

    /// Unconstrained whole number (X.691 11.8): minimal two's complement.
    pub fn encode_unconstrained_whole_number(&mut self, value: i64) -> PerResult<()> {
        let bytes = value.to_be_bytes();
        // Drop leading octets that only repeat the sign
        let mut start = 0;
        while start < 7 {
            let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
                || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
            if !redundant {
                break;
            }
            start += 1;
        }
        self.encode_general_length(8 - start)?;
        self.write_octets(&bytes[start..]);
        Ok(())
    }

    /// Normally small non-negative whole number (X.691 11.6).
    pub fn encode_normally_small(&mut self, value: u64) -> PerResult<()> {
        if value <= 63 {
            self.write_bool(false);
            self.write_bits(value, 6);
            Ok(())
        } else {
            self.write_bool(true);
            let value = i64::try_from(value).map_err(|_| PerError::ValueOutOfRange {
                value: i64::MAX,
                lb: 0,
                ub: i64::MAX,
            })?;
            self.encode_semi_constrained_whole_number(value, 0)
        }
    }

    /// Unconstrained length determinant (X.691 11.9.3.6 - 11.9.3.7).
    pub fn encode_general_length(&mut self, length: usize) -> PerResult<()> {
        self.align();
        if length <= 127 {
            self.write_bits(length as u64, 8);
        } else if length <= MAX_UNFRAGMENTED_LENGTH {
            self.write_bits(0x8000 | length as u64, 16);
        } else {
            return Err(PerError::FragmentationUnsupported { length });
        }
        Ok(())
    }

    /// Length determinant for a size-constrained type, extension bit included.
    pub fn encode_length(&mut self, length: usize, size: &SizeConstraint) -> PerResult<()> {
        let in_root = size.contains(length);
        if size.extensible {
            self.write_bool(!in_root);
        } else if !in_root {
            return Err(PerError::SizeOutOfRange {
                size: length,
                lb: size.lb,
                ub: size.ub,
            });
        }

        match size.ub {
            Some(ub) if in_root && ub < 65536 => {
                self.encode_constrained_whole_number(length as i64, size.lb as i64, ub as i64)
            }
            _ => self.encode_general_length(length),
        }
    }

    /// ENUMERATED by index. Indexes past the root go to the extension
    /// (normally small, offset by `root_count`).
    pub fn encode_enumerated(
        &mut self,
        index: usize,
        root_count: usize,
        extensible: bool,
    ) -> PerResult<()> {
        self.encode_index(index, root_count, extensible)
    }

    /// CHOICE alternative index (X.691 23).
    pub fn encode_choice_index(
        &mut self,
        index: usize,
        root_count: usize,
        extensible: bool,
    ) -> PerResult<()> {
        self.encode_index(index, root_count, extensible)
    }

    fn encode_index(&mut self, index: usize, root_count: usize, extensible: bool) -> PerResult<()> {
        let in_root = index < root_count;
        if extensible {
            self.write_bool(!in_root);
            if !in_root {
                return self.encode_normally_small((index - root_count) as u64);
            }
        } else if !in_root {
            return Err(PerError::ValueOutOfRange {
                value: index as i64,
                lb: 0,
                ub: root_count as i64 - 1,
            });
        }
        self.encode_constrained_whole_number(index as i64, 0, root_count as i64 - 1)
    }

    /// OCTET STRING (X.691 17).
    pub fn encode_octet_string(&mut self, data: &[u8], size: &SizeConstraint) -> PerResult<()> {
        self.encode_length(data.len(), size)?;
        if size.aligns_content(data.len(), 8) {
            self.align();
        }
        self.write_octets(data);
        Ok(())
    }

    /// BIT STRING (X.691 16).
    pub fn encode_bit_string(&mut self, bits: &BitString, size: &SizeConstraint) -> PerResult<()> {
        self.encode_length(bits.bit_length(), size)?;
        if size.aligns_content(bits.bit_length(), 1) {
            self.align();
        }
        for bit in bits.iter() {
            self.write_bool(bit);
        }
        Ok(())
    }

    /// PrintableString (X.691 30.5). Characters keep their code points, in
    /// 8 bits aligned and 7 bits unaligned.
    pub fn encode_printable_string(
        &mut self,
        type_name: &'static str,
        value: &str,
        size: &SizeConstraint,
    ) -> PerResult<()> {
        if let Some(ch) = value.chars().find(|c| !is_printable(*c)) {
            return Err(PerError::InvalidCharacter { type_name, ch });
        }

        let char_bits = self.printable_char_bits();
        let length = value.len();
        self.encode_length(length, size)?;
        if size.aligns_content(length, char_bits) {
            self.align();
        }
        for byte in value.bytes() {
            self.write_bits(u64::from(byte), char_bits);
        }
        Ok(())
    }

    pub(crate) fn printable_char_bits(&self) -> usize {
        match self.variant {
            PerVariant::Aligned => 8,
            PerVariant::Unaligned => 7,
        }
    }

    /// SEQUENCE OF: length then each element.
    pub fn encode_sequence_of<T, F>(
        &mut self,
        items: &[T],
        size: &SizeConstraint,
        mut encode_item: F,
    ) -> PerResult<()>
    where
        F: FnMut(&mut Self, &T) -> PerResult<()>,
    {
        self.encode_length(items.len(), size)?;
        for item in items {
            encode_item(self, item)?;
        }
        Ok(())
    }

    /// Open type (X.691 11.2): `encode_value` writes into a fresh encoder of
    /// the same variant; the result is emitted as a length-prefixed octet
    /// string.
    pub fn encode_open_type<F>(&mut self, encode_value: F) -> PerResult<()>
    where
        F: FnOnce(&mut PerEncoder) -> PerResult<()>,
    {
        let mut inner = PerEncoder::new(self.variant);
        encode_value(&mut inner)?;
        let octets = inner.into_bytes();
        self.encode_open_type_bytes(&octets)
    }

    /// Open type whose complete encoding is already at hand.
    pub fn encode_open_type_bytes(&mut self, octets: &[u8]) -> PerResult<()> {
        self.encode_general_length(octets.len())?;
        self.write_octets(octets);
        Ok(())
    }
}

/// PrintableString alphabet (X.680 41.4).
pub(crate) fn is_printable(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || " '()+,-./:=?".contains(ch)
}
