//! BitString value type for ASN.1 BIT STRING IEs.
//!
//! `BitString` wraps a `BitVec<u8, Msb0>` and adds the conversions E1AP IEs
//! need (NR Cell Identity, NID): building from an integer of a given width,
//! reading it back, and a binary-digit rendering used for JSON and `Display`.

use std::fmt;

use bitvec::prelude::*;
use serde::{Serialize, Serializer};

/// A sequence of bits, MSB first.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitString(BitVec<u8, Msb0>);

impl BitString {
    /// Creates a new empty `BitString`.
    pub fn new() -> Self {
        Self(BitVec::new())
    }

    /// Creates a `BitString` holding the `len` least significant bits of
    /// `value`, MSB first.
    ///
    /// # Panics
    /// Panics if `len` > 64.
    pub fn from_u64(value: u64, len: usize) -> Self {
        assert!(len <= 64, "Cannot take more than 64 bits from a u64");
        let mut bits = BitVec::with_capacity(len);
        for i in (0..len).rev() {
            bits.push((value >> i) & 1 == 1);
        }
        Self(bits)
    }

    /// Appends a single bit.
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// Returns the bit at `index`, if any.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).map(|bit| *bit)
    }

    /// Returns the value as an integer when it is at most 64 bits long.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.len() > 64 {
            return None;
        }
        Some(self.0.iter().fold(0u64, |acc, bit| (acc << 1) | u64::from(*bit)))
    }

    /// Returns the number of bits.
    pub fn bit_length(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the bits, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({} bits: {})", self.0.len(), self)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Serialize for BitString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
