//! `BitBuffer` - A bit-level read/write buffer for ASN.1 PER encoding.
//!
//! This module provides `BitBuffer`, a growable MSB-first bit writer, and
//! `BitBufferReader`, its read-only counterpart. They are the bit cursor
//! underneath the E1AP PER encoder and decoder.

use std::cell::Cell;

/// A growable bit-level write buffer.
///
/// Bits are written in MSB-first order within each byte. The buffer grows as
/// bits are appended, so encoders never need to size it up front.
///
/// # Example
/// ```
/// use e1ap_common::BitBuffer;
///
/// let mut buffer = BitBuffer::new();
/// buffer.write_bits(0b1010, 4);
/// buffer.write_bits(0b1100, 4);
/// assert_eq!(buffer.data(), &[0b1010_1100]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    data: Vec<u8>,
    index: usize, // bit index
}

impl BitBuffer {
    /// Creates a new empty `BitBuffer`.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            index: 0,
        }
    }

    /// Returns the current bit index (number of bits written).
    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Writes a single bit.
    #[inline]
    pub fn write(&mut self, bit: bool) {
        let octet_index = self.index / 8;
        let bit_index = self.index % 8;

        if octet_index >= self.data.len() {
            self.data.push(0);
        }
        if bit {
            self.data[octet_index] |= 1 << (7 - bit_index);
        }
        self.index += 1;
    }

    /// Writes the `len` least significant bits of `value`, MSB first.
    ///
    /// # Panics
    /// Panics if `len` > 64.
    #[inline]
    pub fn write_bits(&mut self, value: u64, len: usize) {
        if len == 0 {
            return;
        }
        assert!(len <= 64, "len must be <= 64");

        for i in 0..len {
            let bit = ((value >> (len - 1 - i)) & 1) != 0;
            self.write(bit);
        }
    }

    /// Writes whole octets at the current bit position.
    ///
    /// When the buffer is octet aligned the bytes are appended directly.
    pub fn write_octets(&mut self, octets: &[u8]) {
        if self.index % 8 == 0 {
            self.data.extend_from_slice(octets);
            self.index += octets.len() * 8;
        } else {
            for &octet in octets {
                self.write_bits(u64::from(octet), 8);
            }
        }
    }

    /// Aligns the buffer to the next octet boundary by writing zero bits.
    #[inline]
    pub fn octet_align(&mut self) {
        let remainder = self.index % 8;
        if remainder != 0 {
            self.write_bits(0, 8 - remainder);
        }
    }

    /// Returns a reference to the written data. The last octet is zero padded.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the written octets.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// A read-only bit cursor over a byte slice.
///
/// Reads never panic: running past the end yields `None`, which the PER
/// decoder turns into a decode failure.
pub struct BitBufferReader<'a> {
    data: &'a [u8],
    index: Cell<usize>, // bit index
}

impl<'a> BitBufferReader<'a> {
    /// Creates a new `BitBufferReader` from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: Cell::new(0),
        }
    }

    /// Seeks to the specified bit index.
    #[inline]
    pub fn seek(&self, index: usize) {
        self.index.set(index);
    }

    /// Returns the current bit index.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// Reads a single bit and advances the index.
    #[inline]
    pub fn read(&self) -> Option<bool> {
        let index = self.index.get();
        let octet = *self.data.get(index / 8)?;
        self.index.set(index + 1);
        Some((octet >> (7 - index % 8)) & 1 == 1)
    }

    /// Reads `len` bits (0-64) MSB first.
    ///
    /// Returns `None` without moving the cursor if fewer than `len` bits remain.
    #[inline]
    pub fn read_bits(&self, len: usize) -> Option<u64> {
        if len > 64 || len > self.remaining_bits() {
            return None;
        }

        let mut result = 0u64;
        for _ in 0..len {
            result = (result << 1) | u64::from(self.read()?);
        }
        Some(result)
    }

    /// Reads `count` whole octets starting at the current bit position.
    pub fn read_octets(&self, count: usize) -> Option<Vec<u8>> {
        if count.checked_mul(8)? > self.remaining_bits() {
            return None;
        }

        let index = self.index.get();
        if index % 8 == 0 {
            let start = index / 8;
            self.index.set(index + count * 8);
            return Some(self.data[start..start + count].to_vec());
        }

        let mut octets = Vec::with_capacity(count);
        for _ in 0..count {
            octets.push(self.read_bits(8)? as u8);
        }
        Some(octets)
    }

    /// Skips to the next octet boundary.
    #[inline]
    pub fn octet_align(&self) {
        let remainder = self.index.get() % 8;
        if remainder != 0 {
            self.index.set(self.index.get() + (8 - remainder));
        }
    }

    /// Returns the remaining bits that can be read.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.index.get())
    }
}
