//! Value types shared across E1AP IEs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Public Land Mobile Network identifier (MCC + MNC).
///
/// On the E1 interface a PLMN travels as the 3-octet TBCD `PLMN-Identity`
/// of TS 38.463 (same layout as TS 24.008):
///
/// | octet | high nibble         | low nibble  |
/// |-------|---------------------|-------------|
/// | 0     | MCC digit 2         | MCC digit 1 |
/// | 1     | MNC digit 3 or 0xF  | MCC digit 3 |
/// | 2     | MNC digit 2         | MNC digit 1 |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Plmn {
    /// Mobile Country Code, 0-999
    pub mcc: u16,
    /// Mobile Network Code, 0-999
    pub mnc: u16,
    /// True if the MNC has 3 digits
    pub long_mnc: bool,
}

impl Plmn {
    pub const fn new(mcc: u16, mnc: u16, long_mnc: bool) -> Self {
        Self { mcc, mnc, long_mnc }
    }

    /// Returns true if the digits fit their field widths.
    pub fn is_valid(&self) -> bool {
        self.mcc <= 999 && (self.mnc <= 99 || (self.long_mnc && self.mnc <= 999))
    }

    /// Encodes the PLMN into its 3-octet TBCD form.
    pub fn encode(&self) -> [u8; 3] {
        let [mcc1, mcc2, mcc3] = digits3(self.mcc);
        let (mnc1, mnc2, mnc3) = if self.long_mnc {
            let [d1, d2, d3] = digits3(self.mnc);
            (d1, d2, d3)
        } else {
            let [_, d1, d2] = digits3(self.mnc);
            (d1, d2, 0x0F)
        };

        [(mcc2 << 4) | mcc1, (mnc3 << 4) | mcc3, (mnc2 << 4) | mnc1]
    }

    /// Decodes a PLMN from its 3-octet TBCD form.
    pub fn decode(bytes: [u8; 3]) -> Self {
        let nibble = |octet: u8, high: bool| u16::from(if high { octet >> 4 } else { octet & 0x0F });

        let mcc = 100 * nibble(bytes[0], false) + 10 * nibble(bytes[0], true) + nibble(bytes[1], false);
        let mnc3 = nibble(bytes[1], true);
        let mnc12 = 10 * nibble(bytes[2], false) + nibble(bytes[2], true);

        if mnc3 == 0x0F {
            Self::new(mcc, mnc12, false)
        } else {
            Self::new(mcc, 10 * mnc12 + mnc3, true)
        }
    }
}

fn digits3(value: u16) -> [u8; 3] {
    [
        ((value / 100) % 10) as u8,
        ((value / 10) % 10) as u8,
        (value % 10) as u8,
    ]
}

impl fmt::Debug for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_mnc {
            write!(f, "Plmn({:03}-{:03})", self.mcc, self.mnc)
        } else {
            write!(f, "Plmn({:03}-{:02})", self.mcc, self.mnc)
        }
    }
}

impl fmt::Display for Plmn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.long_mnc {
            write!(f, "{:03}{:03}", self.mcc, self.mnc)
        } else {
            write!(f, "{:03}{:02}", self.mcc, self.mnc)
        }
    }
}

/// Parses `"00101"`, `"001010"` or the dashed forms `"001-01"` / `"001-010"`.
impl FromStr for Plmn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| *c != '-').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) || !(5..=6).contains(&digits.len()) {
            return Err(format!("invalid PLMN: {s}"));
        }
        let mcc = digits[..3].parse::<u16>().map_err(|e| e.to_string())?;
        let mnc = digits[3..].parse::<u16>().map_err(|e| e.to_string())?;
        Ok(Self::new(mcc, mnc, digits.len() == 6))
    }
}
