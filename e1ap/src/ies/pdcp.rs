//! PDCP timer and size enumerations (TS 38.463 9.3.1.x)
//!
//! Each value stands for a number; `EnumNumber` maps between the two.

use e1ap_per::EnumNumber;

per_enumerated! {
    /// ASN.1: DiscardTimer ::= ENUMERATED { ms10, ..., ms1500, infinity }
    pub enum DiscardTimer("DiscardTimer") {
        Ms10 = "ms10",
        Ms20 = "ms20",
        Ms30 = "ms30",
        Ms40 = "ms40",
        Ms50 = "ms50",
        Ms60 = "ms60",
        Ms75 = "ms75",
        Ms100 = "ms100",
        Ms150 = "ms150",
        Ms200 = "ms200",
        Ms250 = "ms250",
        Ms300 = "ms300",
        Ms500 = "ms500",
        Ms750 = "ms750",
        Ms1500 = "ms1500",
        Infinity = "infinity",
    }
}

/// Milliseconds; `infinity` is -1
impl EnumNumber for DiscardTimer {
    const NUMBERS: &'static [i32] = &[
        10, 20, 30, 40, 50, 60, 75, 100, 150, 200, 250, 300, 500, 750, 1500, -1,
    ];
}

per_enumerated! {
    /// ASN.1: PDCP-SN-Size ::= ENUMERATED { s-12, s-18, ..., s-7, s-15, s-16 }
    pub enum PdcpSnSize("PDCP-SN-Size", extensible) {
        S12 = "s-12",
        S18 = "s-18";
        S7 = "s-7",
        S15 = "s-15",
        S16 = "s-16",
    }
}

/// Bits
impl EnumNumber for PdcpSnSize {
    const NUMBERS: &'static [i32] = &[12, 18, 7, 15, 16];
}

per_enumerated! {
    /// ASN.1: T-Reordering ::= ENUMERATED { ms0, ms1, ..., ms3000, ... }
    pub enum TReordering("T-Reordering", extensible) {
        Ms0 = "ms0",
        Ms1 = "ms1",
        Ms2 = "ms2",
        Ms4 = "ms4",
        Ms5 = "ms5",
        Ms8 = "ms8",
        Ms10 = "ms10",
        Ms15 = "ms15",
        Ms20 = "ms20",
        Ms30 = "ms30",
        Ms40 = "ms40",
        Ms45 = "ms45",
        Ms50 = "ms50",
        Ms60 = "ms60",
        Ms80 = "ms80",
        Ms100 = "ms100",
        Ms120 = "ms120",
        Ms140 = "ms140",
        Ms160 = "ms160",
        Ms180 = "ms180",
        Ms200 = "ms200",
        Ms220 = "ms220",
        Ms240 = "ms240",
        Ms260 = "ms260",
        Ms280 = "ms280",
        Ms300 = "ms300",
        Ms500 = "ms500",
        Ms750 = "ms750",
        Ms1000 = "ms1000",
        Ms1250 = "ms1250",
        Ms1500 = "ms1500",
        Ms1750 = "ms1750",
        Ms2000 = "ms2000",
        Ms2250 = "ms2250",
        Ms2500 = "ms2500",
        Ms2750 = "ms2750",
        Ms3000 = "ms3000",
    }
}

/// Milliseconds
impl EnumNumber for TReordering {
    const NUMBERS: &'static [i32] = &[
        0, 1, 2, 4, 5, 8, 10, 15, 20, 30, 40, 45, 50, 60, 80, 100, 120, 140, 160, 180, 200, 220,
        240, 260, 280, 300, 500, 750, 1000, 1250, 1500, 1750, 2000, 2250, 2500, 2750, 3000,
    ];
}
