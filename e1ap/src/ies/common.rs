//! Identifiers and small IEs shared by most E1AP messages

use std::fmt;

use e1ap_per::{
    Constraint, EnumNumber, PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult,
    SizeConstraint,
};
use serde::Serialize;

per_integer! {
    /// ASN.1: TransactionID ::= INTEGER (0..255, ...)
    pub struct TransactionId(u8): "TransactionID", Constraint::extensible(0, 255);
}

per_integer! {
    /// ASN.1: ProcedureCode ::= INTEGER (0..255)
    pub struct ProcedureCode(u8): "ProcedureCode", Constraint::new(0, 255);
}

per_integer! {
    /// ASN.1: GNB-CU-CP-UE-E1AP-ID ::= INTEGER (0..4294967295)
    pub struct GnbCuCpUeE1apId(u32): "GNB-CU-CP-UE-E1AP-ID", Constraint::new(0, 4_294_967_295);
}

per_integer! {
    /// ASN.1: GNB-CU-UP-UE-E1AP-ID ::= INTEGER (0..4294967295)
    pub struct GnbCuUpUeE1apId(u32): "GNB-CU-UP-UE-E1AP-ID", Constraint::new(0, 4_294_967_295);
}

per_integer! {
    /// ASN.1: GNB-CU-UP-ID ::= INTEGER (0..68719476735)
    pub struct GnbCuUpId(u64): "GNB-CU-UP-ID", Constraint::new(0, 68_719_476_735);
}

per_integer! {
    /// ASN.1: GNB-CU-UP-Capacity ::= INTEGER (0..255)
    pub struct GnbCuUpCapacity(u8): "GNB-CU-UP-Capacity", Constraint::new(0, 255);
}

/// `PrintableString (SIZE (1..150, ...))` used by both node names
const NODE_NAME_SIZE: SizeConstraint = SizeConstraint::range_ext(1, 150);

macro_rules! node_name {
    ($(#[$meta:meta])* $name:ident, $asn:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PerEncode for $name {
            fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
                encoder.encode_printable_string($asn, &self.0, &NODE_NAME_SIZE)
            }
        }

        impl PerDecode for $name {
            fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
                decoder.decode_printable_string($asn, &NODE_NAME_SIZE).map(Self)
            }
        }
    };
}

node_name!(
    /// ASN.1: GNB-CU-UP-Name ::= PrintableString (SIZE (1..150, ...))
    GnbCuUpName,
    "GNB-CU-UP-Name"
);
node_name!(
    /// ASN.1: GNB-CU-CP-Name ::= PrintableString (SIZE (1..150, ...))
    GnbCuCpName,
    "GNB-CU-CP-Name"
);

per_enumerated! {
    /// ASN.1: CNSupport ::= ENUMERATED { c-epc, c-5gc, both, ... }
    pub enum CnSupport("CNSupport", extensible) {
        CEpc = "c-epc",
        C5gc = "c-5gc",
        Both = "both",
    }
}

per_enumerated! {
    /// ASN.1: TimeToWait ::= ENUMERATED { v1s, v2s, v5s, v10s, v20s, v60s, ... }
    pub enum TimeToWait("TimeToWait", extensible) {
        V1s = "v1s",
        V2s = "v2s",
        V5s = "v5s",
        V10s = "v10s",
        V20s = "v20s",
        V60s = "v60s",
    }
}

/// Seconds
impl EnumNumber for TimeToWait {
    const NUMBERS: &'static [i32] = &[1, 2, 5, 10, 20, 60];
}

per_enumerated! {
    /// ASN.1: TriggeringMessage ::= ENUMERATED { initiating-message, successful-outcome, unsuccessful-outcome }
    pub enum TriggeringMessage("TriggeringMessage") {
        InitiatingMessage = "initiating-message",
        SuccessfulOutcome = "successful-outcome",
        UnsuccessfulOutcome = "unsuccessful-outcome",
    }
}

per_enumerated! {
    /// ASN.1: TypeOfError ::= ENUMERATED { not-understood, missing, ... }
    pub enum TypeOfError("TypeOfError", extensible) {
        NotUnderstood = "not-understood",
        Missing = "missing",
    }
}
