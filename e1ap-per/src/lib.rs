//! ASN.1 PER runtime for the E1AP codec
//!
//! This crate implements the parts of ITU-T X.691 that E1AP (3GPP TS 38.463)
//! needs, in both the ALIGNED and UNALIGNED variants:
//!
//! - `encoder` / `decoder` - `PerEncoder` and `PerDecoder`: whole numbers,
//!   length determinants, strings, SEQUENCE OF, open types
//! - `constraint` - value and size constraints
//! - `traits` - `PerEncode`/`PerDecode`, `Enumerated`, `Choice`, `ToJson`
//! - `ie` - `Criticality`, object-set tables and the ProtocolIE /
//!   ProtocolExtension container codecs
//!
//! # Example
//!
//! ```
//! use e1ap_per::{Constraint, DecodeOptions, PerDecoder, PerEncoder};
//!
//! let mut encoder = PerEncoder::aligned();
//! encoder.encode_integer(5, &Constraint::extensible(1, 32)).unwrap();
//! let bytes = encoder.into_bytes();
//! assert_eq!(bytes, vec![0b0001_0000]);
//!
//! let mut decoder = PerDecoder::with_options(&bytes, DecodeOptions::default());
//! assert_eq!(decoder.decode_integer(&Constraint::extensible(1, 32)).unwrap(), 5);
//! ```

pub mod constraint;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ie;
pub mod traits;

#[cfg(test)]
mod property_tests;

pub use constraint::{Constraint, SizeConstraint};
pub use decoder::{DecodeOptions, PerDecoder, UnknownIePolicy};
pub use encoder::{PerEncoder, PerVariant, MAX_UNFRAGMENTED_LENGTH};
pub use error::{PerError, PerResult};
pub use ie::{
    decode_extension_container, decode_protocol_ie_header, encode_extension_container,
    encode_protocol_ie_field, encode_protocol_ie_header, missing_mandatory_ie,
    present_extensions, serialize_hex, Criticality, ExtensionContainer, ObjectSet,
    ObjectSetEntry, Presence, ProtocolIeId, ProtocolIeSingleContainer, MAX_PROTOCOL_EXTENSIONS,
    MAX_PROTOCOL_IES, PROTOCOL_EXTENSION_CONTAINER_SIZE, PROTOCOL_IE_CONTAINER_SIZE,
};
pub use traits::{
    decode_from_slice, decode_optional, encode_optional, encode_to_vec, Choice, EnumNumber,
    Enumerated, PerDecode, PerEncode, ToJson,
};
