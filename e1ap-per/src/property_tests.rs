//! Property tests for the PER primitives

use e1ap_common::BitString;
use proptest::prelude::*;

use crate::{Constraint, PerDecoder, PerEncoder, PerVariant, SizeConstraint};

fn variant() -> impl Strategy<Value = PerVariant> {
    prop_oneof![Just(PerVariant::Aligned), Just(PerVariant::Unaligned)]
}

/// A range `lb..=ub` and a value inside it
fn bounded_value() -> impl Strategy<Value = (i64, i64, i64)> {
    (-1_000_000i64..1_000_000, 0u64..(1 << 42))
        .prop_flat_map(|(lb, span)| {
            let ub = lb + span as i64;
            (Just(lb), Just(ub), lb..=ub)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_constrained_whole_number((lb, ub, value) in bounded_value(), variant in variant()) {
        let mut encoder = PerEncoder::new(variant);
        encoder.encode_constrained_whole_number(value, lb, ub).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&bytes, variant);
        prop_assert_eq!(decoder.decode_constrained_whole_number(lb, ub).unwrap(), value);
    }

    #[test]
    fn prop_extensible_integer(value in any::<i64>(), variant in variant()) {
        let constraint = Constraint::extensible(0, 255);
        let mut encoder = PerEncoder::new(variant);
        encoder.encode_integer(value, &constraint).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&bytes, variant);
        prop_assert_eq!(decoder.decode_integer(&constraint).unwrap(), value);
    }

    #[test]
    fn prop_value_outside_root_is_rejected(value in 33i64..1000) {
        let mut encoder = PerEncoder::aligned();
        prop_assert!(encoder.encode_integer(value, &Constraint::new(1, 32)).is_err());
    }

    #[test]
    fn prop_normally_small(value in 0u64..100_000, variant in variant()) {
        let mut encoder = PerEncoder::new(variant);
        encoder.encode_normally_small(value).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&bytes, variant);
        prop_assert_eq!(decoder.decode_normally_small().unwrap(), value);
    }

    #[test]
    fn prop_octet_string_with_prefix_bits(
        prefix in 0usize..8,
        data in proptest::collection::vec(any::<u8>(), 0..300),
        variant in variant(),
    ) {
        let size = SizeConstraint::unbounded();
        let mut encoder = PerEncoder::new(variant);
        encoder.write_bits(0, prefix);
        encoder.encode_octet_string(&data, &size).unwrap();
        let bytes = encoder.into_bytes();

        let mut decoder = PerDecoder::new(&bytes, variant);
        decoder.read_bits(prefix).unwrap();
        prop_assert_eq!(decoder.decode_octet_string(&size).unwrap(), data);
    }

    #[test]
    fn prop_bit_string(value in any::<u64>(), len in 1usize..=64, variant in variant()) {
        let bits = BitString::from_u64(value, len);
        let size = SizeConstraint::range(1, 64);
        let mut encoder = PerEncoder::new(variant);
        encoder.encode_bit_string(&bits, &size).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&bytes, variant);
        prop_assert_eq!(decoder.decode_bit_string(&size).unwrap(), bits);
    }

    #[test]
    fn prop_printable_string(value in "[A-Za-z0-9 '()+,./:=?-]{1,150}", variant in variant()) {
        let size = SizeConstraint::range_ext(1, 150);
        let mut encoder = PerEncoder::new(variant);
        encoder.encode_printable_string("Name", &value, &size).unwrap();
        let bytes = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&bytes, variant);
        prop_assert_eq!(decoder.decode_printable_string("Name", &size).unwrap(), value);
    }

    #[test]
    fn prop_open_type_keeps_outer_position(inner in 0i64..65536, trailer in any::<u8>()) {
        let mut encoder = PerEncoder::aligned();
        encoder.write_bool(true);
        encoder.encode_open_type(|e| e.encode_constrained_whole_number(inner, 0, 65535)).unwrap();
        encoder.write_bits(u64::from(trailer), 8);
        let bytes = encoder.into_bytes();

        let mut decoder = PerDecoder::aligned(&bytes);
        prop_assert!(decoder.read_bool().unwrap());
        let decoded = decoder
            .decode_open_type(|d| d.decode_constrained_whole_number(0, 65535))
            .unwrap();
        prop_assert_eq!(decoded, inner);
        prop_assert_eq!(decoder.read_bits(8).unwrap(), u64::from(trailer));
    }
}
