//! Declarative helpers for the repetitive E1AP type shapes.
//!
//! Each macro expands one ASN.1 template (ENUMERATED, constrained INTEGER,
//! SEQUENCE OF, ProtocolExtension object set, ProtocolIE container) into a
//! Rust type plus its `PerEncode`/`PerDecode` impls, so field order and
//! constraints live in exactly one place per type.

/// ENUMERATED type: `#[repr(u8)]` enum, name table, `Display` and codec.
///
/// ```ignore
/// per_enumerated! {
///     pub enum CnSupport("CNSupport", extensible) {
///         CEpc = "c-epc", C5gc = "c-5gc", Both = "both"
///     }
/// }
/// ```
///
/// Extension values follow a `;` after the root values.
macro_rules! per_enumerated {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($asn:literal) {
            $($variant:ident = $text:literal),+ $(,)?
        }
    ) => {
        per_enumerated!(@define [$(#[$meta])*] $name $asn false [$($variant $text)+] []);
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident($asn:literal, extensible) {
            $($variant:ident = $text:literal),+ $(,)?
            $(; $($ext_variant:ident = $ext_text:literal),+ $(,)?)?
        }
    ) => {
        per_enumerated!(
            @define [$(#[$meta])*] $name $asn true
            [$($variant $text)+] [$($($ext_variant $ext_text)+)?]
        );
    };
    (
        @define [$($meta:tt)*] $name:ident $asn:literal $ext:literal
        [$($variant:ident $text:literal)+] [$($ext_variant:ident $ext_text:literal)*]
    ) => {
        $($meta)*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::num_enum::IntoPrimitive,
            ::num_enum::TryFromPrimitive,
            ::serde::Serialize,
        )]
        #[repr(u8)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
            $(
                #[serde(rename = $ext_text)]
                $ext_variant,
            )*
        }

        impl ::e1ap_per::Enumerated for $name {
            const NAME: &'static str = $asn;
            const NAMES: &'static [&'static str] = &[$($text,)+ $($ext_text,)*];
            const ROOT_COUNT: usize = [$($text),+].len();
            const EXTENSIBLE: bool = $ext;

            fn index(self) -> usize {
                usize::from(u8::from(self))
            }

            fn from_index(index: usize) -> Option<Self> {
                u8::try_from(index).ok().and_then(|i| Self::try_from(i).ok())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(::e1ap_per::Enumerated::as_str(*self))
            }
        }

        impl ::e1ap_per::PerEncode for $name {
            fn per_encode(&self, encoder: &mut ::e1ap_per::PerEncoder) -> ::e1ap_per::PerResult<()> {
                ::e1ap_per::Enumerated::encode_enumerated(*self, encoder)
            }
        }

        impl ::e1ap_per::PerDecode for $name {
            fn per_decode(decoder: &mut ::e1ap_per::PerDecoder<'_>) -> ::e1ap_per::PerResult<Self> {
                <Self as ::e1ap_per::Enumerated>::decode_enumerated(decoder)
            }
        }
    };
}

/// Constrained INTEGER newtype.
///
/// ```ignore
/// per_integer! {
///     /// ASN.1: DRB-ID ::= INTEGER (1..32, ...)
///     pub struct DrbId(u8): "DRB-ID", Constraint::extensible(1, 32);
/// }
/// ```
macro_rules! per_integer {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($inner:ty): $asn:literal, $constraint:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            pub const CONSTRAINT: ::e1ap_per::Constraint = $constraint;

            pub fn new(value: $inner) -> Self {
                Self(value)
            }

            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::e1ap_per::PerEncode for $name {
            fn per_encode(&self, encoder: &mut ::e1ap_per::PerEncoder) -> ::e1ap_per::PerResult<()> {
                let value = i64::try_from(self.0).map_err(|_| {
                    ::e1ap_per::PerError::Encode(format!("{} value {} exceeds i64", $asn, self.0))
                })?;
                encoder.encode_integer(value, &Self::CONSTRAINT)
            }
        }

        impl ::e1ap_per::PerDecode for $name {
            fn per_decode(decoder: &mut ::e1ap_per::PerDecoder<'_>) -> ::e1ap_per::PerResult<Self> {
                let value = decoder.decode_integer(&Self::CONSTRAINT)?;
                <$inner>::try_from(value)
                    .map(Self)
                    .map_err(|_| ::e1ap_per::PerError::ValueOutOfRange {
                        value,
                        lb: Self::CONSTRAINT.lb,
                        ub: Self::CONSTRAINT.ub,
                    })
            }
        }
    };
}

/// SEQUENCE (SIZE (..)) OF newtype.
macro_rules! per_list {
    (
        $(#[$meta:meta])*
        pub struct $name:ident(Vec<$item:ty>): $size:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub const SIZE: ::e1ap_per::SizeConstraint = $size;

            pub fn new(items: Vec<$item>) -> Self {
                Self(items)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> ::std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl ::e1ap_per::PerEncode for $name {
            fn per_encode(&self, encoder: &mut ::e1ap_per::PerEncoder) -> ::e1ap_per::PerResult<()> {
                encoder.encode_sequence_of(&self.0, &Self::SIZE, |encoder, item| {
                    ::e1ap_per::PerEncode::per_encode(item, encoder)
                })
            }
        }

        impl ::e1ap_per::PerDecode for $name {
            fn per_decode(decoder: &mut ::e1ap_per::PerDecoder<'_>) -> ::e1ap_per::PerResult<Self> {
                decoder
                    .decode_sequence_of(&Self::SIZE, |decoder| {
                        <$item as ::e1ap_per::PerDecode>::per_decode(decoder)
                    })
                    .map(Self)
            }
        }
    };
}

/// ProtocolExtension object set with one optional field per entry.
///
/// ```ignore
/// extension_set! {
///     pub struct QosFlowItemExtIes("QoS-Flow-Item-ExtIEs") {
///         qos_flow_mapping_indication: QosFlowMappingIndication =
///             (ID_QOS_FLOW_MAPPING_INDICATION, Ignore),
///     }
/// }
/// ```
///
/// All entries are optional; an empty body declares a set with no members.
macro_rules! extension_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($asn:literal) {
            $($field:ident: $ty:ty = ($id:expr, $crit:ident)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, ::serde::Serialize)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl ::e1ap_per::ObjectSet for $name {
            const NAME: &'static str = $asn;
            const ENTRIES: &'static [::e1ap_per::ObjectSetEntry] = &[
                $(
                    ::e1ap_per::ObjectSetEntry::new(
                        $id,
                        ::e1ap_per::Criticality::$crit,
                        ::e1ap_per::Presence::Optional,
                    ),
                )*
            ];
        }

        impl ::e1ap_per::ExtensionContainer for $name {
            #[allow(unused_mut)]
            fn present_ids(&self) -> Vec<::e1ap_per::ProtocolIeId> {
                let mut ids = Vec::new();
                $(
                    if self.$field.is_some() {
                        ids.push($id);
                    }
                )*
                ids
            }

            #[allow(unused_variables)]
            fn encode_value(
                &self,
                id: ::e1ap_per::ProtocolIeId,
                encoder: &mut ::e1ap_per::PerEncoder,
            ) -> ::e1ap_per::PerResult<()> {
                match id {
                    $(
                        x if x == $id => match &self.$field {
                            Some(value) => ::e1ap_per::PerEncode::per_encode(value, encoder),
                            None => Err(::e1ap_per::PerError::Encode(format!(
                                "{} id {} is not set",
                                $asn, id
                            ))),
                        },
                    )*
                    _ => Err(::e1ap_per::PerError::Encode(format!(
                        "id {} is not part of {}",
                        id, $asn
                    ))),
                }
            }

            #[allow(unused_variables)]
            fn decode_value(
                &mut self,
                id: ::e1ap_per::ProtocolIeId,
                decoder: &mut ::e1ap_per::PerDecoder<'_>,
            ) -> ::e1ap_per::PerResult<()> {
                match id {
                    $(
                        x if x == $id => {
                            self.$field =
                                Some(<$ty as ::e1ap_per::PerDecode>::per_decode(decoder)?);
                            Ok(())
                        }
                    )*
                    _ => Err(::e1ap_per::PerError::UnknownIeId { object_set: $asn, id }),
                }
            }
        }
    };
}

/// Message body: `SEQUENCE { protocolIEs ProtocolIE-Container {{...}}, ... }`.
///
/// Mandatory IEs become plain fields, optional IEs `Option` fields. Fields
/// are packed in declaration order with the criticality given in the table.
///
/// ```ignore
/// protocol_ies! {
///     pub struct Reset("ResetIEs") {
///         mandatory transaction_id: TransactionId = (ID_TRANSACTION_ID, Reject),
///         optional cause: Cause = (ID_CAUSE, Ignore),
///     }
/// }
/// ```
macro_rules! protocol_ies {
    (@struct [$($meta:tt)*] $name:ident [$($done:tt)*]) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize)]
        pub struct $name {
            $($done)*
        }
    };
    (@struct $metas:tt $name:ident [$($done:tt)*] mandatory $field:ident($ty:ty) $($rest:tt)*) => {
        protocol_ies!(@struct $metas $name [$($done)* pub $field: $ty,] $($rest)*);
    };
    (@struct $metas:tt $name:ident [$($done:tt)*] optional $field:ident($ty:ty) $($rest:tt)*) => {
        protocol_ies!(
            @struct $metas $name
            [$($done)* #[serde(skip_serializing_if = "Option::is_none")] pub $field: Option<$ty>,]
            $($rest)*
        );
    };

    (@presence mandatory) => { ::e1ap_per::Presence::Mandatory };
    (@presence optional) => { ::e1ap_per::Presence::Optional };

    (@present mandatory $value:expr) => { true };
    (@present optional $value:expr) => { $value.is_some() };

    (@encode mandatory $encoder:ident, $value:expr, $id:expr, $crit:expr) => {
        ::e1ap_per::encode_protocol_ie_field($encoder, $id, $crit, &$value)?
    };
    (@encode optional $encoder:ident, $value:expr, $id:expr, $crit:expr) => {
        if let Some(value) = &$value {
            ::e1ap_per::encode_protocol_ie_field($encoder, $id, $crit, value)?;
        }
    };

    (@finish mandatory $field:ident, $asn:literal, $id:expr) => {
        $field.ok_or_else(|| ::e1ap_per::missing_mandatory_ie($asn, $id))?
    };
    (@finish optional $field:ident, $asn:literal, $id:expr) => { $field };

    (
        $(#[$meta:meta])*
        pub struct $name:ident($asn:literal) {
            $($presence:ident $field:ident: $ty:ty = ($id:expr, $crit:ident)),+ $(,)?
        }
    ) => {
        protocol_ies!(@struct [$(#[$meta])*] $name [] $($presence $field($ty))+);

        impl ::e1ap_per::ObjectSet for $name {
            const NAME: &'static str = $asn;
            const ENTRIES: &'static [::e1ap_per::ObjectSetEntry] = &[
                $(
                    ::e1ap_per::ObjectSetEntry::new(
                        $id,
                        ::e1ap_per::Criticality::$crit,
                        protocol_ies!(@presence $presence),
                    ),
                )+
            ];
        }

        impl ::e1ap_per::PerEncode for $name {
            fn per_encode(&self, encoder: &mut ::e1ap_per::PerEncoder) -> ::e1ap_per::PerResult<()> {
                // protocolIEs is the only root component
                encoder.encode_sequence_preamble(true, &[]);
                let count = 0usize $(+ usize::from(protocol_ies!(@present $presence self.$field)))+;
                encoder.encode_length(count, &::e1ap_per::PROTOCOL_IE_CONTAINER_SIZE)?;
                $(
                    protocol_ies!(
                        @encode $presence encoder, self.$field, $id, ::e1ap_per::Criticality::$crit
                    );
                )+
                Ok(())
            }
        }

        impl ::e1ap_per::PerDecode for $name {
            fn per_decode(decoder: &mut ::e1ap_per::PerDecoder<'_>) -> ::e1ap_per::PerResult<Self> {
                let (extended, []) = decoder.decode_sequence_preamble::<0>(true)?;
                let count = decoder.decode_length(&::e1ap_per::PROTOCOL_IE_CONTAINER_SIZE)?;
                $(
                    let mut $field: Option<$ty> = None;
                )+
                for _ in 0..count {
                    let (id, criticality) = ::e1ap_per::decode_protocol_ie_header(decoder)?;
                    match id {
                        $(
                            x if x == $id => {
                                $field = Some(decoder.decode_open_type(|inner| {
                                    <$ty as ::e1ap_per::PerDecode>::per_decode(inner)
                                })?);
                            }
                        )+
                        _ => decoder.handle_unknown_ie($asn, id, criticality)?,
                    }
                }
                if extended {
                    decoder.skip_extension_additions()?;
                }
                Ok(Self {
                    $(
                        $field: protocol_ies!(@finish $presence $field, $asn, $id),
                    )+
                })
            }
        }
    };
}
