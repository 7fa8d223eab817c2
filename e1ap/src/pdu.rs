//! E1AP-PDU (TS 38.463 clause 9.4.3)
//!
//! The three message classes each carry a procedure code, the procedure
//! criticality and the message body as an open type. The body type is
//! selected by the procedure code through the elementary procedure table.

use e1ap_per::{
    Choice, Criticality, PerDecode, PerDecoder, PerEncode, PerEncoder, PerError, PerResult,
};
use serde::Serialize;

use crate::constants::*;
use crate::messages::{
    BearerContextInactivityNotification, DlDataNotification, ErrorIndication,
    GnbCuUpE1SetupFailure, GnbCuUpE1SetupRequest, GnbCuUpE1SetupResponse, Reset,
    ResetAcknowledge,
};

/// ASN.1: E1AP-PDU ::= CHOICE { initiatingMessage, successfulOutcome, unsuccessfulOutcome, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum E1apPdu {
    #[serde(rename = "initiatingMessage")]
    InitiatingMessage(InitiatingMessage),
    #[serde(rename = "successfulOutcome")]
    SuccessfulOutcome(SuccessfulOutcome),
    #[serde(rename = "unsuccessfulOutcome")]
    UnsuccessfulOutcome(UnsuccessfulOutcome),
}

impl E1apPdu {
    pub fn procedure_code(&self) -> u8 {
        match self {
            E1apPdu::InitiatingMessage(message) => message.procedure_code(),
            E1apPdu::SuccessfulOutcome(message) => message.procedure_code(),
            E1apPdu::UnsuccessfulOutcome(message) => message.procedure_code(),
        }
    }

    pub fn criticality(&self) -> Criticality {
        match self {
            E1apPdu::InitiatingMessage(message) => message.criticality(),
            E1apPdu::SuccessfulOutcome(message) => message.criticality(),
            E1apPdu::UnsuccessfulOutcome(message) => message.criticality(),
        }
    }

    /// ASN.1 name of the carried message, e.g. `"Reset"`.
    pub fn message_name(&self) -> &'static str {
        match self {
            E1apPdu::InitiatingMessage(message) => message.message_name(),
            E1apPdu::SuccessfulOutcome(message) => message.message_name(),
            E1apPdu::UnsuccessfulOutcome(message) => message.message_name(),
        }
    }
}

impl Choice for E1apPdu {
    const NAME: &'static str = "E1AP-PDU";
    const ALTERNATIVES: &'static [&'static str] =
        &["initiatingMessage", "successfulOutcome", "unsuccessfulOutcome"];
    const EXTENSIBLE: bool = true;

    fn index(&self) -> usize {
        match self {
            E1apPdu::InitiatingMessage(_) => 0,
            E1apPdu::SuccessfulOutcome(_) => 1,
            E1apPdu::UnsuccessfulOutcome(_) => 2,
        }
    }
}

impl PerEncode for E1apPdu {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        self.encode_choice_index(encoder)?;
        match self {
            E1apPdu::InitiatingMessage(message) => message.per_encode(encoder),
            E1apPdu::SuccessfulOutcome(message) => message.per_encode(encoder),
            E1apPdu::UnsuccessfulOutcome(message) => message.per_encode(encoder),
        }
    }
}

impl PerDecode for E1apPdu {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        match Self::decode_choice_index(decoder)? {
            0 => Ok(E1apPdu::InitiatingMessage(InitiatingMessage::per_decode(
                decoder,
            )?)),
            1 => Ok(E1apPdu::SuccessfulOutcome(SuccessfulOutcome::per_decode(
                decoder,
            )?)),
            2 => Ok(E1apPdu::UnsuccessfulOutcome(
                UnsuccessfulOutcome::per_decode(decoder)?,
            )),
            index => Err(Self::invalid_index(index)),
        }
    }
}

fn unknown_procedure_code(class: &'static str, code: u8) -> PerError {
    tracing::error!(class, code, "Unknown procedure code");
    PerError::UnknownProcedureCode { code }
}

/// One message class of the elementary procedure table.
///
/// Expands to an enum with one variant per procedure, plus the
/// `SEQUENCE { procedureCode, criticality, value }` codec around it.
macro_rules! message_class {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($asn:literal) {
            $($variant:ident($msg:ty) = ($code:expr, $crit:ident, $msg_name:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $msg_name)]
                $variant($msg),
            )+
        }

        impl $name {
            pub fn procedure_code(&self) -> u8 {
                match self {
                    $($name::$variant(_) => $code,)+
                }
            }

            /// Procedure criticality from the elementary procedure table.
            pub fn criticality(&self) -> Criticality {
                match self {
                    $($name::$variant(_) => Criticality::$crit,)+
                }
            }

            pub fn message_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => $msg_name,)+
                }
            }
        }

        $(
            impl From<$msg> for $name {
                fn from(message: $msg) -> Self {
                    $name::$variant(message)
                }
            }
        )+

        impl PerEncode for $name {
            fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
                encoder.encode_constrained_whole_number(i64::from(self.procedure_code()), 0, 255)?;
                self.criticality().per_encode(encoder)?;
                match self {
                    $($name::$variant(message) => {
                        encoder.encode_open_type(|inner| message.per_encode(inner))
                    })+
                }
            }
        }

        impl PerDecode for $name {
            fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
                let code = decoder.decode_constrained_whole_number(0, 255)? as u8;
                let criticality = Criticality::per_decode(decoder)?;
                tracing::trace!(class = $asn, code, %criticality, "Decoding message");
                match code {
                    $(
                        x if x == $code => decoder
                            .decode_open_type(|inner| <$msg as PerDecode>::per_decode(inner))
                            .map($name::$variant),
                    )+
                    _ => Err(unknown_procedure_code($asn, code)),
                }
            }
        }
    };
}

message_class! {
    /// ASN.1: InitiatingMessage ::= SEQUENCE { procedureCode, criticality, value }
    pub enum InitiatingMessage("InitiatingMessage") {
        Reset(Reset) = (ID_RESET, Reject, "Reset"),
        ErrorIndication(ErrorIndication) = (ID_ERROR_INDICATION, Ignore, "ErrorIndication"),
        GnbCuUpE1SetupRequest(GnbCuUpE1SetupRequest) =
            (ID_GNB_CU_UP_E1_SETUP, Reject, "GNB-CU-UP-E1SetupRequest"),
        BearerContextInactivityNotification(BearerContextInactivityNotification) = (
            ID_BEARER_CONTEXT_INACTIVITY_NOTIFICATION,
            Ignore,
            "BearerContextInactivityNotification"
        ),
        DlDataNotification(DlDataNotification) =
            (ID_DL_DATA_NOTIFICATION, Ignore, "DLDataNotification"),
    }
}

message_class! {
    /// ASN.1: SuccessfulOutcome ::= SEQUENCE { procedureCode, criticality, value }
    pub enum SuccessfulOutcome("SuccessfulOutcome") {
        ResetAcknowledge(ResetAcknowledge) = (ID_RESET, Reject, "ResetAcknowledge"),
        GnbCuUpE1SetupResponse(GnbCuUpE1SetupResponse) =
            (ID_GNB_CU_UP_E1_SETUP, Reject, "GNB-CU-UP-E1SetupResponse"),
    }
}

message_class! {
    /// ASN.1: UnsuccessfulOutcome ::= SEQUENCE { procedureCode, criticality, value }
    pub enum UnsuccessfulOutcome("UnsuccessfulOutcome") {
        GnbCuUpE1SetupFailure(GnbCuUpE1SetupFailure) =
            (ID_GNB_CU_UP_E1_SETUP, Reject, "GNB-CU-UP-E1SetupFailure"),
    }
}

macro_rules! into_pdu {
    ($class:ident => $($msg:ty),+) => {
        $(
            impl From<$msg> for E1apPdu {
                fn from(message: $msg) -> Self {
                    E1apPdu::$class(message.into())
                }
            }
        )+
    };
}

into_pdu!(
    InitiatingMessage => Reset,
    ErrorIndication,
    GnbCuUpE1SetupRequest,
    BearerContextInactivityNotification,
    DlDataNotification
);
into_pdu!(SuccessfulOutcome => ResetAcknowledge, GnbCuUpE1SetupResponse);
into_pdu!(UnsuccessfulOutcome => GnbCuUpE1SetupFailure);
