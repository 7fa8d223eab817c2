//! Criticality Diagnostics (TS 38.463 9.3.1.3)

use e1ap_per::{
    decode_extension_container, decode_optional, encode_extension_container, encode_optional,
    present_extensions, Criticality, PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult,
    ProtocolIeId, SizeConstraint, MAX_PROTOCOL_IES,
};
use serde::Serialize;

use super::common::{ProcedureCode, TransactionId, TriggeringMessage, TypeOfError};
use crate::constants::MAX_NOOF_ERRORS;

extension_set! {
    pub struct CriticalityDiagnosticsExtIes("CriticalityDiagnostics-ExtIEs") {}
}

extension_set! {
    pub struct CriticalityDiagnosticsIeListExtIes("CriticalityDiagnostics-IE-List-ExtIEs") {}
}

/// ASN.1: CriticalityDiagnostics ::= SEQUENCE {
///     procedureCode, triggeringMessage, procedureCriticality, transactionID,
///     iEsCriticalityDiagnostics, iE-Extensions (all OPTIONAL), ... }
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CriticalityDiagnostics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_code: Option<ProcedureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggering_message: Option<TriggeringMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_criticality: Option<Criticality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ies_criticality_diagnostics: Option<CriticalityDiagnosticsIeList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<CriticalityDiagnosticsExtIes>,
}

impl PerEncode for CriticalityDiagnostics {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(
            true,
            &[
                self.procedure_code.is_some(),
                self.triggering_message.is_some(),
                self.procedure_criticality.is_some(),
                self.transaction_id.is_some(),
                self.ies_criticality_diagnostics.is_some(),
                ie_exts.is_some(),
            ],
        );
        encode_optional(encoder, &self.procedure_code)?;
        encode_optional(encoder, &self.triggering_message)?;
        encode_optional(encoder, &self.procedure_criticality)?;
        encode_optional(encoder, &self.transaction_id)?;
        encode_optional(encoder, &self.ies_criticality_diagnostics)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for CriticalityDiagnostics {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [procedure_code, triggering_message, procedure_criticality, transaction_id, ies, ie_exts]) =
            decoder.decode_sequence_preamble::<6>(true)?;
        let value = Self {
            procedure_code: decode_optional(decoder, procedure_code)?,
            triggering_message: decode_optional(decoder, triggering_message)?,
            procedure_criticality: decode_optional(decoder, procedure_criticality)?,
            transaction_id: decode_optional(decoder, transaction_id)?,
            ies_criticality_diagnostics: decode_optional(decoder, ies)?,
            ie_exts: if ie_exts {
                decode_extension_container(decoder)?
            } else {
                None
            },
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(value)
    }
}

per_list! {
    /// ASN.1: CriticalityDiagnostics-IE-List ::= SEQUENCE (SIZE (1..maxnoofErrors)) OF CriticalityDiagnostics-IE-List-Item
    pub struct CriticalityDiagnosticsIeList(Vec<CriticalityDiagnosticsIeListItem>):
        SizeConstraint::range(1, MAX_NOOF_ERRORS);
}

/// ASN.1: CriticalityDiagnostics-IE-List-Item ::= SEQUENCE {
///     iECriticality, iE-ID, typeOfError, iE-Extensions OPTIONAL, ... }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalityDiagnosticsIeListItem {
    pub ie_criticality: Criticality,
    pub ie_id: ProtocolIeId,
    pub type_of_error: TypeOfError,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ie_exts: Option<CriticalityDiagnosticsIeListExtIes>,
}

impl CriticalityDiagnosticsIeListItem {
    pub fn new(ie_criticality: Criticality, ie_id: ProtocolIeId, type_of_error: TypeOfError) -> Self {
        Self {
            ie_criticality,
            ie_id,
            type_of_error,
            ie_exts: None,
        }
    }
}

impl PerEncode for CriticalityDiagnosticsIeListItem {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        let ie_exts = present_extensions(&self.ie_exts);
        encoder.encode_sequence_preamble(true, &[ie_exts.is_some()]);
        self.ie_criticality.per_encode(encoder)?;
        encoder.encode_constrained_whole_number(
            i64::from(self.ie_id),
            0,
            MAX_PROTOCOL_IES as i64,
        )?;
        self.type_of_error.per_encode(encoder)?;
        if let Some(ie_exts) = ie_exts {
            encode_extension_container(ie_exts, encoder)?;
        }
        Ok(())
    }
}

impl PerDecode for CriticalityDiagnosticsIeListItem {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        let (extended, [ie_exts]) = decoder.decode_sequence_preamble::<1>(true)?;
        let ie_criticality = Criticality::per_decode(decoder)?;
        let ie_id = decoder.decode_constrained_whole_number(0, MAX_PROTOCOL_IES as i64)? as ProtocolIeId;
        let type_of_error = TypeOfError::per_decode(decoder)?;
        let ie_exts = if ie_exts {
            decode_extension_container(decoder)?
        } else {
            None
        };
        if extended {
            decoder.skip_extension_additions()?;
        }
        Ok(Self {
            ie_criticality,
            ie_id,
            type_of_error,
            ie_exts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e1ap_per::{decode_from_slice, encode_to_vec, DecodeOptions, PerVariant};

    #[test]
    fn test_criticality_diagnostics_encoding() {
        let diagnostics = CriticalityDiagnostics {
            procedure_code: Some(ProcedureCode(3)),
            triggering_message: Some(TriggeringMessage::InitiatingMessage),
            procedure_criticality: Some(Criticality::Reject),
            transaction_id: None,
            ies_criticality_diagnostics: Some(CriticalityDiagnosticsIeList::new(vec![
                CriticalityDiagnosticsIeListItem::new(Criticality::Reject, 7, TypeOfError::Missing),
            ])),
            ie_exts: None,
        };

        let bytes = encode_to_vec(&diagnostics, PerVariant::Aligned).unwrap();
        // preamble 0 111010, procedureCode octet, 2+2 bits, list length octet,
        // item preamble + criticality, aligned IE id, typeOfError
        assert_eq!(bytes, vec![0x74, 0x03, 0x00, 0x00, 0x00, 0x00, 0x07, 0x40]);

        let decoded: CriticalityDiagnostics =
            decode_from_slice(&bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, diagnostics);
    }

    #[test]
    fn test_empty_diagnostics() {
        let bytes = encode_to_vec(&CriticalityDiagnostics::default(), PerVariant::Aligned).unwrap();
        assert_eq!(bytes, vec![0x00]);
        let decoded: CriticalityDiagnostics =
            decode_from_slice(&bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded, CriticalityDiagnostics::default());
    }

    #[test]
    fn test_empty_extension_container_is_absent() {
        let mut diagnostics = CriticalityDiagnostics::default();
        diagnostics.ie_exts = Some(CriticalityDiagnosticsExtIes::default());
        let bytes = encode_to_vec(&diagnostics, PerVariant::Aligned).unwrap();
        assert_eq!(bytes, vec![0x00]);
    }

    #[test]
    fn test_diagnostics_list_size() {
        let diagnostics = CriticalityDiagnostics {
            ies_criticality_diagnostics: Some(CriticalityDiagnosticsIeList::default()),
            ..Default::default()
        };
        assert!(encode_to_vec(&diagnostics, PerVariant::Aligned).is_err());
    }
}
