//! Cause (TS 38.463 9.3.1.2)

use e1ap_per::{
    Choice, PerDecode, PerDecoder, PerEncode, PerEncoder, PerResult, ProtocolIeSingleContainer,
};
use serde::Serialize;

/// ASN.1: Cause ::= CHOICE { radioNetwork, transport, protocol, misc, choice-extension }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cause {
    #[serde(rename = "radioNetwork")]
    RadioNetwork(CauseRadioNetwork),
    #[serde(rename = "transport")]
    Transport(CauseTransport),
    #[serde(rename = "protocol")]
    Protocol(CauseProtocol),
    #[serde(rename = "misc")]
    Misc(CauseMisc),
    #[serde(rename = "choice-extension")]
    ChoiceExtension(ProtocolIeSingleContainer),
}

impl Choice for Cause {
    const NAME: &'static str = "Cause";
    const ALTERNATIVES: &'static [&'static str] =
        &["radioNetwork", "transport", "protocol", "misc", "choice-extension"];

    fn index(&self) -> usize {
        match self {
            Cause::RadioNetwork(_) => 0,
            Cause::Transport(_) => 1,
            Cause::Protocol(_) => 2,
            Cause::Misc(_) => 3,
            Cause::ChoiceExtension(_) => 4,
        }
    }
}

impl PerEncode for Cause {
    fn per_encode(&self, encoder: &mut PerEncoder) -> PerResult<()> {
        self.encode_choice_index(encoder)?;
        match self {
            Cause::RadioNetwork(value) => value.per_encode(encoder),
            Cause::Transport(value) => value.per_encode(encoder),
            Cause::Protocol(value) => value.per_encode(encoder),
            Cause::Misc(value) => value.per_encode(encoder),
            Cause::ChoiceExtension(value) => value.per_encode(encoder),
        }
    }
}

impl PerDecode for Cause {
    fn per_decode(decoder: &mut PerDecoder<'_>) -> PerResult<Self> {
        match Self::decode_choice_index(decoder)? {
            0 => Ok(Cause::RadioNetwork(CauseRadioNetwork::per_decode(decoder)?)),
            1 => Ok(Cause::Transport(CauseTransport::per_decode(decoder)?)),
            2 => Ok(Cause::Protocol(CauseProtocol::per_decode(decoder)?)),
            3 => Ok(Cause::Misc(CauseMisc::per_decode(decoder)?)),
            4 => Ok(Cause::ChoiceExtension(ProtocolIeSingleContainer::per_decode(
                decoder,
            )?)),
            index => Err(Self::invalid_index(index)),
        }
    }
}

impl From<CauseRadioNetwork> for Cause {
    fn from(value: CauseRadioNetwork) -> Self {
        Cause::RadioNetwork(value)
    }
}

impl From<CauseTransport> for Cause {
    fn from(value: CauseTransport) -> Self {
        Cause::Transport(value)
    }
}

impl From<CauseProtocol> for Cause {
    fn from(value: CauseProtocol) -> Self {
        Cause::Protocol(value)
    }
}

impl From<CauseMisc> for Cause {
    fn from(value: CauseMisc) -> Self {
        Cause::Misc(value)
    }
}

per_enumerated! {
    /// ASN.1: CauseRadioNetwork ::= ENUMERATED { unspecified, ..., ... }
    pub enum CauseRadioNetwork("CauseRadioNetwork", extensible) {
        Unspecified = "unspecified",
        UnknownOrAlreadyAllocatedGnbCuCpUeE1apId = "unknown-or-already-allocated-gnb-cu-cp-ue-e1ap-id",
        UnknownOrAlreadyAllocatedGnbCuUpUeE1apId = "unknown-or-already-allocated-gnb-cu-up-ue-e1ap-id",
        UnknownOrInconsistentPairOfUeE1apId = "unknown-or-inconsistent-pair-of-ue-e1ap-id",
        InteractionWithOtherProcedure = "interaction-with-other-procedure",
        PdcpCountWrapAround = "pPDCP-Count-wrap-around",
        NotSupportedQciValue = "not-supported-QCI-value",
        NotSupported5qiValue = "not-supported-5QI-value",
        EncryptionAlgorithmsNotSupported = "encryption-algorithms-not-supported",
        IntegrityProtectionAlgorithmsNotSupported = "integrity-protection-algorithms-not-supported",
        UpIntegrityProtectionNotPossible = "uP-integrity-protection-not-possible",
        UpConfidentialityProtectionNotPossible = "uP-confidentiality-protection-not-possible",
        MultiplePduSessionIdInstances = "multiple-PDU-Session-ID-Instances",
        UnknownPduSessionId = "unknown-PDU-Session-ID",
        MultipleQosFlowIdInstances = "multiple-QoS-Flow-ID-Instances",
        UnknownQosFlowId = "unknown-QoS-Flow-ID",
        MultipleDrbIdInstances = "multiple-DRB-ID-Instances",
        UnknownDrbId = "unknown-DRB-ID",
        InvalidQosCombination = "invalid-QoS-combination",
        ProcedureCancelled = "procedure-cancelled",
        NormalRelease = "normal-release",
        NoRadioResourcesAvailable = "no-radio-resources-available",
        ActionDesirableForRadioReasons = "action-desirable-for-radio-reasons",
        ResourcesNotAvailableForTheSlice = "resources-not-available-for-the-slice",
        PdcpConfigurationNotSupported = "pDCP-configuration-not-supported";
        UeDlMaxIpDataRateReason = "ue-dl-max-IP-data-rate-reason",
        UpIntegrityProtectionFailure = "uP-integrity-protection-failure",
        ReleaseDueToPreEmption = "release-due-to-pre-emption",
        RsnNotAvailableForTheUp = "rsn-not-available-for-the-up",
        NpnNotSupported = "nPN-not-supported",
    }
}

per_enumerated! {
    /// ASN.1: CauseTransport ::= ENUMERATED { unspecified, transport-resource-unavailable, ..., unknown-TNL-address-for-IAB }
    pub enum CauseTransport("CauseTransport", extensible) {
        Unspecified = "unspecified",
        TransportResourceUnavailable = "transport-resource-unavailable";
        UnknownTnlAddressForIab = "unknown-TNL-address-for-IAB",
    }
}

per_enumerated! {
    /// ASN.1: CauseProtocol ::= ENUMERATED { transfer-syntax-error, ..., unspecified, ... }
    pub enum CauseProtocol("CauseProtocol", extensible) {
        TransferSyntaxError = "transfer-syntax-error",
        AbstractSyntaxErrorReject = "abstract-syntax-error-reject",
        AbstractSyntaxErrorIgnoreAndNotify = "abstract-syntax-error-ignore-and-notify",
        MessageNotCompatibleWithReceiverState = "message-not-compatible-with-receiver-state",
        SemanticError = "semantic-error",
        AbstractSyntaxErrorFalselyConstructedMessage = "abstract-syntax-error-falsely-constructed-message",
        Unspecified = "unspecified",
    }
}

per_enumerated! {
    /// ASN.1: CauseMisc ::= ENUMERATED { control-processing-overload, ..., unspecified, ... }
    pub enum CauseMisc("CauseMisc", extensible) {
        ControlProcessingOverload = "control-processing-overload",
        NotEnoughUserPlaneProcessingResources = "not-enough-user-plane-processing-resources",
        HardwareFailure = "hardware-failure",
        OmIntervention = "om-intervention",
        Unspecified = "unspecified",
    }
}
