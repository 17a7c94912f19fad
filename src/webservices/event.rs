use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::combined::{self, CombinedDocument};
use super::config::CallOptions;
use super::result::{EventBatchStatus, EventStatus, FiscalOperationResult};
use super::soap::{self, NFE_NS};
use crate::core::{
    NfeError, Service, TaxpayerId, ValidationError, validate_batch_id, validate_document_key,
    validate_protocol_number, validate_taxpayer, validate_text,
};
use crate::sign::{Anchor, SignedArtifact};
use crate::xml::{Document, Element, XmlError, XmlWriter};

/// Fixed conditions of use carried by every correction note.
pub const CORRECTION_CONDITIONS: &str = "A Carta de Correção é disciplinada pelo § 1º-A do art. 7º do Convênio S/N, de 15 de dezembro de 1970 e pode ser utilizada para regularização de erro ocorrido na emissão de documento fiscal, desde que o erro não esteja relacionado com: I - as variáveis que determinam o valor do imposto tais como: base de cálculo, alíquota, diferença de preço, quantidade, valor da operação ou da prestação; II - a correção de dados cadastrais que implique mudança do remetente ou do destinatário; III - a data de emissão ou de saída.";

const MAX_SEQUENCE: u8 = 20;

/// What is being registered against a document, with the fields each kind
/// requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// 110111
    Cancellation { protocol: String, justification: String },
    /// 110112, cancellation of an NFC-e replaced by another document.
    CancellationBySubstitution {
        protocol: String,
        justification: String,
        /// Access key of the replacing document.
        substitute_key: String,
        /// Version of the issuing application (`verAplic`).
        application_version: String,
    },
    /// 110110
    CorrectionNote { correction: String },
    /// 210200, recipient confirms the operation.
    OperationConfirmation,
    /// 210210, recipient is aware of the operation.
    OperationAwareness,
    /// 210220, recipient does not recognise the operation.
    OperationUnknown,
    /// 210240
    OperationNotPerformed { justification: String },
}

impl EventKind {
    /// `tpEvento`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cancellation { .. } => "110111",
            Self::CancellationBySubstitution { .. } => "110112",
            Self::CorrectionNote { .. } => "110110",
            Self::OperationConfirmation => "210200",
            Self::OperationAwareness => "210210",
            Self::OperationUnknown => "210220",
            Self::OperationNotPerformed { .. } => "210240",
        }
    }

    /// `descEvento`
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cancellation { .. } => "Cancelamento",
            Self::CancellationBySubstitution { .. } => "Cancelamento por Substituição",
            Self::CorrectionNote { .. } => "Carta de Correção",
            Self::OperationConfirmation => "Confirmação da Operação",
            Self::OperationAwareness => "Ciência da Operação",
            Self::OperationUnknown => "Desconhecimento da Operação",
            Self::OperationNotPerformed { .. } => "Operação não Realizada",
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Cancellation { protocol, justification } => {
                validate_protocol_number("protocol", protocol)?;
                validate_text("justification", justification, 15, 255)
            }
            Self::CancellationBySubstitution {
                protocol,
                justification,
                substitute_key,
                application_version,
            } => {
                validate_protocol_number("protocol", protocol)?;
                validate_text("justification", justification, 15, 255)?;
                validate_document_key("substitute_key", substitute_key)?;
                validate_text("application_version", application_version, 1, 20)
            }
            Self::CorrectionNote { correction } => validate_text("correction", correction, 15, 1000),
            Self::OperationNotPerformed { justification } => {
                validate_text("justification", justification, 15, 255)
            }
            Self::OperationConfirmation | Self::OperationAwareness | Self::OperationUnknown => Ok(()),
        }
    }

    /// `detEvento` for this kind. `c_uf` doubles as the author's region.
    fn details(&self, c_uf: &str) -> Element {
        let text = |name: &str, value: &str| Element::new(name).with_text(value.trim());
        let det = Element::new("detEvento")
            .with_attr("versao", "1.00")
            .with_child(text("descEvento", self.description()));
        match self {
            Self::Cancellation { protocol, justification } => det
                .with_child(text("nProt", protocol))
                .with_child(text("xJust", justification)),
            Self::CancellationBySubstitution {
                protocol,
                justification,
                substitute_key,
                application_version,
            } => det
                .with_child(text("cOrgaoAutor", c_uf))
                .with_child(text("tpAutor", "1"))
                .with_child(text("verAplic", application_version))
                .with_child(text("nProt", protocol))
                .with_child(text("xJust", justification))
                .with_child(text("chNFeRef", substitute_key)),
            Self::CorrectionNote { correction } => det
                .with_child(text("xCorrecao", correction))
                .with_child(text("xCondUso", CORRECTION_CONDITIONS)),
            Self::OperationNotPerformed { justification } => det.with_child(text("xJust", justification)),
            Self::OperationConfirmation | Self::OperationAwareness | Self::OperationUnknown => det,
        }
    }
}

/// An event registered against one authorized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 44-digit access key of the document.
    pub document_key: String,
    /// Taxpayer registering the event: the issuer, or the recipient for
    /// the operation acknowledgements.
    pub author: TaxpayerId,
    /// `nSeqEvento`, 1 for the first event of a kind on a document.
    pub sequence: u8,
    /// `dhEvento`
    pub issued_at: DateTime<FixedOffset>,
    pub kind: EventKind,
}

impl Event {
    /// First event of `kind` on the document, stamped with the local time.
    pub fn new(document_key: impl Into<String>, author: TaxpayerId, kind: EventKind) -> Self {
        Self {
            document_key: document_key.into(),
            author,
            sequence: 1,
            issued_at: Local::now().fixed_offset(),
            kind,
        }
    }

    pub fn with_sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_issued_at(mut self, issued_at: DateTime<FixedOffset>) -> Self {
        self.issued_at = issued_at;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_document_key("document_key", &self.document_key)?;
        validate_taxpayer("author", &self.author)?;
        if !(1..=MAX_SEQUENCE).contains(&self.sequence) {
            return Err(ValidationError::new(
                "sequence",
                format!("must be within 1..={MAX_SEQUENCE}, got {}", self.sequence),
            ));
        }
        self.kind.validate()
    }

    /// `infEvento` `Id`: `ID`, event type, access key, two-digit sequence.
    pub fn identifier(&self) -> String {
        format!("ID{}{}{:02}", self.kind.code(), self.document_key, self.sequence)
    }
}

/// Unsigned `evento`.
pub(crate) fn event_request(event: &Event, tp_amb: &str, c_uf: &str) -> Element {
    let text = |name: &str, value: String| Element::new(name).with_text(value);
    let inf_evento = Element::new("infEvento")
        .with_attr("Id", event.identifier())
        .with_child(text("cOrgao", c_uf.to_string()))
        .with_child(text("tpAmb", tp_amb.to_string()))
        .with_child(text(event.author.tag(), event.author.value().to_string()))
        .with_child(text("chNFe", event.document_key.clone()))
        .with_child(text("dhEvento", event.issued_at.format("%Y-%m-%dT%H:%M:%S%:z").to_string()))
        .with_child(text("tpEvento", event.kind.code().to_string()))
        .with_child(text("nSeqEvento", event.sequence.to_string()))
        .with_child(text("verEvento", "1.00".to_string()))
        .with_child(event.kind.details(c_uf));
    Element::new("evento")
        .with_attr("xmlns", NFE_NS)
        .with_attr("versao", "1.00")
        .with_child(inf_evento)
}

pub(crate) fn event_body(batch_id: &str, signed_event: &str) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("envEvento", &[("xmlns", NFE_NS), ("versao", "1.00")])?
        .text_element("idLote", batch_id)?
        .raw(signed_event)?
        .end_element("envEvento")?;
    w.into_string()
}

/// `retEnvEvento`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBatchResponse {
    #[serde(default)]
    pub id_lote: String,
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    #[serde(default)]
    pub c_orgao: String,
    pub c_stat: String,
    pub x_motivo: String,
    pub ret_evento: Option<EventReceipt>,
}

/// `retEvento`: the authority's record of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReceipt {
    #[serde(rename = "@versao")]
    pub version: Option<String>,
    #[serde(rename = "infEvento")]
    pub inf_evento: EventReceiptInfo,
}

/// `retEvento/infEvento`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReceiptInfo {
    #[serde(rename = "@Id")]
    pub id: Option<String>,
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    #[serde(default)]
    pub c_orgao: String,
    pub c_stat: String,
    pub x_motivo: String,
    #[serde(rename = "chNFe")]
    pub ch_nfe: Option<String>,
    pub tp_evento: Option<String>,
    pub x_evento: Option<String>,
    pub n_seq_evento: Option<String>,
    pub c_orgao_autor: Option<String>,
    #[serde(rename = "CNPJDest")]
    pub cnpj_dest: Option<String>,
    #[serde(rename = "CPFDest")]
    pub cpf_dest: Option<String>,
    pub email_dest: Option<String>,
    pub dh_reg_evento: Option<String>,
    pub n_prot: Option<String>,
    /// Keys of documents still pending on a substituted NFC-e.
    #[serde(rename = "chNFePend", default)]
    pub ch_nfe_pend: Vec<String>,
}

/// Outcome of [`ProtocolClient::notify_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Batch-level status (`retEnvEvento/cStat`).
    pub batch: FiscalOperationResult<EventBatchStatus, EventBatchResponse>,
    /// Per-event stamp, present once the batch was processed.
    pub event: Option<FiscalOperationResult<EventStatus, EventReceipt>>,
    pub signed_document: SignedArtifact,
    /// `procEventoNFe`, built whenever a stamp came back.
    pub combined_document: Option<CombinedDocument>,
}

impl EventOutcome {
    pub fn is_registered(&self) -> bool {
        self.event
            .as_ref()
            .is_some_and(|e| matches!(e.status, EventStatus::Linked | EventStatus::NotLinked))
    }
}

impl ProtocolClient {
    /// Sign and register an event against a document.
    pub async fn notify_event(&self, batch_id: &str, event: &Event) -> Result<EventOutcome, NfeError> {
        self.notify_event_with(batch_id, event, &CallOptions::default())
            .await
    }

    pub async fn notify_event_with(
        &self,
        batch_id: &str,
        event: &Event,
        options: &CallOptions,
    ) -> Result<EventOutcome, NfeError> {
        validate_batch_id("batch_id", batch_id)?;
        event.validate()?;
        let url = self.endpoint(Service::EventReception)?;

        let mut doc = Document::new(event_request(event, &self.tp_amb(), &self.c_uf()));
        self.sign(&mut doc, &Anchor::ElementId(event.identifier()))?;
        let signed_event = doc.root.to_xml().map_err(xml_error)?;
        let body = event_body(batch_id, &signed_event).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::EventReception, &url, &body, "retEnvEvento", options)
            .await?;

        let raw: EventBatchResponse = soap::decode(&ret, &["chNFePend"])?;
        let stamp = raw.ret_evento.clone().map(|receipt| {
            FiscalOperationResult::classify(
                "event_protocol",
                receipt.inf_evento.c_stat.clone(),
                receipt.inf_evento.x_motivo.clone(),
                receipt,
            )
        });
        let combined_document = ret
            .child("retEvento")
            .map(|ret_evento| combined::proc_evento(&doc.root, ret_evento))
            .transpose()
            .map_err(xml_error)?;
        let batch = FiscalOperationResult::classify("notify_event", raw.c_stat.clone(), raw.x_motivo.clone(), raw);

        Ok(EventOutcome {
            batch,
            event: stamp,
            signed_document: SignedArtifact::from_document(&doc)?,
            combined_document,
        })
    }
}
