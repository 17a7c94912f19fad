use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::combined::{self, CombinedDocument};
use super::config::CallOptions;
use super::result::{AuthorizationStatus, BatchStatus, FiscalOperationResult};
use super::soap::{self, NFE_NS};
use crate::core::{NfeError, Service, SigningError, ValidationError, validate_batch_id};
use crate::sign::{Anchor, SignedArtifact};
use crate::xml::{Document, XmlError, XmlWriter};

/// `retEnviNFe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    pub c_stat: String,
    pub x_motivo: String,
    #[serde(rename = "cUF", default)]
    pub c_uf: String,
    #[serde(default)]
    pub dh_recbto: String,
    /// Receipt of an asynchronous batch. Synchronous submissions normally
    /// answer with `prot_n_fe` instead.
    pub inf_rec: Option<Receipt>,
    #[serde(rename = "protNFe")]
    pub prot_nfe: Option<ProtocolStamp>,
}

/// `infRec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub n_rec: String,
    pub t_med: Option<String>,
}

/// `protNFe`: the authority's verdict on one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolStamp {
    #[serde(rename = "@versao", default)]
    pub version: String,
    #[serde(rename = "infProt")]
    pub inf_prot: ProtocolInfo,
}

/// `protNFe/infProt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInfo {
    #[serde(rename = "@Id")]
    pub id: Option<String>,
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    #[serde(rename = "chNFe", default)]
    pub ch_nfe: String,
    #[serde(default)]
    pub dh_recbto: String,
    /// Authorization protocol number; absent on rejection.
    pub n_prot: Option<String>,
    /// Digest of the document as the authority received it.
    pub dig_val: Option<String>,
    pub c_stat: String,
    pub x_motivo: String,
}

/// Outcome of [`ProtocolClient::submit_for_authorization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    /// Batch-level status (`retEnviNFe/cStat`).
    pub batch: FiscalOperationResult<BatchStatus, AuthorizationResponse>,
    /// Document-level stamp, present once the batch reached a terminal state.
    pub protocol: Option<FiscalOperationResult<AuthorizationStatus, ProtocolStamp>>,
    /// The document exactly as it was sent.
    pub signed_document: SignedArtifact,
    /// `nfeProc`, built whenever a stamp came back.
    pub combined_document: Option<CombinedDocument>,
}

impl Authorization {
    pub fn is_authorized(&self) -> bool {
        self.protocol
            .as_ref()
            .is_some_and(|p| p.status == AuthorizationStatus::Authorized)
    }
}

pub(crate) fn authorization_body(batch_id: &str, signed_nfe: &str) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("enviNFe", &[("xmlns", NFE_NS), ("versao", "4.00")])?
        .text_element("idLote", batch_id)?
        .text_element("indSinc", "1")?
        .raw(signed_nfe)?
        .end_element("enviNFe")?;
    w.into_string()
}

/// `Id` of the `infNFe` element, the signature reference.
fn document_id(doc: &Document) -> Result<String, ValidationError> {
    let inf_nfe = doc
        .root
        .find("infNFe")
        .ok_or_else(|| ValidationError::new("document", "missing infNFe element"))?;
    inf_nfe
        .attr("Id")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::new("document", "infNFe has no Id attribute"))
}

impl ProtocolClient {
    /// Sign an NF-e and submit it for synchronous authorization.
    ///
    /// `document` is the unsigned `NFe` XML. Its schema is not checked here;
    /// only the `infNFe` `Id` is read.
    pub async fn submit_for_authorization(&self, batch_id: &str, document: &str) -> Result<Authorization, NfeError> {
        self.submit_for_authorization_with(batch_id, document, &CallOptions::default())
            .await
    }

    pub async fn submit_for_authorization_with(
        &self,
        batch_id: &str,
        document: &str,
        options: &CallOptions,
    ) -> Result<Authorization, NfeError> {
        validate_batch_id("batch_id", batch_id)?;
        let mut doc = Document::parse(document).map_err(|e| SigningError::MalformedXml(e.to_string()))?;
        let id = document_id(&doc)?;
        let url = self.endpoint(Service::Authorization)?;

        self.sign(&mut doc, &Anchor::ElementId(id))?;
        let signed_nfe = doc.root.to_xml().map_err(xml_error)?;
        let body = authorization_body(batch_id, &signed_nfe).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::Authorization, &url, &body, "retEnviNFe", options)
            .await?;

        let raw: AuthorizationResponse = soap::decode(&ret, &[])?;
        let protocol = raw.prot_nfe.clone().map(|stamp| {
            FiscalOperationResult::classify(
                "authorization_protocol",
                stamp.inf_prot.c_stat.clone(),
                stamp.inf_prot.x_motivo.clone(),
                stamp,
            )
        });
        let combined_document = ret
            .child("protNFe")
            .map(|prot| combined::nfe_proc(&doc.root, prot))
            .transpose()
            .map_err(xml_error)?;
        let batch = FiscalOperationResult::classify(
            "submit_for_authorization",
            raw.c_stat.clone(),
            raw.x_motivo.clone(),
            raw,
        );

        Ok(Authorization {
            batch,
            protocol,
            signed_document: SignedArtifact::from_document(&doc)?,
            combined_document,
        })
    }
}
