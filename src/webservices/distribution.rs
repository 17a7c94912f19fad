use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::config::CallOptions;
use super::result::{DistributionStatus, FiscalOperationResult};
use super::soap::{self, NFE_NS};
use crate::core::{
    NfeError, Service, TaxpayerId, TransportError, ValidationError, normalize_nsu, validate_document_key,
    validate_taxpayer,
};
use crate::xml::{XmlError, XmlWriter};

/// Which documents to fetch from the national distribution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionFilter {
    /// Everything after this NSU (`distNSU/ultNSU`); `"0"` starts from the
    /// beginning.
    SinceSequence(String),
    /// Exactly this NSU (`consNSU/NSU`).
    SpecificSequence(String),
    /// The document with this access key (`consChNFe/chNFe`).
    DocumentKey(String),
}

impl DistributionFilter {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::SinceSequence(nsu) => normalize_nsu("since_sequence", nsu).map(drop),
            Self::SpecificSequence(nsu) => normalize_nsu("specific_sequence", nsu).map(drop),
            Self::DocumentKey(key) => validate_document_key("document_key", key),
        }
    }
}

/// Optional-field form of [`DistributionFilter`]. Converts only when exactly
/// one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionQuery {
    pub since_sequence: Option<String>,
    pub specific_sequence: Option<String>,
    pub document_key: Option<String>,
}

impl TryFrom<DistributionQuery> for DistributionFilter {
    type Error = ValidationError;

    fn try_from(query: DistributionQuery) -> Result<Self, Self::Error> {
        match (query.since_sequence, query.specific_sequence, query.document_key) {
            (Some(nsu), None, None) => Ok(Self::SinceSequence(nsu)),
            (None, Some(nsu), None) => Ok(Self::SpecificSequence(nsu)),
            (None, None, Some(key)) => Ok(Self::DocumentKey(key)),
            _ => Err(ValidationError::new(
                "distribution_filter",
                "exactly one of since_sequence, specific_sequence or document_key must be set",
            )),
        }
    }
}

/// `retDistDFeInt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    #[serde(rename = "@versao")]
    pub version: Option<String>,
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    pub c_stat: String,
    pub x_motivo: String,
    #[serde(default)]
    pub dh_resp: String,
    /// Last NSU in this batch; pass it back as the next `SinceSequence`.
    #[serde(rename = "ultNSU")]
    pub ult_nsu: Option<String>,
    /// Highest NSU currently available to the party.
    #[serde(rename = "maxNSU")]
    pub max_nsu: Option<String>,
    #[serde(rename = "loteDistDFeInt")]
    pub batch: Option<DistributionBatch>,
}

impl DistributionResponse {
    pub fn documents(&self) -> &[DistributedDocument] {
        self.batch
            .as_ref()
            .map(|b| b.documents.as_slice())
            .unwrap_or_default()
    }
}

/// `loteDistDFeInt`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBatch {
    #[serde(rename = "docZip", default)]
    pub documents: Vec<DistributedDocument>,
}

/// `docZip`: one gzip-compressed, base64-encoded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributedDocument {
    #[serde(rename = "@NSU")]
    pub nsu: String,
    /// Schema of the content, e.g. `resNFe_v1.01.xsd` or `procNFe_v4.00.xsd`.
    #[serde(rename = "@schema")]
    pub schema: String,
    #[serde(rename = "#text")]
    pub content_base64: String,
}

/// Upper bound on a single decompressed `docZip` payload.
pub const MAX_DECOMPRESSED_BYTES: u64 = 16 * 1024 * 1024;

impl DistributedDocument {
    /// Decode and gunzip the content into XML text.
    ///
    /// Output beyond [`MAX_DECOMPRESSED_BYTES`] is rejected as unparsable.
    pub fn decompress(&self) -> Result<String, TransportError> {
        self.decompress_within(MAX_DECOMPRESSED_BYTES)
    }

    fn decompress_within(&self, limit: u64) -> Result<String, TransportError> {
        let compressed = STANDARD.decode(self.content_base64.trim()).map_err(|e| {
            TransportError::UnparsableResponse(format!("docZip NSU {}: invalid base64: {e}", self.nsu))
        })?;
        let mut xml = String::new();
        GzDecoder::new(compressed.as_slice())
            .take(limit.saturating_add(1))
            .read_to_string(&mut xml)
            .map_err(|e| TransportError::UnparsableResponse(format!("docZip NSU {}: invalid gzip: {e}", self.nsu)))?;
        if xml.len() as u64 > limit {
            return Err(TransportError::UnparsableResponse(format!(
                "docZip NSU {}: content exceeds {limit} bytes",
                self.nsu
            )));
        }
        Ok(xml)
    }
}

pub(crate) fn distribution_body(
    tp_amb: &str,
    c_uf_autor: &str,
    party: &TaxpayerId,
    filter: &DistributionFilter,
) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("distDFeInt", &[("xmlns", NFE_NS), ("versao", "1.01")])?
        .text_element("tpAmb", tp_amb)?
        .text_element("cUFAutor", c_uf_autor)?
        .text_element(party.tag(), party.value())?;
    match filter {
        DistributionFilter::SinceSequence(nsu) => {
            let nsu = normalize_nsu("since_sequence", nsu).map_err(|e| XmlError::new(e.to_string()))?;
            w.start_element("distNSU")?
                .text_element("ultNSU", &nsu)?
                .end_element("distNSU")?;
        }
        DistributionFilter::SpecificSequence(nsu) => {
            let nsu = normalize_nsu("specific_sequence", nsu).map_err(|e| XmlError::new(e.to_string()))?;
            w.start_element("consNSU")?
                .text_element("NSU", &nsu)?
                .end_element("consNSU")?;
        }
        DistributionFilter::DocumentKey(key) => {
            w.start_element("consChNFe")?
                .text_element("chNFe", key)?
                .end_element("consChNFe")?;
        }
    }
    w.end_element("distDFeInt")?;
    w.into_string()
}

impl ProtocolClient {
    /// Fetch documents addressed to `party` from the national distribution
    /// service.
    pub async fn query_distribution(
        &self,
        party: &TaxpayerId,
        filter: &DistributionFilter,
    ) -> Result<FiscalOperationResult<DistributionStatus, DistributionResponse>, NfeError> {
        self.query_distribution_with(party, filter, &CallOptions::default())
            .await
    }

    pub async fn query_distribution_with(
        &self,
        party: &TaxpayerId,
        filter: &DistributionFilter,
        options: &CallOptions,
    ) -> Result<FiscalOperationResult<DistributionStatus, DistributionResponse>, NfeError> {
        validate_taxpayer("party", party)?;
        filter.validate()?;
        let url = self.endpoint(Service::Distribution)?;
        let body = distribution_body(&self.tp_amb(), &self.c_uf(), party, filter).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::Distribution, &url, &body, "retDistDFeInt", options)
            .await?;
        let raw: DistributionResponse = soap::decode(&ret, &["docZip"])?;
        Ok(FiscalOperationResult::classify(
            "query_distribution",
            raw.c_stat.clone(),
            raw.x_motivo.clone(),
            raw,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::xml::Document;

    const KEY: &str = "35240112345678000195550010000000011000000010";

    fn zipped(xml: &str) -> String {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(xml.as_bytes()).unwrap();
        STANDARD.encode(encoder.finish().unwrap())
    }

    #[test]
    fn query_needs_exactly_one_filter() {
        let both = DistributionQuery {
            since_sequence: Some("0".into()),
            document_key: Some(KEY.into()),
            ..Default::default()
        };
        assert_eq!(DistributionFilter::try_from(both).unwrap_err().field, "distribution_filter");
        assert!(DistributionFilter::try_from(DistributionQuery::default()).is_err());

        let one = DistributionQuery {
            specific_sequence: Some("15".into()),
            ..Default::default()
        };
        assert_eq!(
            DistributionFilter::try_from(one).unwrap(),
            DistributionFilter::SpecificSequence("15".into())
        );
    }

    #[test]
    fn filter_shape_is_validated() {
        assert!(DistributionFilter::SinceSequence("0".into()).validate().is_ok());
        assert!(DistributionFilter::SinceSequence("1234567890123456".into()).validate().is_err());
        assert_eq!(
            DistributionFilter::DocumentKey("123".into()).validate().unwrap_err().field,
            "document_key"
        );
    }

    #[test]
    fn request_bodies() {
        let party = TaxpayerId::Cnpj("12345678000195".into());
        assert_eq!(
            distribution_body("2", "35", &party, &DistributionFilter::SinceSequence("42".into())).unwrap(),
            r#"<distDFeInt xmlns="http://www.portalfiscal.inf.br/nfe" versao="1.01"><tpAmb>2</tpAmb><cUFAutor>35</cUFAutor><CNPJ>12345678000195</CNPJ><distNSU><ultNSU>000000000000042</ultNSU></distNSU></distDFeInt>"#
        );
        let by_nsu = distribution_body("2", "35", &party, &DistributionFilter::SpecificSequence("7".into())).unwrap();
        assert!(by_nsu.contains("<consNSU><NSU>000000000000007</NSU></consNSU>"));
        let by_key = distribution_body(
            "1",
            "31",
            &TaxpayerId::Cpf("12345678909".into()),
            &DistributionFilter::DocumentKey(KEY.into()),
        )
        .unwrap();
        assert!(by_key.contains(&format!("<CPF>12345678909</CPF><consChNFe><chNFe>{KEY}</chNFe></consChNFe>")));
    }

    #[test]
    fn decodes_and_decompresses_documents() {
        let summary = format!(r#"<resNFe xmlns="http://www.portalfiscal.inf.br/nfe" versao="1.01"><chNFe>{KEY}</chNFe></resNFe>"#);
        let doc = Document::parse(&format!(
            r#"<retDistDFeInt versao="1.01"><tpAmb>2</tpAmb><verAplic>1.5.11</verAplic><cStat>138</cStat><xMotivo>Documento localizado</xMotivo><dhResp>2024-01-15T10:00:00-03:00</dhResp><ultNSU>000000000000043</ultNSU><maxNSU>000000000000050</maxNSU><loteDistDFeInt><docZip NSU="000000000000043" schema="resNFe_v1.01.xsd">{}</docZip></loteDistDFeInt></retDistDFeInt>"#,
            zipped(&summary)
        ))
        .unwrap();
        let raw: DistributionResponse = soap::decode(&doc.root, &["docZip"]).unwrap();
        assert_eq!(raw.version.as_deref(), Some("1.01"));
        assert_eq!(raw.max_nsu.as_deref(), Some("000000000000050"));
        let documents = raw.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].schema, "resNFe_v1.01.xsd");
        assert_eq!(documents[0].decompress().unwrap(), summary);
    }

    #[test]
    fn no_documents_found() {
        let doc = Document::parse(
            r#"<retDistDFeInt versao="1.01"><tpAmb>2</tpAmb><verAplic>1.5.11</verAplic><cStat>137</cStat><xMotivo>Nenhum documento localizado</xMotivo><dhResp>2024-01-15T10:00:00-03:00</dhResp><ultNSU>000000000000043</ultNSU><maxNSU>000000000000043</maxNSU></retDistDFeInt>"#,
        )
        .unwrap();
        let raw: DistributionResponse = soap::decode(&doc.root, &["docZip"]).unwrap();
        assert!(raw.documents().is_empty());
    }

    #[test]
    fn corrupt_content_is_unparsable() {
        let document = DistributedDocument {
            nsu: "1".into(),
            schema: "resNFe_v1.01.xsd".into(),
            content_base64: "not base64!".into(),
        };
        assert!(matches!(document.decompress(), Err(TransportError::UnparsableResponse(_))));

        let document = DistributedDocument {
            content_base64: STANDARD.encode(b"plain text"),
            ..document
        };
        assert!(matches!(document.decompress(), Err(TransportError::UnparsableResponse(_))));
    }

    #[test]
    fn oversized_content_is_rejected() {
        let body = "a".repeat(4096);
        let document = DistributedDocument {
            nsu: "9".into(),
            schema: "procNFe_v4.00.xsd".into(),
            content_base64: zipped(&body),
        };
        assert_eq!(document.decompress_within(4096).unwrap(), body);
        let err = document.decompress_within(4095).unwrap_err();
        assert!(matches!(err, TransportError::UnparsableResponse(ref m) if m.contains("exceeds 4095 bytes")));
    }
}
