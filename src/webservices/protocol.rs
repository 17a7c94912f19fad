use serde::{Deserialize, Serialize};

use super::authorization::ProtocolStamp;
use super::client::{ProtocolClient, xml_error};
use super::config::CallOptions;
use super::event::EventReceipt;
use super::result::{FiscalOperationResult, ProtocolQueryStatus};
use super::soap::{self, NFE_NS};
use crate::core::{NfeError, Service, validate_document_key};
use crate::xml::{XmlError, XmlWriter};

/// `retConsSitNFe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolQueryResponse {
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
    #[serde(rename = "chNFe", default)]
    pub ch_nfe: String,
    /// Authorization or denial stamp.
    #[serde(rename = "protNFe")]
    pub prot_nfe: Option<ProtocolStamp>,
    /// Events registered against the document, oldest first.
    #[serde(rename = "procEventoNFe", default)]
    pub events: Vec<EventProcess>,
}

/// `procEventoNFe` as listed by the protocol query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProcess {
    #[serde(rename = "@versao")]
    pub version: Option<String>,
    #[serde(rename = "retEvento")]
    pub ret_evento: EventReceipt,
}

pub(crate) fn protocol_body(tp_amb: &str, document_key: &str) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("consSitNFe", &[("xmlns", NFE_NS), ("versao", "4.00")])?
        .text_element("tpAmb", tp_amb)?
        .text_element("xServ", "CONSULTAR")?
        .text_element("chNFe", document_key)?
        .end_element("consSitNFe")?;
    w.into_string()
}

impl ProtocolClient {
    /// Current state of a document by its access key.
    pub async fn query_protocol(
        &self,
        document_key: &str,
    ) -> Result<FiscalOperationResult<ProtocolQueryStatus, ProtocolQueryResponse>, NfeError> {
        self.query_protocol_with(document_key, &CallOptions::default())
            .await
    }

    pub async fn query_protocol_with(
        &self,
        document_key: &str,
        options: &CallOptions,
    ) -> Result<FiscalOperationResult<ProtocolQueryStatus, ProtocolQueryResponse>, NfeError> {
        validate_document_key("document_key", document_key)?;
        let url = self.endpoint(Service::ProtocolQuery)?;
        let body = protocol_body(&self.tp_amb(), document_key).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::ProtocolQuery, &url, &body, "retConsSitNFe", options)
            .await?;
        let raw: ProtocolQueryResponse = soap::decode(&ret, &["procEventoNFe", "chNFePend"])?;
        Ok(FiscalOperationResult::classify(
            "query_protocol",
            raw.c_stat.clone(),
            raw.x_motivo.clone(),
            raw,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Document;

    const KEY: &str = "35240112345678000195550010000000011000000010";

    #[test]
    fn request_body() {
        assert_eq!(
            protocol_body("1", KEY).unwrap(),
            format!(
                r#"<consSitNFe xmlns="http://www.portalfiscal.inf.br/nfe" versao="4.00"><tpAmb>1</tpAmb><xServ>CONSULTAR</xServ><chNFe>{KEY}</chNFe></consSitNFe>"#
            )
        );
    }

    #[test]
    fn single_event_decodes_as_list() {
        let doc = Document::parse(&format!(
            r#"<retConsSitNFe versao="4.00"><tpAmb>2</tpAmb><verAplic>SP</verAplic><cStat>101</cStat><xMotivo>Cancelamento de NF-e homologado</xMotivo><cUF>35</cUF><dhRecbto>2024-01-16T09:00:00-03:00</dhRecbto><chNFe>{KEY}</chNFe><protNFe versao="4.00"><infProt><tpAmb>2</tpAmb><verAplic>SP</verAplic><chNFe>{KEY}</chNFe><dhRecbto>2024-01-15T10:00:01-03:00</dhRecbto><nProt>135240000000001</nProt><cStat>100</cStat><xMotivo>Autorizado o uso da NF-e</xMotivo></infProt></protNFe><procEventoNFe versao="1.00"><evento versao="1.00"><infEvento Id="ID110111{KEY}01"/></evento><retEvento versao="1.00"><infEvento><tpAmb>2</tpAmb><verAplic>SP</verAplic><cOrgao>35</cOrgao><cStat>135</cStat><xMotivo>Evento registrado e vinculado a NF-e</xMotivo><tpEvento>110111</tpEvento></infEvento></retEvento></procEventoNFe></retConsSitNFe>"#
        ))
        .unwrap();
        let raw: ProtocolQueryResponse = soap::decode(&doc.root, &["procEventoNFe", "chNFePend"]).unwrap();
        assert_eq!(raw.c_stat, "101");
        assert_eq!(raw.prot_nfe.unwrap().inf_prot.c_stat, "100");
        assert_eq!(raw.events.len(), 1);
        assert_eq!(raw.events[0].ret_evento.inf_evento.tp_evento.as_deref(), Some("110111"));
    }

    #[test]
    fn denied_document_without_events() {
        let doc = Document::parse(&format!(
            r#"<retConsSitNFe versao="4.00"><tpAmb>2</tpAmb><verAplic>SP</verAplic><cStat>110</cStat><xMotivo>Uso Denegado</xMotivo><cUF>35</cUF><dhRecbto>2024-01-16T09:00:00-03:00</dhRecbto><chNFe>{KEY}</chNFe></retConsSitNFe>"#
        ))
        .unwrap();
        let raw: ProtocolQueryResponse = soap::decode(&doc.root, &["procEventoNFe"]).unwrap();
        let result: FiscalOperationResult<ProtocolQueryStatus, _> =
            FiscalOperationResult::classify("test", raw.c_stat.clone(), raw.x_motivo.clone(), raw);
        assert_eq!(result.status, ProtocolQueryStatus::Denied);
        assert!(result.raw.events.is_empty());
    }
}
