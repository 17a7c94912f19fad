use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::config::CallOptions;
use super::result::{FiscalOperationResult, ServiceStatus};
use super::soap::{self, NFE_NS};
use crate::core::{NfeError, Service};
use crate::xml::{XmlError, XmlWriter};

/// `retConsStatServ`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
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
    /// Average response time in seconds.
    pub t_med: Option<String>,
    /// Expected return of a halted service.
    pub dh_retorno: Option<String>,
    pub x_obs: Option<String>,
}

pub(crate) fn status_body(tp_amb: &str, c_uf: &str) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("consStatServ", &[("xmlns", NFE_NS), ("versao", "4.00")])?
        .text_element("tpAmb", tp_amb)?
        .text_element("cUF", c_uf)?
        .text_element("xServ", "STATUS")?
        .end_element("consStatServ")?;
    w.into_string()
}

impl ProtocolClient {
    /// Availability of the region's authorization service.
    pub async fn status_check(&self) -> Result<FiscalOperationResult<ServiceStatus, StatusResponse>, NfeError> {
        self.status_check_with(&CallOptions::default()).await
    }

    pub async fn status_check_with(
        &self,
        options: &CallOptions,
    ) -> Result<FiscalOperationResult<ServiceStatus, StatusResponse>, NfeError> {
        let url = self.endpoint(Service::StatusCheck)?;
        let body = status_body(&self.tp_amb(), &self.c_uf()).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::StatusCheck, &url, &body, "retConsStatServ", options)
            .await?;
        let raw: StatusResponse = soap::decode(&ret, &[])?;
        Ok(FiscalOperationResult::classify(
            "status_check",
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

    #[test]
    fn request_body() {
        assert_eq!(
            status_body("2", "35").unwrap(),
            r#"<consStatServ xmlns="http://www.portalfiscal.inf.br/nfe" versao="4.00"><tpAmb>2</tpAmb><cUF>35</cUF><xServ>STATUS</xServ></consStatServ>"#
        );
    }

    #[test]
    fn decodes_response() {
        let doc = Document::parse(
            r#"<retConsStatServ versao="4.00"><tpAmb>2</tpAmb><verAplic>SP_NFE_PL009_V4</verAplic><cStat>107</cStat><xMotivo>Servico em Operacao</xMotivo><cUF>35</cUF><dhRecbto>2024-01-15T10:00:00-03:00</dhRecbto><tMed>1</tMed></retConsStatServ>"#,
        )
        .unwrap();
        let raw: StatusResponse = soap::decode(&doc.root, &[]).unwrap();
        assert_eq!(raw.c_stat, "107");
        assert_eq!(raw.c_uf, "35");
        assert_eq!(raw.t_med.as_deref(), Some("1"));
        assert!(raw.x_obs.is_none());
    }
}
