use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::config::CallOptions;
use super::result::{FiscalOperationResult, RegistrationStatus};
use super::soap::{self, NFE_NS};
use crate::core::{
    NfeError, Service, Uf, ValidationError, validate_cnpj, validate_cpf,
    validate_state_registration,
};
use crate::xml::{XmlError, XmlWriter};

/// Who to look up. Exactly one identifier per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationFilter {
    /// Inscrição Estadual (`IE`).
    StateRegistration(String),
    Cnpj(String),
    Cpf(String),
}

impl RegistrationFilter {
    fn tag(&self) -> &'static str {
        match self {
            Self::StateRegistration(_) => "IE",
            Self::Cnpj(_) => "CNPJ",
            Self::Cpf(_) => "CPF",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::StateRegistration(v) | Self::Cnpj(v) | Self::Cpf(v) => v,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::StateRegistration(ie) => validate_state_registration("state_registration", ie),
            Self::Cnpj(cnpj) => validate_cnpj("cnpj", cnpj),
            Self::Cpf(cpf) => validate_cpf("cpf", cpf),
        }
    }
}

/// Optional-field form of [`RegistrationFilter`], for callers holding
/// loosely typed input. Converts only when exactly one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationQuery {
    pub state_registration: Option<String>,
    pub cnpj: Option<String>,
    pub cpf: Option<String>,
}

impl TryFrom<RegistrationQuery> for RegistrationFilter {
    type Error = ValidationError;

    fn try_from(query: RegistrationQuery) -> Result<Self, Self::Error> {
        match (query.state_registration, query.cnpj, query.cpf) {
            (Some(ie), None, None) => Ok(Self::StateRegistration(ie)),
            (None, Some(cnpj), None) => Ok(Self::Cnpj(cnpj)),
            (None, None, Some(cpf)) => Ok(Self::Cpf(cpf)),
            _ => Err(ValidationError::new(
                "registration_filter",
                "exactly one of state_registration, cnpj or cpf must be set",
            )),
        }
    }
}

/// `retConsCad/infCons`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    #[serde(default)]
    pub ver_aplic: String,
    pub c_stat: String,
    pub x_motivo: String,
    #[serde(rename = "UF", default)]
    pub uf: String,
    #[serde(rename = "IE")]
    pub ie: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    #[serde(rename = "CPF")]
    pub cpf: Option<String>,
    #[serde(default)]
    pub dh_cons: String,
    #[serde(rename = "cUF", default)]
    pub c_uf: String,
    /// Matching registrations; empty unless the lookup found any.
    #[serde(default)]
    pub inf_cad: Vec<RegistrationRecord>,
}

/// `infCad`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    #[serde(rename = "IE")]
    pub ie: String,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    #[serde(rename = "CPF")]
    pub cpf: Option<String>,
    #[serde(rename = "UF")]
    pub uf: String,
    /// `0` not enabled, `1` enabled.
    pub c_sit: String,
    /// NF-e accreditation: `0` none, `1` accredited, `2` mandatory for all
    /// operations, `3` partially mandatory, `4` not informed.
    #[serde(default)]
    pub ind_cred_n_fe: String,
    #[serde(rename = "indCredCTe", default)]
    pub ind_cred_cte: String,
    pub x_nome: String,
    pub x_fant: Option<String>,
    pub x_reg_apur: Option<String>,
    #[serde(rename = "CNAE")]
    pub cnae: Option<String>,
    pub d_ini_ativ: Option<String>,
    pub d_ult_sit: Option<String>,
    pub d_baixa: Option<String>,
    #[serde(rename = "IEUnica")]
    pub ie_unica: Option<String>,
    #[serde(rename = "IEAtual")]
    pub ie_atual: Option<String>,
    #[serde(rename = "ender", alias = "Ender")]
    pub address: Option<Address>,
}

/// `infCad/ender`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub x_lgr: Option<String>,
    #[serde(alias = "Nro")]
    pub nro: Option<String>,
    pub x_cpl: Option<String>,
    pub x_bairro: Option<String>,
    pub c_mun: Option<String>,
    pub x_mun: Option<String>,
    #[serde(rename = "CEP")]
    pub cep: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetConsCad {
    inf_cons: RegistrationResponse,
}

pub(crate) fn registration_body(uf: Uf, filter: &RegistrationFilter) -> Result<String, XmlError> {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("ConsCad", &[("xmlns", NFE_NS), ("versao", "2.00")])?
        .start_element("infCons")?
        .text_element("xServ", "CONS-CAD")?
        .text_element("UF", uf.abbreviation())?
        .text_element(filter.tag(), filter.value())?
        .end_element("infCons")?
        .end_element("ConsCad")?;
    w.into_string()
}

impl ProtocolClient {
    /// Look up taxpayer registrations in the configured region.
    pub async fn registration_lookup(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<FiscalOperationResult<RegistrationStatus, RegistrationResponse>, NfeError> {
        self.registration_lookup_with(filter, &CallOptions::default()).await
    }

    pub async fn registration_lookup_with(
        &self,
        filter: &RegistrationFilter,
        options: &CallOptions,
    ) -> Result<FiscalOperationResult<RegistrationStatus, RegistrationResponse>, NfeError> {
        filter.validate()?;
        let url = self.endpoint(Service::RegistrationLookup)?;
        let body = registration_body(self.config().uf, filter).map_err(xml_error)?;
        let ret = self
            .round_trip(Service::RegistrationLookup, &url, &body, "retConsCad", options)
            .await?;
        let RetConsCad { inf_cons: raw } = soap::decode(&ret, &["infCad"])?;
        Ok(FiscalOperationResult::classify(
            "registration_lookup",
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
    fn query_needs_exactly_one_identifier() {
        let both = RegistrationQuery {
            cnpj: Some("12345678000195".into()),
            cpf: Some("12345678909".into()),
            ..Default::default()
        };
        let err = RegistrationFilter::try_from(both).unwrap_err();
        assert_eq!(err.field, "registration_filter");
        assert!(RegistrationFilter::try_from(RegistrationQuery::default()).is_err());

        let one = RegistrationQuery {
            state_registration: Some("ISENTO".into()),
            ..Default::default()
        };
        assert_eq!(
            RegistrationFilter::try_from(one).unwrap(),
            RegistrationFilter::StateRegistration("ISENTO".into())
        );
    }

    #[test]
    fn filter_shape_is_validated() {
        assert!(RegistrationFilter::Cnpj("123".into()).validate().is_err());
        assert!(RegistrationFilter::Cpf("12345678909".into()).validate().is_ok());
    }

    #[test]
    fn request_body() {
        let body = registration_body(Uf::MG, &RegistrationFilter::Cnpj("12345678000195".into())).unwrap();
        assert_eq!(
            body,
            r#"<ConsCad xmlns="http://www.portalfiscal.inf.br/nfe" versao="2.00"><infCons><xServ>CONS-CAD</xServ><UF>MG</UF><CNPJ>12345678000195</CNPJ></infCons></ConsCad>"#
        );
    }

    #[test]
    fn single_record_decodes_as_list() {
        let doc = Document::parse(
            r#"<retConsCad versao="2.00"><infCons><verAplic>MG4</verAplic><cStat>111</cStat><xMotivo>Consulta cadastro com uma ocorrencia</xMotivo><UF>MG</UF><CNPJ>12345678000195</CNPJ><dhCons>2024-01-15T10:00:00-03:00</dhCons><cUF>31</cUF><infCad><IE>0012345670089</IE><CNPJ>12345678000195</CNPJ><UF>MG</UF><cSit>1</cSit><indCredNFe>1</indCredNFe><indCredCTe>4</indCredCTe><xNome>EMPRESA TESTE LTDA</xNome><ender><xLgr>RUA A</xLgr><nro>10</nro><cMun>3106200</cMun><xMun>BELO HORIZONTE</xMun><CEP>30110000</CEP></ender></infCad></infCons></retConsCad>"#,
        )
        .unwrap();
        let RetConsCad { inf_cons } = soap::decode(&doc.root, &["infCad"]).unwrap();
        assert_eq!(inf_cons.inf_cad.len(), 1);
        let record = &inf_cons.inf_cad[0];
        assert_eq!(record.x_nome, "EMPRESA TESTE LTDA");
        assert_eq!(record.ind_cred_n_fe, "1");
        let address = record.address.as_ref().unwrap();
        assert_eq!(address.nro.as_deref(), Some("10"));
        assert_eq!(address.cep.as_deref(), Some("30110000"));
    }
}
