use serde::{Deserialize, Serialize};

use super::client::{ProtocolClient, xml_error};
use super::config::CallOptions;
use super::result::{FiscalOperationResult, InvalidationStatus};
use super::soap::{self, NFE_NS};
use crate::core::{DocumentModel, NfeError, Service, ValidationError, validate_cnpj, validate_text};
use crate::sign::{Anchor, SignedArtifact};
use crate::xml::{Document, Element};

const MAX_NUMBER: u32 = 999_999_999;

/// A range of document numbers that will never be issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    /// Either two digits (`24`) or a year in 2000..=2099.
    pub year: u16,
    /// Issuer CNPJ, 14 digits.
    pub cnpj: String,
    pub model: DocumentModel,
    /// 0..=999
    pub series: u16,
    pub start: u32,
    pub end: u32,
    /// 15 to 255 characters.
    pub justification: String,
}

impl NumberRange {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.year < 100 || (2000..=2099).contains(&self.year)) {
            return Err(ValidationError::new(
                "year",
                format!("must be two digits or within 2000..=2099, got {}", self.year),
            ));
        }
        validate_cnpj("cnpj", &self.cnpj)?;
        if self.series > 999 {
            return Err(ValidationError::new(
                "series",
                format!("must be at most 999, got {}", self.series),
            ));
        }
        for (field, n) in [("start", self.start), ("end", self.end)] {
            if !(1..=MAX_NUMBER).contains(&n) {
                return Err(ValidationError::new(
                    field,
                    format!("must be within 1..={MAX_NUMBER}, got {n}"),
                ));
            }
        }
        if self.start > self.end {
            return Err(ValidationError::new(
                "end",
                format!("must not be below start ({} > {})", self.start, self.end),
            ));
        }
        validate_text("justification", &self.justification, 15, 255)
    }

    /// `ano`: the last two digits of the year.
    pub fn year_code(&self) -> String {
        format!("{:02}", self.year % 100)
    }

    /// `infInut` `Id`: `ID` followed by cUF, year, CNPJ, model, series and
    /// both range ends, zero-padded to 41 digits.
    pub fn identifier(&self, c_uf: u8) -> String {
        format!(
            "ID{c_uf:02}{}{}{:02}{:03}{:09}{:09}",
            self.year_code(),
            self.cnpj,
            self.model.code(),
            self.series,
            self.start,
            self.end,
        )
    }
}

/// `retInutNFe/infInut`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidationResponse {
    #[serde(rename = "@Id")]
    pub id: Option<String>,
    #[serde(default)]
    pub tp_amb: String,
    #[serde(default)]
    pub ver_aplic: String,
    pub c_stat: String,
    pub x_motivo: String,
    #[serde(rename = "cUF", default)]
    pub c_uf: String,
    pub ano: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    #[serde(rename = "mod")]
    pub model: Option<String>,
    pub serie: Option<String>,
    #[serde(rename = "nNFIni")]
    pub n_nf_ini: Option<String>,
    #[serde(rename = "nNFFin")]
    pub n_nf_fin: Option<String>,
    #[serde(default)]
    pub dh_recbto: String,
    pub n_prot: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetInutNFe {
    inf_inut: InvalidationResponse,
}

/// Outcome of [`ProtocolClient::invalidate_number_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invalidation {
    pub result: FiscalOperationResult<InvalidationStatus, InvalidationResponse>,
    pub signed_document: SignedArtifact,
}

/// Unsigned `inutNFe` request.
pub(crate) fn invalidation_request(range: &NumberRange, tp_amb: &str, c_uf: u8) -> Element {
    let text = |name: &str, value: String| Element::new(name).with_text(value);
    let inf_inut = Element::new("infInut")
        .with_attr("Id", range.identifier(c_uf))
        .with_child(text("tpAmb", tp_amb.to_string()))
        .with_child(text("xServ", "INUTILIZAR".to_string()))
        .with_child(text("cUF", c_uf.to_string()))
        .with_child(text("ano", range.year_code()))
        .with_child(text("CNPJ", range.cnpj.clone()))
        .with_child(text("mod", range.model.code().to_string()))
        .with_child(text("serie", range.series.to_string()))
        .with_child(text("nNFIni", range.start.to_string()))
        .with_child(text("nNFFin", range.end.to_string()))
        .with_child(text("xJust", range.justification.trim().to_string()));
    Element::new("inutNFe")
        .with_attr("xmlns", NFE_NS)
        .with_attr("versao", "4.00")
        .with_child(inf_inut)
}

impl ProtocolClient {
    /// Declare a range of numbers unused so the sequence may skip them.
    pub async fn invalidate_number_range(&self, range: &NumberRange) -> Result<Invalidation, NfeError> {
        self.invalidate_number_range_with(range, &CallOptions::default())
            .await
    }

    pub async fn invalidate_number_range_with(
        &self,
        range: &NumberRange,
        options: &CallOptions,
    ) -> Result<Invalidation, NfeError> {
        range.validate()?;
        let url = self.endpoint(Service::NumberInvalidation)?;

        let c_uf = self.config().uf.code();
        let mut doc = Document::new(invalidation_request(range, &self.tp_amb(), c_uf));
        self.sign(&mut doc, &Anchor::ElementId(range.identifier(c_uf)))?;
        let body = doc.root.to_xml().map_err(xml_error)?;

        let ret = self
            .round_trip(Service::NumberInvalidation, &url, &body, "retInutNFe", options)
            .await?;
        let RetInutNFe { inf_inut: raw } = soap::decode(&ret, &[])?;
        Ok(Invalidation {
            result: FiscalOperationResult::classify(
                "invalidate_number_range",
                raw.c_stat.clone(),
                raw.x_motivo.clone(),
                raw,
            ),
            signed_document: SignedArtifact::from_document(&doc)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> NumberRange {
        NumberRange {
            year: 2024,
            cnpj: "12345678000195".into(),
            model: DocumentModel::Nfe,
            series: 1,
            start: 10,
            end: 15,
            justification: "Falha no sistema emissor".into(),
        }
    }

    #[test]
    fn identifier_layout() {
        let id = range().identifier(35);
        assert_eq!(id, "ID35241234567800019555001000000010000000015");
        assert_eq!(id.len(), 43);
        assert!(id[2..].bytes().all(|b| b.is_ascii_digit()));

        let two_digit = NumberRange { year: 7, ..range() };
        assert_eq!(two_digit.year_code(), "07");
    }

    #[test]
    fn validation() {
        assert!(range().validate().is_ok());
        let cases = [
            (NumberRange { year: 1999, ..range() }, "year"),
            (NumberRange { cnpj: "123".into(), ..range() }, "cnpj"),
            (NumberRange { series: 1000, ..range() }, "series"),
            (NumberRange { start: 0, ..range() }, "start"),
            (NumberRange { end: 1_000_000_000, ..range() }, "end"),
            (NumberRange { start: 20, end: 10, ..range() }, "end"),
            (NumberRange { justification: "curta".into(), ..range() }, "justification"),
        ];
        for (range, field) in cases {
            assert_eq!(range.validate().unwrap_err().field, field);
        }
    }

    #[test]
    fn request_values_are_unpadded() {
        let xml = invalidation_request(&range(), "2", 35).to_xml().unwrap();
        assert_eq!(
            xml,
            r#"<inutNFe xmlns="http://www.portalfiscal.inf.br/nfe" versao="4.00"><infInut Id="ID35241234567800019555001000000010000000015"><tpAmb>2</tpAmb><xServ>INUTILIZAR</xServ><cUF>35</cUF><ano>24</ano><CNPJ>12345678000195</CNPJ><mod>55</mod><serie>1</serie><nNFIni>10</nNFIni><nNFFin>15</nNFFin><xJust>Falha no sistema emissor</xJust></infInut></inutNFe>"#
        );
    }

    #[test]
    fn decodes_response() {
        let doc = Document::parse(
            r#"<retInutNFe versao="4.00"><infInut Id="ID135240000000002"><tpAmb>2</tpAmb><verAplic>SP</verAplic><cStat>102</cStat><xMotivo>Inutilizacao de numero homologado</xMotivo><cUF>35</cUF><ano>24</ano><CNPJ>12345678000195</CNPJ><mod>55</mod><serie>1</serie><nNFIni>10</nNFIni><nNFFin>15</nNFFin><dhRecbto>2024-01-15T10:00:00-03:00</dhRecbto><nProt>135240000000002</nProt></infInut></retInutNFe>"#,
        )
        .unwrap();
        let RetInutNFe { inf_inut } = soap::decode(&doc.root, &[]).unwrap();
        assert_eq!(inf_inut.c_stat, "102");
        assert_eq!(inf_inut.model.as_deref(), Some("55"));
        assert_eq!(inf_inut.n_nf_fin.as_deref(), Some("15"));
        assert_eq!(inf_inut.n_prot.as_deref(), Some("135240000000002"));
    }
}
