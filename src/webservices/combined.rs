//! Processed documents: the signed payload joined with the authority's
//! protocol stamp, the form kept for audit and sent to recipients.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::soap::NFE_NS;
use crate::xml::{Document, Element, XmlError};

/// `nfeProc` or `procEventoNFe` XML, with declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedDocument(String);

impl CombinedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CombinedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `nfeProc` 4.00: signed `NFe` followed by `protNFe`.
pub(crate) fn nfe_proc(nfe: &Element, prot_nfe: &Element) -> Result<CombinedDocument, XmlError> {
    let root = Element::new("nfeProc")
        .with_attr("xmlns", NFE_NS)
        .with_attr("versao", "4.00")
        .with_child(nfe.clone())
        .with_child(prot_nfe.clone());
    Document::new(root).to_xml().map(CombinedDocument)
}

/// `procEventoNFe` 1.00: signed `evento` followed by `retEvento`.
///
/// The event's own `xmlns` is dropped; it repeats the default declared on
/// `procEventoNFe`.
pub(crate) fn proc_evento(evento: &Element, ret_evento: &Element) -> Result<CombinedDocument, XmlError> {
    let mut evento = evento.clone();
    if evento.attr("xmlns") == Some(NFE_NS) {
        evento.remove_attr("xmlns");
    }
    let root = Element::new("procEventoNFe")
        .with_attr("xmlns", NFE_NS)
        .with_attr("versao", "1.00")
        .with_child(evento)
        .with_child(ret_evento.clone());
    Document::new(root).to_xml().map(CombinedDocument)
}
