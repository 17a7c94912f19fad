//! SOAP 1.2 envelope in, typed structure out.
//!
//! Responses are mapped to a `serde_json::Value` first: prefixes dropped,
//! attributes under `@name`, the text of an attributed element under
//! `#text`, leaves as strings. Repeating elements collapse to a single object
//! when only one is present, so each operation names the tags that must
//! always decode as sequences.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::{Service, TransportError};
use crate::xml::{Document, Element, XmlError, XmlWriter, local_part};

pub const NFE_NS: &str = "http://www.portalfiscal.inf.br/nfe";
const SOAP_NS: &str = "http://www.w3.org/2003/05/soap-envelope";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Wrap an operation body in the envelope and `nfeDadosMsg` of `service`.
pub(crate) fn envelope(service: Service, body: &str) -> Result<String, XmlError> {
    let mut w = XmlWriter::with_declaration()?;
    w.start_element_with_attrs(
        "soap:Envelope",
        &[("xmlns:xsi", XSI_NS), ("xmlns:xsd", XSD_NS), ("xmlns:soap", SOAP_NS)],
    )?
    .start_element("soap:Body")?;

    let ns = service.wsdl_namespace();
    match service {
        // The distribution service names its operation element explicitly.
        Service::Distribution => {
            w.start_element_with_attrs("nfeDistDFeInteresse", &[("xmlns", ns)])?
                .start_element("nfeDadosMsg")?
                .raw(body)?
                .end_element("nfeDadosMsg")?
                .end_element("nfeDistDFeInteresse")?;
        }
        _ => {
            w.start_element_with_attrs("nfeDadosMsg", &[("xmlns", ns)])?
                .raw(body)?
                .end_element("nfeDadosMsg")?;
        }
    }

    w.end_element("soap:Body")?.end_element("soap:Envelope")?;
    w.into_string()
}

fn unparsable(message: impl Into<String>) -> TransportError {
    TransportError::UnparsableResponse(message.into())
}

/// Locate the operation's result element (`retConsStatServ`, ...) inside the
/// SOAP body.
pub(crate) fn result_element(response: &str, tag: &str) -> Result<Element, TransportError> {
    if response.trim().is_empty() {
        return Err(unparsable("empty response body"));
    }
    let doc = Document::parse(response).map_err(|e| unparsable(format!("malformed XML: {e}")))?;
    if doc.root.local_name() != "Envelope" {
        return Err(unparsable(format!("expected a SOAP envelope, got <{}>", doc.root.name)));
    }
    let body = doc
        .root
        .child("Body")
        .ok_or_else(|| unparsable("SOAP envelope without Body"))?;
    if let Some(fault) = body.find("Fault") {
        return Err(unparsable(format!("SOAP fault: {}", fault_reason(fault))));
    }
    body.find(tag)
        .cloned()
        .ok_or_else(|| unparsable(format!("missing <{tag}> in response")))
}

fn fault_reason(fault: &Element) -> String {
    // SOAP 1.2 carries Reason/Text, SOAP 1.1 faultstring.
    fault
        .find("Reason")
        .and_then(|r| r.find("Text"))
        .or_else(|| fault.find("faultstring"))
        .map(|e| e.text().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "no reason given".to_string())
}

/// Deserialize a result element into its typed form.
pub(crate) fn decode<T: DeserializeOwned>(
    element: &Element,
    array_tags: &[&str],
) -> Result<T, TransportError> {
    serde_json::from_value(to_value(element, array_tags))
        .map_err(|e| unparsable(format!("unexpected <{}> content: {e}", element.local_name())))
}

pub(crate) fn to_value(element: &Element, array_tags: &[&str]) -> Value {
    let attributes: Vec<_> = element
        .attributes
        .iter()
        .filter(|(k, _)| k != "xmlns" && !k.starts_with("xmlns:"))
        .collect();
    let has_children = element.elements().next().is_some();

    if !has_children && attributes.is_empty() {
        return Value::String(element.text());
    }

    let mut map = Map::new();
    for (k, v) in attributes {
        map.insert(format!("@{}", local_part(k)), Value::String(v.clone()));
    }
    if !has_children {
        let text = element.text();
        if !text.is_empty() {
            map.insert("#text".to_string(), Value::String(text));
        }
        return Value::Object(map);
    }

    for child in element.elements() {
        let key = child.local_name();
        let value = to_value(child, array_tags);
        match map.get_mut(key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if array_tags.contains(&key) => {
                map.insert(key.to_string(), Value::Array(vec![value]));
            }
            None => {
                map.insert(key.to_string(), value);
            }
        }
    }
    Value::Object(map)
}
