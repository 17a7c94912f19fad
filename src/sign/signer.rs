use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use openssl::hash::{MessageDigest, hash};
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;
use openssl::x509::X509;
use serde::{Deserialize, Serialize};

use crate::certificate::{Credential, PemPair};
use crate::core::{NfeError, SigningError};
use crate::xml::c14n;
use crate::xml::{Document, Element, Node, XPath};

pub const DSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";
pub const C14N: &str = "http://www.w3.org/TR/2001/REC-xml-c14n-20010315";
pub const RSA_SHA1: &str = "http://www.w3.org/2000/09/xmldsig#rsa-sha1";
pub const SHA1: &str = "http://www.w3.org/2000/09/xmldsig#sha1";
pub const ENVELOPED_SIGNATURE: &str = "http://www.w3.org/2000/09/xmldsig#enveloped-signature";

/// Where the signature goes and which element it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Sign the first element matching the expression; the `Signature` is
    /// inserted right after it. The element must carry an `Id`.
    XPath(String),
    /// Sign the element whose `Id` equals this value; the `Signature` is
    /// appended as the last child of the root.
    ElementId(String),
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XPath(expr) => f.write_str(expr),
            Self::ElementId(id) => write!(f, "//*[@Id='{id}']"),
        }
    }
}

/// XML text with an embedded `Signature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedArtifact(String);

impl SignedArtifact {
    pub(crate) fn from_document(doc: &Document) -> Result<Self, SigningError> {
        doc.to_xml()
            .map(Self)
            .map_err(|e| SigningError::MalformedXml(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sign `document` with the credential's key.
///
/// Canonical XML 1.0, SHA-1 digest and RSA-SHA1, the suite required by the
/// SEFAZ schemas.
pub fn sign_xml(document: &str, credential: &Credential, anchor: &Anchor) -> Result<SignedArtifact, NfeError> {
    let pem = credential.to_pem()?;
    let signer = XmlSigner::from_pem(&pem)?;
    Ok(signer.sign(document, anchor)?)
}

/// Signing key and certificate, parsed once.
pub struct XmlSigner {
    key: PKey<Private>,
    cert_base64: String,
}

impl fmt::Debug for XmlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlSigner")
            .field("key", &"[REDACTED]")
            .field("cert_base64_len", &self.cert_base64.len())
            .finish()
    }
}

impl XmlSigner {
    pub fn from_pem(pem: &PemPair) -> Result<Self, SigningError> {
        let key = PKey::private_key_from_pem(pem.key.as_bytes()).map_err(crypto)?;
        let cert = X509::from_pem(pem.cert.as_bytes()).map_err(crypto)?;
        let der = cert.to_der().map_err(crypto)?;
        Ok(Self {
            key,
            cert_base64: STANDARD.encode(der),
        })
    }

    pub fn sign(&self, document: &str, anchor: &Anchor) -> Result<SignedArtifact, SigningError> {
        let mut doc = Document::parse(document).map_err(|e| SigningError::MalformedXml(e.to_string()))?;
        self.sign_document(&mut doc, anchor)?;
        SignedArtifact::from_document(&doc)
    }

    /// Insert a `Signature` into an already parsed document.
    pub fn sign_document(&self, doc: &mut Document, anchor: &Anchor) -> Result<(), SigningError> {
        let not_found = || SigningError::ReferenceNotFound {
            anchor: anchor.to_string(),
        };

        let target_path = match anchor {
            Anchor::ElementId(id) => find_by_id(&doc.root, id).ok_or_else(not_found)?,
            Anchor::XPath(expr) => XPath::parse(expr)
                .map_err(|_| not_found())?
                .find_first(&doc.root)
                .ok_or_else(not_found)?,
        };
        let target = doc.root.at_path(&target_path).ok_or_else(not_found)?;
        let reference_id = id_of(target).ok_or_else(not_found)?.to_string();

        let digest = reference_digest(&doc.root, &target_path, None)?;

        // ElementId and a root anchor append to the root; otherwise insert after the anchor.
        let (parent_path, index) = match (anchor, target_path.split_last()) {
            (Anchor::XPath(_), Some((last, parent))) => (parent.to_vec(), last + 1),
            _ => (Vec::new(), doc.root.children.len()),
        };

        let signed_info = signed_info(&reference_id, &digest);
        let mut scope = c14n::namespaces_at(&doc.root, &parent_path);
        let parent = doc.root.at_path_mut(&parent_path).ok_or_else(not_found)?;
        for (p, uri) in c14n::declared_namespaces(parent) {
            scope.insert(p.to_string(), uri.to_string());
        }
        scope.insert(String::new(), DSIG_NS.to_string());
        let canonical = c14n::canonicalize(&signed_info, &scope);
        let signature_value = self.rsa_sha1(canonical.as_bytes())?;

        let signature = Element::new("Signature")
            .with_attr("xmlns", DSIG_NS)
            .with_child(signed_info)
            .with_child(Element::new("SignatureValue").with_text(signature_value))
            .with_child(
                Element::new("KeyInfo").with_child(
                    Element::new("X509Data")
                        .with_child(Element::new("X509Certificate").with_text(self.cert_base64.clone())),
                ),
            );
        parent.children.insert(index, Node::Element(signature));

        tracing::debug!(reference = %reference_id, anchor = %anchor, "signed XML element");
        Ok(())
    }

    fn rsa_sha1(&self, data: &[u8]) -> Result<String, SigningError> {
        let mut signer = Signer::new(MessageDigest::sha1(), &self.key).map_err(crypto)?;
        signer.update(data).map_err(crypto)?;
        let sig = signer.sign_to_vec().map_err(crypto)?;
        Ok(STANDARD.encode(sig))
    }
}

/// Base64 SHA-1 of the canonical element at `path`.
///
/// `enveloping` is the absolute path of the `Signature` the digest belongs
/// to. The enveloped-signature transform removes that element, and only that
/// one, when it lies inside the target. Other signatures stay in the digest.
/// Signing passes `None`: the new signature is not in the tree yet.
pub fn reference_digest(
    root: &Element,
    path: &[usize],
    enveloping: Option<&[usize]>,
) -> Result<String, SigningError> {
    let target = root.at_path(path).ok_or_else(|| SigningError::ReferenceNotFound {
        anchor: format!("{path:?}"),
    })?;
    let inherited = c14n::namespaces_at(root, path);
    let mut transformed = target.clone();
    if let Some(inner) = enveloping.and_then(|sig| sig.strip_prefix(path)) {
        remove_signature(&mut transformed, inner);
    }
    let canonical = c14n::canonicalize(&transformed, &inherited);
    let digest = hash(MessageDigest::sha1(), canonical.as_bytes()).map_err(crypto)?;
    Ok(STANDARD.encode(digest))
}

fn crypto(e: openssl::error::ErrorStack) -> SigningError {
    SigningError::CryptoFailure(e.to_string())
}

fn id_of(element: &Element) -> Option<&str> {
    element
        .attr("Id")
        .or_else(|| element.attr("ID"))
        .or_else(|| element.attr("id"))
}

fn find_by_id(root: &Element, id: &str) -> Option<Vec<usize>> {
    fn walk(element: &Element, id: &str, path: &mut Vec<usize>) -> bool {
        if id_of(element) == Some(id) {
            return true;
        }
        for (i, child) in element.children.iter().enumerate() {
            if let Node::Element(e) = child {
                path.push(i);
                if walk(e, id, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }
    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Enveloped-signature transform: drop the element at `path` if it is a
/// `Signature`.
fn remove_signature(element: &mut Element, path: &[usize]) {
    let Some((&last, parent)) = path.split_last() else {
        return;
    };
    let Some(parent) = element.at_path_mut(parent) else {
        return;
    };
    if matches!(parent.children.get(last), Some(Node::Element(e)) if e.local_name() == "Signature") {
        parent.children.remove(last);
    }
}

fn algorithm(name: &str, uri: &str) -> Element {
    Element::new(name).with_attr("Algorithm", uri)
}

fn signed_info(reference_id: &str, digest: &str) -> Element {
    Element::new("SignedInfo")
        .with_child(algorithm("CanonicalizationMethod", C14N))
        .with_child(algorithm("SignatureMethod", RSA_SHA1))
        .with_child(
            Element::new("Reference")
                .with_attr("URI", format!("#{reference_id}"))
                .with_child(
                    Element::new("Transforms")
                        .with_child(algorithm("Transform", ENVELOPED_SIGNATURE))
                        .with_child(algorithm("Transform", C14N)),
                )
                .with_child(algorithm("DigestMethod", SHA1))
                .with_child(Element::new("DigestValue").with_text(digest)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use openssl::asn1::Asn1Time;
    use openssl::bn::BigNum;
    use openssl::sign::Verifier;
    use openssl::rsa::Rsa;
    use openssl::x509::X509NameBuilder;

    fn pem_pair() -> PemPair {
        let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "Signer").unwrap();
        let name = name.build();
        let mut builder = X509::builder().unwrap();
        builder.set_version(2).unwrap();
        builder
            .set_serial_number(&BigNum::from_u32(1).unwrap().to_asn1_integer().unwrap())
            .unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
        builder.set_not_after(&Asn1Time::days_from_now(365).unwrap()).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();
        PemPair {
            cert: String::from_utf8(builder.build().to_pem().unwrap()).unwrap(),
            key: String::from_utf8(pkey.private_key_to_pem_pkcs8().unwrap()).unwrap(),
        }
    }

    const NFE: &str = r#"<NFe xmlns="http://www.portalfiscal.inf.br/nfe"><infNFe Id="NFe35240112345678000195550010000000011000000010" versao="4.00"><ide><cUF>35</cUF></ide></infNFe></NFe>"#;
    const ID: &str = "NFe35240112345678000195550010000000011000000010";

    fn digest_value(xml: &str) -> String {
        Document::parse(xml).unwrap().root.find("DigestValue").unwrap().text()
    }

    #[test]
    fn element_id_appends_to_root() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let signed = signer.sign(NFE, &Anchor::ElementId(ID.into())).unwrap();
        let doc = Document::parse(signed.as_str()).unwrap();
        let names: Vec<_> = doc.root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["infNFe", "Signature"]);
        let sig = doc.root.child("Signature").unwrap();
        assert_eq!(sig.attr("xmlns"), Some(DSIG_NS));
        let reference = sig.find("Reference").unwrap();
        assert_eq!(reference.attr("URI"), Some(format!("#{ID}").as_str()));
        assert!(!sig.find("X509Certificate").unwrap().text().is_empty());
    }

    #[test]
    fn xpath_and_element_id_digests_agree() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let by_id = signer.sign(NFE, &Anchor::ElementId(ID.into())).unwrap();
        let by_xpath = signer.sign(NFE, &Anchor::XPath("/NFe/infNFe".into())).unwrap();
        assert_eq!(digest_value(by_id.as_str()), digest_value(by_xpath.as_str()));
    }

    #[test]
    fn xpath_inserts_after_anchor() {
        let xml = r#"<root><a Id="x"/><b/></root>"#;
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let signed = signer.sign(xml, &Anchor::XPath("//a".into())).unwrap();
        let doc = Document::parse(signed.as_str()).unwrap();
        let names: Vec<_> = doc.root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "Signature", "b"]);
    }

    #[test]
    fn signature_verifies_and_digest_matches() {
        let pem = pem_pair();
        let signer = XmlSigner::from_pem(&pem).unwrap();
        let signed = signer.sign(NFE, &Anchor::ElementId(ID.into())).unwrap();
        let doc = Document::parse(signed.as_str()).unwrap();

        assert_eq!(reference_digest(&doc.root, &[0], Some(&[1])).unwrap(), digest_value(signed.as_str()));

        let signature = doc.root.child("Signature").unwrap();
        let mut scope = c14n::namespaces_at(&doc.root, &[1]);
        scope.insert(String::new(), DSIG_NS.to_string());
        let canonical = c14n::canonicalize(signature.child("SignedInfo").unwrap(), &scope);
        let value = STANDARD
            .decode(signature.child("SignatureValue").unwrap().text())
            .unwrap();
        let cert = X509::from_pem(pem.cert.as_bytes()).unwrap();
        let public = cert.public_key().unwrap();
        let mut verifier = Verifier::new(MessageDigest::sha1(), &public).unwrap();
        verifier.update(canonical.as_bytes()).unwrap();
        assert!(verifier.verify(&value).unwrap());
    }

    #[test]
    fn deterministic() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let a = signer.sign(NFE, &Anchor::ElementId(ID.into())).unwrap();
        let b = signer.sign(NFE, &Anchor::ElementId(ID.into())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn enveloped_transform_removes_only_its_own_signature() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let once = signer.sign(r#"<a Id="r"><b/></a>"#, &Anchor::ElementId("r".into())).unwrap();
        let twice = signer.sign(once.as_str(), &Anchor::ElementId("r".into())).unwrap();
        let doc = Document::parse(twice.as_str()).unwrap();
        let digests: Vec<_> = doc
            .root
            .elements()
            .filter(|e| e.name == "Signature")
            .map(|s| s.find("DigestValue").unwrap().text())
            .collect();
        assert_eq!(digests.len(), 2);
        // The first signature is part of what the second one signs.
        assert_ne!(digests[0], digests[1]);

        // Each digest is reproduced by removing only its own signature.
        let first = Document::parse(once.as_str()).unwrap();
        assert_eq!(reference_digest(&first.root, &[], Some(&[1])).unwrap(), digests[0]);
        assert_eq!(reference_digest(&doc.root, &[], Some(&[2])).unwrap(), digests[1]);
        // A signature added later inside the target is not removed for the first one.
        assert_ne!(reference_digest(&doc.root, &[], Some(&[1])).unwrap(), digests[0]);
    }

    #[test]
    fn missing_reference() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let err = signer.sign(NFE, &Anchor::ElementId("NFe0".into())).unwrap_err();
        assert_eq!(
            err,
            SigningError::ReferenceNotFound {
                anchor: "//*[@Id='NFe0']".into()
            }
        );
        let err = signer.sign(NFE, &Anchor::XPath("/NFe/ide".into())).unwrap_err();
        assert!(matches!(err, SigningError::ReferenceNotFound { .. }));
        // Matches, but has no Id to reference.
        let err = signer.sign(NFE, &Anchor::XPath("/NFe".into())).unwrap_err();
        assert!(matches!(err, SigningError::ReferenceNotFound { .. }));
    }

    #[test]
    fn malformed_document() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let err = signer.sign("<NFe>", &Anchor::ElementId(ID.into())).unwrap_err();
        assert!(matches!(err, SigningError::MalformedXml(_)));
    }

    #[test]
    fn round_trip_is_stable() {
        let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
        let signed = signer
            .sign(&format!(r#"<?xml version="1.0" encoding="UTF-8"?>{NFE}"#), &Anchor::ElementId(ID.into()))
            .unwrap();
        let reparsed = Document::parse(signed.as_str()).unwrap().to_xml().unwrap();
        assert_eq!(reparsed, signed.as_str());
    }
}
