use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use openssl::asn1::{Asn1Time, Asn1TimeRef};
use openssl::x509::{X509, X509NameRef};
use serde::{Deserialize, Serialize};

use crate::core::CredentialError;

/// Read-only view of an X.509 certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateFields {
    /// Subject attributes by long name (`commonName`, `organizationName`, ...).
    /// Repeated attributes keep the last value.
    pub subject: BTreeMap<String, String>,
    pub issuer: BTreeMap<String, String>,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// Lowercase hexadecimal.
    pub serial_number: String,
    /// e.g. `sha256WithRSAEncryption`.
    pub signature_algorithm: String,
}

impl CertificateFields {
    /// Parse the first certificate of a PEM block.
    pub fn from_pem(pem: &str) -> Result<Self, CredentialError> {
        let cert = X509::from_pem(pem.as_bytes()).map_err(invalid)?;
        Self::from_x509(&cert)
    }

    pub fn from_x509(cert: &X509) -> Result<Self, CredentialError> {
        let serial_number = cert
            .serial_number()
            .to_bn()
            .and_then(|bn| bn.to_hex_str().map(|s| s.to_ascii_lowercase()))
            .map_err(invalid)?;
        let signature_algorithm = cert
            .signature_algorithm()
            .object()
            .nid()
            .long_name()
            .map(str::to_string)
            .unwrap_or_else(|_| cert.signature_algorithm().object().to_string());

        Ok(Self {
            subject: name_map(cert.subject_name()),
            issuer: name_map(cert.issuer_name()),
            not_before: to_datetime(cert.not_before())?,
            not_after: to_datetime(cert.not_after())?,
            serial_number,
            signature_algorithm,
        })
    }

    pub fn common_name(&self) -> Option<&str> {
        self.subject.get("commonName").map(String::as_str)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.not_after < now
    }
}

fn invalid(e: openssl::error::ErrorStack) -> CredentialError {
    CredentialError::InvalidCertificate(e.to_string())
}

fn name_map(name: &X509NameRef) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for entry in name.entries() {
        let key = entry
            .object()
            .nid()
            .long_name()
            .map(str::to_string)
            .unwrap_or_else(|_| entry.object().to_string());
        // Entries that are not valid strings are skipped.
        if let Ok(value) = entry.data().as_utf8() {
            map.insert(key, value.to_string());
        }
    }
    map
}

fn to_datetime(time: &Asn1TimeRef) -> Result<DateTime<Utc>, CredentialError> {
    let epoch = Asn1Time::from_unix(0).map_err(invalid)?;
    let diff = epoch.diff(time).map_err(invalid)?;
    let secs = i64::from(diff.days) * 86_400 + i64::from(diff.secs);
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| CredentialError::InvalidCertificate(format!("time out of range: {time}")))
}
