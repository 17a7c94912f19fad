use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{Environment, Service, Uf};

/// Top-level error for every fallible operation in the crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NfeError {
    /// The PKCS#12 container or its certificate is unusable.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The document could not be signed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// No web service exists for the requested combination.
    #[error(transparent)]
    EndpointNotFound(#[from] EndpointNotFoundError),

    /// The round trip to the authority failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Caller input rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors decoding a PKCS#12 credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CredentialError {
    /// The bytes are not a DER-encoded PKCS#12 structure.
    #[error("invalid PKCS#12 container: {0}")]
    InvalidContainer(String),

    /// MAC verification failed.
    #[error("invalid PKCS#12 passphrase")]
    InvalidPassphrase,

    #[error("no private key found in PKCS#12 container")]
    NoPrivateKey,

    #[error("no certificate found in PKCS#12 container")]
    NoCertificate,

    /// Rejected by [`ExpiryPolicy::Reject`](crate::certificate::ExpiryPolicy).
    #[error("certificate expired at {not_after}")]
    Expired { not_after: DateTime<Utc> },

    /// The derived PEM (or a CA bundle) could not be parsed.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),
}

/// Errors producing an XML-DSig signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SigningError {
    /// The anchor resolved to no element (or to one without an `Id`).
    #[error("cannot sign: nothing matches {anchor}")]
    ReferenceNotFound { anchor: String },

    /// Digest or RSA primitive failure, or an unusable private key.
    #[error("signature computation failed: {0}")]
    CryptoFailure(String),

    /// The input document is not well-formed XML.
    #[error("malformed XML: {0}")]
    MalformedXml(String),
}

/// No endpoint is published for this combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no web service for {service} in {uf} ({environment}, contingency: {contingency})"
)]
pub struct EndpointNotFoundError {
    pub uf: Uf,
    pub service: Service,
    pub environment: Environment,
    pub contingency: bool,
}

/// Network, HTTP and envelope decoding failures.
///
/// Safe to retry for read-only operations. Submissions and events must first
/// confirm the authority did not already receive the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The per-call deadline elapsed.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Non-2xx HTTP status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Empty body, malformed XML, SOAP fault or missing result element.
    #[error("unparsable response: {0}")]
    UnparsableResponse(String),

    /// Connection, TLS handshake or I/O failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// The HTTP client could not be built (identity or CA bundle rejected).
    #[error("transport setup failed: {0}")]
    Setup(String),
}

/// A single caller-input error with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field name as the caller passed it (e.g. "document_key").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
