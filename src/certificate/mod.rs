//! A1 digital certificates (PKCS#12 / PFX).
//!
//! [`Credential`] wraps the container bytes and derives a cached [`PemPair`]
//! on first use. [`CertificateFields`] exposes subject, issuer, validity and
//! serial of the selected certificate.
//!
//! OpenSSL 3 only reads legacy RC2-40 encrypted containers when the legacy
//! provider is loaded by the host application.

mod credential;
mod fields;

pub use credential::{Credential, ExpiryPolicy, PemPair};
pub use fields::CertificateFields;
