//! # notafiscal
//!
//! Brazilian electronic invoice (NF-e) plumbing: A1 certificate handling,
//! XML-DSig signing, SEFAZ endpoint routing and the web service client.
//!
//! The fiscal document itself is out of scope. Build and schema-validate the
//! `NFe` XML elsewhere; this crate signs it, routes it and talks to the
//! authority.
//!
//! ## Quick Start
//!
//! ```rust
//! use notafiscal::core::*;
//!
//! let uf: Uf = "MG".parse().unwrap();
//! assert_eq!(uf.code(), 31);
//! assert!(validate_document_key("chave", "31240112345678000195550010000000011000000010").is_ok());
//! assert_eq!(normalize_nsu("nsu", "42").unwrap(), "000000000000042");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | States, environments, services, errors, input checks |
//! | `routing` | Endpoint resolution, including contingency authorities |
//! | `certificate` | PKCS#12 decoding, PEM derivation, certificate fields |
//! | `xmldsig` | XML tree, canonicalization, enveloped signatures |
//! | `webservices` | SOAP client for the seven SEFAZ operations |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "routing")]
pub mod routing;

#[cfg(feature = "certificate")]
pub mod certificate;

#[cfg(feature = "xmldsig")]
pub mod xml;

#[cfg(feature = "xmldsig")]
pub mod sign;

#[cfg(feature = "webservices")]
pub mod webservices;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
