//! Enveloped XML-DSig signatures as the SEFAZ schemas require them.
//!
//! Canonical XML 1.0 (inclusive, without comments), SHA-1 reference digest,
//! RSA-SHA1 signature value and the signer's certificate in `KeyInfo`.
//!
//! ```ignore
//! use notafiscal::sign::{Anchor, sign_xml};
//!
//! let signed = sign_xml(&nfe_xml, &credential, &Anchor::ElementId(id))?;
//! ```

mod signer;

pub use signer::*;
