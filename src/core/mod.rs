//! Core NF-e types, the error taxonomy and pre-network input checks.
//!
//! Everything here is pure data: regions with their IBGE codes, environments,
//! web service identities, taxpayer identifiers and the errors every other
//! module returns.

mod error;
mod service;
mod types;
mod uf;
mod validation;

pub use error::*;
pub use service::*;
pub use types::*;
pub use uf::*;
pub use validation::*;
