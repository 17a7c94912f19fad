use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Uf;

/// An authorizing tax authority that publishes web services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// A state running its own SEFAZ infrastructure.
    Own(Uf),
    /// SVAN, Sefaz Virtual do Ambiente Nacional.
    Svan,
    /// SVRS, Sefaz Virtual do Rio Grande do Sul.
    Svrs,
    /// SVC-AN, contingency authority of the national environment.
    SvcAn,
    /// SVC-RS, contingency authority hosted by Rio Grande do Sul.
    SvcRs,
    /// Ambiente Nacional: distribution and national event reception.
    An,
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Own(uf) => write!(f, "SEFAZ-{uf}"),
            Self::Svan => f.write_str("SVAN"),
            Self::Svrs => f.write_str("SVRS"),
            Self::SvcAn => f.write_str("SVC-AN"),
            Self::SvcRs => f.write_str("SVC-RS"),
            Self::An => f.write_str("AN"),
        }
    }
}
