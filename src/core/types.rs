use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SEFAZ environment (`tpAmb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// 1: Production. Documents carry legal effect.
    Production,
    /// 2: Homologation (staging). No legal effect.
    Homologation,
}

impl Environment {
    /// `tpAmb` code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Production => 1,
            Self::Homologation => 2,
        }
    }

    /// Parse from `tpAmb` code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Production),
            2 => Some(Self::Homologation),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Homologation => f.write_str("homologation"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "production" | "producao" => Ok(Self::Production),
            "2" | "homologation" | "homologacao" | "staging" => Ok(Self::Homologation),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Taxpayer identification: company (CNPJ, 14 digits) or individual (CPF, 11 digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxpayerId {
    Cnpj(String),
    Cpf(String),
}

impl TaxpayerId {
    /// XML element name carrying this identifier.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cnpj(_) => "CNPJ",
            Self::Cpf(_) => "CPF",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Cnpj(v) | Self::Cpf(v) => v,
        }
    }
}

/// Fiscal document model (`mod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentModel {
    /// 55: NF-e.
    Nfe,
    /// 65: NFC-e (consumer invoice).
    Nfce,
}

impl DocumentModel {
    pub fn code(&self) -> u8 {
        match self {
            Self::Nfe => 55,
            Self::Nfce => 65,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            55 => Some(Self::Nfe),
            65 => Some(Self::Nfce),
            _ => None,
        }
    }
}
