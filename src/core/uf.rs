use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brazilian federative unit (state or Federal District).
///
/// Each unit has a two-letter abbreviation and a two-digit IBGE code. The code
/// is what travels on the wire (`cUF`, `cOrgao`, `cUFAutor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Uf {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl Uf {
    /// Every unit, in abbreviation order.
    pub const ALL: [Uf; 27] = [
        Uf::AC,
        Uf::AL,
        Uf::AP,
        Uf::AM,
        Uf::BA,
        Uf::CE,
        Uf::DF,
        Uf::ES,
        Uf::GO,
        Uf::MA,
        Uf::MT,
        Uf::MS,
        Uf::MG,
        Uf::PA,
        Uf::PB,
        Uf::PR,
        Uf::PE,
        Uf::PI,
        Uf::RJ,
        Uf::RN,
        Uf::RS,
        Uf::RO,
        Uf::RR,
        Uf::SC,
        Uf::SP,
        Uf::SE,
        Uf::TO,
    ];

    /// IBGE numeric code.
    pub fn code(&self) -> u8 {
        match self {
            Self::AC => 12,
            Self::AL => 27,
            Self::AP => 16,
            Self::AM => 13,
            Self::BA => 29,
            Self::CE => 23,
            Self::DF => 53,
            Self::ES => 32,
            Self::GO => 52,
            Self::MA => 21,
            Self::MT => 51,
            Self::MS => 50,
            Self::MG => 31,
            Self::PA => 15,
            Self::PB => 25,
            Self::PR => 41,
            Self::PE => 26,
            Self::PI => 22,
            Self::RJ => 33,
            Self::RN => 24,
            Self::RS => 43,
            Self::RO => 11,
            Self::RR => 14,
            Self::SC => 42,
            Self::SP => 35,
            Self::SE => 28,
            Self::TO => 17,
        }
    }

    /// Parse from IBGE numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|uf| uf.code() == code)
    }

    /// Two-letter abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AP => "AP",
            Self::AM => "AM",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MT => "MT",
            Self::MS => "MS",
            Self::MG => "MG",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PR => "PR",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RS => "RS",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::SC => "SC",
            Self::SP => "SP",
            Self::SE => "SE",
            Self::TO => "TO",
        }
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Uf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|uf| uf.abbreviation() == upper)
            .ok_or_else(|| format!("unknown UF: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for uf in Uf::ALL {
            assert_eq!(Uf::from_code(uf.code()), Some(uf));
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(Uf::SP.code(), 35);
        assert_eq!(Uf::MG.code(), 31);
        assert_eq!(Uf::from_code(53), Some(Uf::DF));
        assert_eq!(Uf::from_code(91), None);
    }

    #[test]
    fn parse_abbreviation() {
        assert_eq!("rs".parse::<Uf>().unwrap(), Uf::RS);
        assert_eq!(" PI ".parse::<Uf>().unwrap(), Uf::PI);
        assert!("XX".parse::<Uf>().is_err());
    }
}
