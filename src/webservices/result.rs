use serde::{Deserialize, Serialize};

/// Classification of an authority status code (`cStat`).
///
/// `from_code` is total: codes without a dedicated variant become the
/// `Other` variant. `code` returns `None` for `Other`.
pub trait StatusCode: Copy {
    fn from_code(code: &str) -> Self;
    fn code(&self) -> Option<&'static str>;

    fn is_other(&self) -> bool {
        self.code().is_none()
    }
}

/// Outcome of one authority response: the raw code, its classification, the
/// authority's message (`xMotivo`) and the decoded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalOperationResult<S, R> {
    pub status_code: String,
    pub status: S,
    pub description: String,
    pub raw: R,
}

impl<S: StatusCode, R> FiscalOperationResult<S, R> {
    pub(crate) fn classify(
        operation: &'static str,
        status_code: String,
        description: String,
        raw: R,
    ) -> Self {
        let status = S::from_code(&status_code);
        if status.is_other() {
            tracing::warn!(operation, c_stat = %status_code, reason = %description, "unclassified status code");
        } else {
            tracing::info!(operation, c_stat = %status_code, "authority responded");
        }
        Self {
            status_code,
            status,
            description,
            raw,
        }
    }
}

/// Status service (`retConsStatServ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// 107
    Accepting,
    /// 108
    TemporarilyHalted,
    /// 109
    Halted,
    Other,
}

impl StatusCode for ServiceStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "107" => Self::Accepting,
            "108" => Self::TemporarilyHalted,
            "109" => Self::Halted,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Accepting => Some("107"),
            Self::TemporarilyHalted => Some("108"),
            Self::Halted => Some("109"),
            Self::Other => None,
        }
    }
}

/// Registration lookup (`retConsCad`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// 111
    SingleMatch,
    /// 112
    MultipleMatches,
    Other,
}

impl StatusCode for RegistrationStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "111" => Self::SingleMatch,
            "112" => Self::MultipleMatches,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::SingleMatch => Some("111"),
            Self::MultipleMatches => Some("112"),
            Self::Other => None,
        }
    }
}

/// Authorization batch (`retEnviNFe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchStatus {
    /// 103
    Received,
    /// 104
    Processed,
    /// 105
    Processing,
    /// 106
    BatchNotFound,
    Other,
}

impl StatusCode for BatchStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "103" => Self::Received,
            "104" => Self::Processed,
            "105" => Self::Processing,
            "106" => Self::BatchNotFound,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Received => Some("103"),
            Self::Processed => Some("104"),
            Self::Processing => Some("105"),
            Self::BatchNotFound => Some("106"),
            Self::Other => None,
        }
    }
}

/// Per-document protocol stamp (`protNFe/infProt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    /// 100
    Authorized,
    Other,
}

impl StatusCode for AuthorizationStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "100" => Self::Authorized,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Authorized => Some("100"),
            Self::Other => None,
        }
    }
}

/// Number range invalidation (`retInutNFe/infInut`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationStatus {
    /// 102
    Approved,
    Other,
}

impl StatusCode for InvalidationStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "102" => Self::Approved,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Approved => Some("102"),
            Self::Other => None,
        }
    }
}

/// Event batch (`retEnvEvento`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventBatchStatus {
    /// 128
    Processed,
    Other,
}

impl StatusCode for EventBatchStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "128" => Self::Processed,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Processed => Some("128"),
            Self::Other => None,
        }
    }
}

/// Per-event protocol stamp (`retEvento/infEvento`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// 135, registered and linked to the document.
    Linked,
    /// 136, registered but not linked to the document.
    NotLinked,
    Other,
}

impl StatusCode for EventStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "135" => Self::Linked,
            "136" => Self::NotLinked,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Linked => Some("135"),
            Self::NotLinked => Some("136"),
            Self::Other => None,
        }
    }
}

/// Protocol query (`retConsSitNFe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolQueryStatus {
    /// 100
    Authorized,
    /// 101
    CancellationApproved,
    /// 110
    Denied,
    Other,
}

impl StatusCode for ProtocolQueryStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "100" => Self::Authorized,
            "101" => Self::CancellationApproved,
            "110" => Self::Denied,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::Authorized => Some("100"),
            Self::CancellationApproved => Some("101"),
            Self::Denied => Some("110"),
            Self::Other => None,
        }
    }
}

/// Distribution query (`retDistDFeInt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionStatus {
    /// 137
    NoDocumentFound,
    /// 138
    DocumentFound,
    Other,
}

impl StatusCode for DistributionStatus {
    fn from_code(code: &str) -> Self {
        match code {
            "137" => Self::NoDocumentFound,
            "138" => Self::DocumentFound,
            _ => Self::Other,
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            Self::NoDocumentFound => Some("137"),
            Self::DocumentFound => Some("138"),
            Self::Other => None,
        }
    }
}
