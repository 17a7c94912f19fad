//! Client configuration.
//!
//! Region, environment and contingency pick the endpoint; the timeout bounds
//! each round trip. Construct explicitly or load from `NFE_*` environment
//! variables.

use std::fmt;
use std::time::Duration;

use crate::core::{Environment, Uf};
use crate::certificate::ExpiryPolicy;

/// Per-call deadline when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Configuration for a [`ProtocolClient`](super::ProtocolClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Issuer's region. Also supplies `cUF` in request bodies.
    pub uf: Uf,
    pub environment: Environment,
    /// Route to the national contingency authorities.
    pub contingency: bool,
    pub timeout: Duration,
    /// Replaces the resolved URL (proxies, test doubles). Resolution still runs
    /// first, so unsupported combinations fail the same way.
    pub endpoint_override: Option<String>,
    pub expiry_policy: ExpiryPolicy,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("uf", &self.uf)
            .field("environment", &self.environment)
            .field("contingency", &self.contingency)
            .field("timeout_ms", &self.timeout.as_millis())
            .field("endpoint_override", &self.endpoint_override)
            .field("expiry_policy", &self.expiry_policy)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(uf: Uf, environment: Environment) -> Self {
        Self {
            uf,
            environment,
            contingency: false,
            timeout: DEFAULT_TIMEOUT,
            endpoint_override: None,
            expiry_policy: ExpiryPolicy::default(),
        }
    }

    pub fn with_contingency(mut self, contingency: bool) -> Self {
        self.contingency = contingency;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `NFE_UF` (required, two-letter abbreviation)
    /// - `NFE_ENVIRONMENT` (required: `production`, `homologation`, `1` or `2`)
    /// - `NFE_CONTINGENCY` (default: `false`)
    /// - `NFE_TIMEOUT_MS` (default: 15000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let uf = required("NFE_UF")?
            .parse::<Uf>()
            .map_err(|e| ConfigError::Invalid("NFE_UF", e))?;
        let environment = required("NFE_ENVIRONMENT")?
            .parse::<Environment>()
            .map_err(|e| ConfigError::Invalid("NFE_ENVIRONMENT", e))?;

        let contingency = match lookup("NFE_CONTINGENCY") {
            None => false,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" | "" => false,
                other => {
                    return Err(ConfigError::Invalid(
                        "NFE_CONTINGENCY",
                        format!("expected true or false, got '{other}'"),
                    ));
                }
            },
        };

        let timeout = match lookup("NFE_TIMEOUT_MS") {
            None => DEFAULT_TIMEOUT,
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .ok_or_else(|| {
                    ConfigError::Invalid("NFE_TIMEOUT_MS", format!("expected milliseconds, got '{v}'"))
                })?,
        };

        Ok(Self {
            contingency,
            timeout,
            ..Self::new(uf, environment)
        })
    }
}

/// Per-call overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallOptions {
    /// Deadline for this call only; falls back to [`ClientConfig::timeout`].
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Trusted roots of the national fiscal PKI, in PEM.
#[derive(Clone)]
pub struct CaBundle {
    pem: Vec<u8>,
    count: usize,
}

impl fmt::Debug for CaBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaBundle").field("certificates", &self.count).finish()
    }
}

impl CaBundle {
    /// Parse and validate the bundle once. Fails on empty or malformed input.
    pub fn from_pem(pem: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let pem = pem.into();
        let certs = reqwest::Certificate::from_pem_bundle(&pem)
            .map_err(|e| ConfigError::Invalid("ca_bundle", e.to_string()))?;
        if certs.is_empty() {
            return Err(ConfigError::Invalid("ca_bundle", "no certificates found".into()));
        }
        Ok(Self {
            count: certs.len(),
            pem,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn certificates(&self) -> Result<Vec<reqwest::Certificate>, reqwest::Error> {
        reqwest::Certificate::from_pem_bundle(&self.pem)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
}
