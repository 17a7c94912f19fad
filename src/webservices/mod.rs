//! SEFAZ web service client.
//!
//! [`ProtocolClient`] performs one SOAP 1.2 round trip per operation over
//! mutually authenticated TLS:
//!
//! | Operation | Service | Result |
//! |-----------|---------|--------|
//! | [`status_check`](ProtocolClient::status_check) | NfeStatusServico | [`ServiceStatus`] |
//! | [`registration_lookup`](ProtocolClient::registration_lookup) | NfeConsultaCadastro | [`RegistrationStatus`] |
//! | [`submit_for_authorization`](ProtocolClient::submit_for_authorization) | NFeAutorizacao | [`BatchStatus`] + [`AuthorizationStatus`] |
//! | [`invalidate_number_range`](ProtocolClient::invalidate_number_range) | NfeInutilizacao | [`InvalidationStatus`] |
//! | [`notify_event`](ProtocolClient::notify_event) | RecepcaoEvento | [`EventBatchStatus`] + [`EventStatus`] |
//! | [`query_protocol`](ProtocolClient::query_protocol) | NfeConsultaProtocolo | [`ProtocolQueryStatus`] |
//! | [`query_distribution`](ProtocolClient::query_distribution) | NFeDistribuicaoDFe | [`DistributionStatus`] |
//!
//! Authority status codes never become errors. Codes without a dedicated
//! variant classify as `Other`, with the code and message kept in
//! [`FiscalOperationResult`].
//!
//! ```rust,ignore
//! use notafiscal::certificate::Credential;
//! use notafiscal::core::{Environment, Uf};
//! use notafiscal::webservices::{CaBundle, ClientConfig, ProtocolClient, ServiceStatus};
//!
//! let config = ClientConfig::new(Uf::SP, Environment::Homologation);
//! let credential = Credential::load(std::fs::read("a1.pfx")?, "secret");
//! let ca = CaBundle::from_pem(std::fs::read("icp-brasil.pem")?)?;
//! let client = ProtocolClient::new(config, credential, &ca)?;
//!
//! let status = client.status_check().await?;
//! if status.status == ServiceStatus::Accepting {
//!     // submit
//! }
//! ```

mod authorization;
mod client;
mod combined;
mod config;
mod distribution;
mod event;
mod invalidation;
mod protocol;
mod registration;
mod result;
mod soap;
mod status;
mod transport;

pub use authorization::{Authorization, AuthorizationResponse, ProtocolInfo, ProtocolStamp, Receipt};
pub use client::ProtocolClient;
pub use combined::CombinedDocument;
pub use config::{CaBundle, CallOptions, ClientConfig, ConfigError, DEFAULT_TIMEOUT};
pub use distribution::{
    DistributedDocument, DistributionBatch, DistributionFilter, DistributionQuery, DistributionResponse,
    MAX_DECOMPRESSED_BYTES,
};
pub use event::{
    CORRECTION_CONDITIONS, Event, EventBatchResponse, EventKind, EventOutcome, EventReceipt, EventReceiptInfo,
};
pub use invalidation::{Invalidation, InvalidationResponse, NumberRange};
pub use protocol::{EventProcess, ProtocolQueryResponse};
pub use registration::{Address, RegistrationFilter, RegistrationQuery, RegistrationRecord, RegistrationResponse};
pub use result::{
    AuthorizationStatus, BatchStatus, DistributionStatus, EventBatchStatus, EventStatus, FiscalOperationResult,
    InvalidationStatus, ProtocolQueryStatus, RegistrationStatus, ServiceStatus, StatusCode,
};
pub use soap::NFE_NS;
pub use status::StatusResponse;
pub use transport::SOAP_CONTENT_TYPE;
