use chrono::Utc;

use super::config::{CaBundle, CallOptions, ClientConfig};
use super::soap;
use super::transport::Transport;
use crate::certificate::Credential;
use crate::core::{EndpointNotFoundError, NfeError, Service, SigningError};
use crate::routing;
use crate::sign::{Anchor, XmlSigner};
use crate::xml::{Document, Element, XmlError};

/// SEFAZ web service client for one issuer, region and environment.
///
/// Holds the credential, the signer built from it and an HTTPS client with
/// the credential as TLS identity. All of them are derived once, in
/// [`ProtocolClient::new`]; operations share them read-only and may run
/// concurrently.
///
/// Every operation validates its input first, then resolves the endpoint,
/// signs when the request requires it, and performs exactly one round trip.
/// Nothing is retried.
#[derive(Debug)]
pub struct ProtocolClient {
    config: ClientConfig,
    credential: Credential,
    signer: XmlSigner,
    transport: Transport,
}

impl ProtocolClient {
    /// Decode the credential, apply the expiry policy and build the TLS
    /// client.
    ///
    /// # Errors
    ///
    /// - [`NfeError::Credential`] when the container cannot be decoded or the
    ///   certificate is expired under [`ExpiryPolicy::Reject`](crate::certificate::ExpiryPolicy::Reject)
    /// - [`NfeError::Signing`] when the private key is unusable for RSA-SHA1
    /// - [`NfeError::Transport`] when the TLS identity or CA bundle is rejected
    pub fn new(config: ClientConfig, credential: Credential, ca_bundle: &CaBundle) -> Result<Self, NfeError> {
        let fields = credential.check_validity(config.expiry_policy, Utc::now())?;
        let pem = credential.to_pem()?;
        let signer = XmlSigner::from_pem(&pem)?;
        let transport = Transport::new(&pem, ca_bundle)?;

        tracing::debug!(
            uf = %config.uf,
            environment = %config.environment,
            contingency = config.contingency,
            subject = fields.common_name().unwrap_or_default(),
            ca_certificates = ca_bundle.len(),
            "protocol client ready"
        );
        Ok(Self {
            config,
            credential,
            signer,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// URL a call to `service` would go to.
    pub fn endpoint(&self, service: Service) -> Result<String, EndpointNotFoundError> {
        let url = routing::resolve(
            self.config.uf,
            service,
            self.config.environment,
            self.config.contingency,
        )?;
        Ok(match &self.config.endpoint_override {
            Some(url) => url.clone(),
            None => url.to_string(),
        })
    }

    /// `tpAmb`
    pub(crate) fn tp_amb(&self) -> String {
        self.config.environment.code().to_string()
    }

    /// `cUF`
    pub(crate) fn c_uf(&self) -> String {
        self.config.uf.code().to_string()
    }

    pub(crate) fn sign(&self, doc: &mut Document, anchor: &Anchor) -> Result<(), SigningError> {
        self.signer.sign_document(doc, anchor)
    }

    /// POST `body` to `url` and return the `result_tag` element of the reply.
    pub(crate) async fn round_trip(
        &self,
        service: Service,
        url: &str,
        body: &str,
        result_tag: &str,
        options: &CallOptions,
    ) -> Result<Element, NfeError> {
        let envelope = soap::envelope(service, body).map_err(xml_error)?;
        let timeout = options.timeout.unwrap_or(self.config.timeout);
        tracing::debug!(
            service = %service,
            url,
            bytes = envelope.len(),
            timeout_ms = timeout.as_millis() as u64,
            "dispatching request"
        );
        let response = self.transport.post(url, envelope, timeout).await?;
        Ok(soap::result_element(&response, result_tag)?)
    }
}

/// Request building failed; only reachable with input the XML writer rejects.
pub(crate) fn xml_error(e: XmlError) -> NfeError {
    SigningError::MalformedXml(e.to_string()).into()
}
