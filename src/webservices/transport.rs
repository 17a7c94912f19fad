use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::config::CaBundle;
use crate::certificate::PemPair;
use crate::core::TransportError;

pub const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// HTTPS client presenting the credential as TLS client certificate and
/// trusting only the supplied CA bundle.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(pem: &PemPair, ca: &CaBundle) -> Result<Self, TransportError> {
        let setup = |e: reqwest::Error| TransportError::Setup(e.to_string());

        let mut identity_pem = Vec::with_capacity(pem.key.len() + pem.cert.len() + 1);
        identity_pem.extend_from_slice(pem.key.as_bytes());
        identity_pem.push(b'\n');
        identity_pem.extend_from_slice(pem.cert.as_bytes());
        let identity = reqwest::Identity::from_pem(&identity_pem).map_err(setup)?;

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .identity(identity)
            .tls_built_in_root_certs(false);
        for cert in ca.certificates().map_err(setup)? {
            builder = builder.add_root_certificate(cert);
        }
        Ok(Self {
            client: builder.build().map_err(setup)?,
        })
    }

    /// POST a SOAP envelope and return the response body.
    ///
    /// Only the deadline elapsing maps to [`TransportError::Timeout`]; other
    /// failures before a response arrives are [`TransportError::Connection`].
    pub(crate) async fn post(
        &self,
        url: &str,
        envelope: String,
        timeout: Duration,
    ) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .timeout(timeout)
            .body(envelope)
            .send()
            .await
            .map_err(|e| classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response.text().await.map_err(|e| classify(e, url))
    }
}

fn classify(err: reqwest::Error, url: &str) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Connection(err.to_string())
    }
}
