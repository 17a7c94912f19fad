//! Query the service status of the authority configured in the environment.
//!
//! ```sh
//! NFE_UF=SP NFE_ENVIRONMENT=homologation \
//! NFE_PFX=/path/to/a1.pfx NFE_PFX_PASSWORD=secret NFE_CA_BUNDLE=/path/to/roots.pem \
//! cargo run --example status_check --features webservices
//! ```

use notafiscal::certificate::Credential;
use notafiscal::webservices::{CaBundle, ClientConfig, ProtocolClient};

fn required(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(name).map_err(|_| format!("{name} is not set").into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    let credential = Credential::load(std::fs::read(required("NFE_PFX")?)?, required("NFE_PFX_PASSWORD")?);
    let ca_bundle = CaBundle::from_pem(std::fs::read(required("NFE_CA_BUNDLE")?)?)?;

    let client = ProtocolClient::new(config, credential, &ca_bundle)?;
    let result = client.status_check().await?;
    println!("{} {:?}: {}", result.status_code, result.status, result.description);
    Ok(())
}
