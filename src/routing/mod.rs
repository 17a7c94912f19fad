//! SEFAZ endpoint routing.
//!
//! Resolves `(state, service, environment, contingency)` to the URL of the
//! authority that serves it. Resolution is pure: a static URL table per
//! authority plus an ordered list of membership rules, see [`rules`].
//!
//! ```rust
//! use notafiscal::core::{Environment, Service, Uf};
//! use notafiscal::routing::resolve;
//!
//! let url = resolve(Uf::MG, Service::StatusCheck, Environment::Production, false).unwrap();
//! assert_eq!(url, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeStatusServico4");
//! ```

mod authority;
pub mod rules;
mod urls;

pub use authority::Authority;
pub use rules::Route;
pub use urls::lookup;

use crate::core::{EndpointNotFoundError, Environment, Service, Uf};

/// Resolve the web service URL for a state.
///
/// # Errors
///
/// Returns [`EndpointNotFoundError`] when no rule claims the route or the
/// claiming authority does not publish the service.
pub fn resolve(
    uf: Uf,
    service: Service,
    environment: Environment,
    contingency: bool,
) -> Result<&'static str, EndpointNotFoundError> {
    let route = Route {
        uf,
        service,
        environment,
        contingency,
    };
    resolve_route(&route)
}

/// [`resolve`] over a prebuilt [`Route`].
pub fn resolve_route(route: &Route) -> Result<&'static str, EndpointNotFoundError> {
    let not_found = || EndpointNotFoundError {
        uf: route.uf,
        service: route.service,
        environment: route.environment,
        contingency: route.contingency,
    };

    let (rule, authority) = rules::select(route).ok_or_else(not_found)?;
    let url = lookup(authority, route.service, route.environment).ok_or_else(not_found)?;
    tracing::debug!(
        uf = %route.uf,
        service = %route.service,
        environment = %route.environment,
        contingency = route.contingency,
        rule,
        %authority,
        url,
        "resolved endpoint"
    );
    Ok(url)
}
