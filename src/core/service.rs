use serde::{Deserialize, Serialize};
use std::fmt;

/// NF-e web service, named by what it does.
///
/// [`Service::wsdl_name`] gives the authority's own service name;
/// [`Service::wsdl_namespace`] the namespace of the SOAP body wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Service {
    /// NfeInutilizacao: invalidate a range of unused numbers.
    NumberInvalidation,
    /// NfeConsultaProtocolo: current state of a document by access key.
    ProtocolQuery,
    /// NfeStatusServico: service availability.
    StatusCheck,
    /// NfeConsultaCadastro: taxpayer registration lookup.
    RegistrationLookup,
    /// RecepcaoEvento: event notification (cancellation, correction, ...).
    EventReception,
    /// NFeAutorizacao: document submission.
    Authorization,
    /// NFeRetAutorizacao: asynchronous batch result. Published, not used.
    AuthorizationResult,
    /// NFeDistribuicaoDFe: national document distribution.
    Distribution,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::NumberInvalidation,
        Service::ProtocolQuery,
        Service::StatusCheck,
        Service::RegistrationLookup,
        Service::EventReception,
        Service::Authorization,
        Service::AuthorizationResult,
        Service::Distribution,
    ];

    pub fn wsdl_name(&self) -> &'static str {
        match self {
            Self::NumberInvalidation => "NfeInutilizacao",
            Self::ProtocolQuery => "NfeConsultaProtocolo",
            Self::StatusCheck => "NfeStatusServico",
            Self::RegistrationLookup => "NfeConsultaCadastro",
            Self::EventReception => "RecepcaoEvento",
            Self::Authorization => "NFeAutorizacao",
            Self::AuthorizationResult => "NFeRetAutorizacao",
            Self::Distribution => "NFeDistribuicaoDFe",
        }
    }

    /// Namespace of the `nfeDadosMsg` wrapper (version 4 services).
    pub fn wsdl_namespace(&self) -> &'static str {
        match self {
            Self::NumberInvalidation => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeInutilizacao4",
            Self::ProtocolQuery => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeConsultaProtocolo4",
            Self::StatusCheck => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeStatusServico4",
            Self::RegistrationLookup => "http://www.portalfiscal.inf.br/nfe/wsdl/CadConsultaCadastro4",
            Self::EventReception => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeRecepcaoEvento4",
            Self::Authorization => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeAutorizacao4",
            Self::AuthorizationResult => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeRetAutorizacao4",
            Self::Distribution => "http://www.portalfiscal.inf.br/nfe/wsdl/NFeDistribuicaoDFe",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wsdl_name())
    }
}
