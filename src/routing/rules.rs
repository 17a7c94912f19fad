//! Region membership tables and the ordered routing rules.
//!
//! Each rule looks at a [`Route`] and either claims it (naming the authority
//! that serves it) or passes. The first rule that claims a route wins; the URL
//! is then looked up in that authority's table. A claimed route whose
//! authority lacks the service is not found. It never falls through.

use crate::core::{Environment, Service, Uf};

use super::Authority;

/// Inputs to endpoint resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub uf: Uf,
    pub service: Service,
    pub environment: Environment,
    pub contingency: bool,
}

/// States running their own authorization infrastructure.
pub const OWN_INFRASTRUCTURE: &[Uf] = &[
    Uf::AM,
    Uf::BA,
    Uf::GO,
    Uf::MT,
    Uf::MS,
    Uf::MG,
    Uf::PR,
    Uf::PE,
    Uf::RS,
    Uf::SP,
];

/// States delegating every service to SVAN.
pub const SVAN_MEMBERS: &[Uf] = &[Uf::MA];

/// States whose registration lookup is served by SVRS.
pub const SVRS_REGISTRATION_MEMBERS: &[Uf] = &[Uf::AC, Uf::ES, Uf::RN, Uf::PB, Uf::SC];

/// States delegating every other service to SVRS.
pub const SVRS_MEMBERS: &[Uf] = &[
    Uf::AC,
    Uf::AL,
    Uf::AP,
    Uf::CE,
    Uf::DF,
    Uf::ES,
    Uf::PA,
    Uf::PB,
    Uf::PI,
    Uf::RJ,
    Uf::RN,
    Uf::RO,
    Uf::RR,
    Uf::SC,
    Uf::SE,
    Uf::TO,
];

/// Contingency via SVC-AN.
pub const SVC_AN_MEMBERS: &[Uf] = &[
    Uf::AC,
    Uf::AL,
    Uf::AP,
    Uf::CE,
    Uf::DF,
    Uf::ES,
    Uf::MG,
    Uf::PA,
    Uf::PB,
    Uf::RJ,
    Uf::RN,
    Uf::RO,
    Uf::RR,
    Uf::RS,
    Uf::SC,
    Uf::SE,
    Uf::SP,
    Uf::TO,
];

/// Contingency via SVC-RS.
pub const SVC_RS_MEMBERS: &[Uf] = &[
    Uf::AM,
    Uf::BA,
    Uf::GO,
    Uf::MA,
    Uf::MS,
    Uf::MT,
    Uf::PE,
    Uf::PR,
];

/// States whose contingency authority depends on the environment:
/// `(state, production authority, homologation authority)`.
pub const CONTINGENCY_BY_ENVIRONMENT: &[(Uf, Authority, Authority)] =
    &[(Uf::PI, Authority::SvcAn, Authority::SvcRs)];

/// A named routing rule.
pub struct Rule {
    pub name: &'static str,
    pub claim: fn(&Route) -> Option<Authority>,
}

/// Routing rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "national-distribution",
        claim: national_distribution,
    },
    Rule {
        name: "contingency-by-environment",
        claim: contingency_by_environment,
    },
    Rule {
        name: "contingency-svc-an",
        claim: contingency_svc_an,
    },
    Rule {
        name: "contingency-svc-rs",
        claim: contingency_svc_rs,
    },
    Rule {
        name: "own-infrastructure",
        claim: own_infrastructure,
    },
    Rule {
        name: "svan",
        claim: svan,
    },
    Rule {
        name: "svrs-registration-lookup",
        claim: svrs_registration_lookup,
    },
    Rule {
        name: "svrs",
        claim: svrs,
    },
];

/// First rule claiming the route, with the authority it names.
pub fn select(route: &Route) -> Option<(&'static str, Authority)> {
    RULES
        .iter()
        .find_map(|rule| (rule.claim)(route).map(|authority| (rule.name, authority)))
}

pub fn national_distribution(route: &Route) -> Option<Authority> {
    (route.service == Service::Distribution).then_some(Authority::An)
}

pub fn contingency_by_environment(route: &Route) -> Option<Authority> {
    if !route.contingency {
        return None;
    }
    CONTINGENCY_BY_ENVIRONMENT
        .iter()
        .find(|(uf, _, _)| *uf == route.uf)
        .map(|(_, production, homologation)| match route.environment {
            Environment::Production => *production,
            Environment::Homologation => *homologation,
        })
}

pub fn contingency_svc_an(route: &Route) -> Option<Authority> {
    (route.contingency && SVC_AN_MEMBERS.contains(&route.uf)).then_some(Authority::SvcAn)
}

pub fn contingency_svc_rs(route: &Route) -> Option<Authority> {
    (route.contingency && SVC_RS_MEMBERS.contains(&route.uf)).then_some(Authority::SvcRs)
}

pub fn own_infrastructure(route: &Route) -> Option<Authority> {
    (!route.contingency && OWN_INFRASTRUCTURE.contains(&route.uf)).then_some(Authority::Own(route.uf))
}

pub fn svan(route: &Route) -> Option<Authority> {
    (!route.contingency && SVAN_MEMBERS.contains(&route.uf)).then_some(Authority::Svan)
}

pub fn svrs_registration_lookup(route: &Route) -> Option<Authority> {
    (!route.contingency
        && route.service == Service::RegistrationLookup
        && SVRS_REGISTRATION_MEMBERS.contains(&route.uf))
    .then_some(Authority::Svrs)
}

pub fn svrs(route: &Route) -> Option<Authority> {
    (!route.contingency && SVRS_MEMBERS.contains(&route.uf)).then_some(Authority::Svrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(uf: Uf, service: Service, environment: Environment, contingency: bool) -> Route {
        Route {
            uf,
            service,
            environment,
            contingency,
        }
    }

    #[test]
    fn distribution_ignores_region_and_contingency() {
        for uf in Uf::ALL {
            for contingency in [false, true] {
                let r = route(uf, Service::Distribution, Environment::Production, contingency);
                assert_eq!(select(&r), Some(("national-distribution", Authority::An)));
            }
        }
    }

    #[test]
    fn piaui_contingency_depends_on_environment() {
        let prod = route(Uf::PI, Service::Authorization, Environment::Production, true);
        let hom = route(Uf::PI, Service::Authorization, Environment::Homologation, true);
        assert_eq!(contingency_by_environment(&prod), Some(Authority::SvcAn));
        assert_eq!(contingency_by_environment(&hom), Some(Authority::SvcRs));
        assert_eq!(contingency_by_environment(&route(Uf::SP, Service::Authorization, Environment::Production, true)), None);
    }

    #[test]
    fn contingency_rules_ignore_normal_mode() {
        let r = route(Uf::MG, Service::StatusCheck, Environment::Production, false);
        assert_eq!(contingency_svc_an(&r), None);
        assert_eq!(contingency_svc_rs(&r), None);
        assert_eq!(contingency_by_environment(&route(Uf::PI, Service::StatusCheck, Environment::Production, false)), None);
    }

    #[test]
    fn normal_rules_ignore_contingency_mode() {
        let r = route(Uf::SP, Service::StatusCheck, Environment::Production, true);
        assert_eq!(own_infrastructure(&r), None);
        assert_eq!(svan(&route(Uf::MA, Service::StatusCheck, Environment::Production, true)), None);
        assert_eq!(svrs(&route(Uf::AC, Service::StatusCheck, Environment::Production, true)), None);
    }

    #[test]
    fn own_infrastructure_names_the_state() {
        let r = route(Uf::BA, Service::StatusCheck, Environment::Homologation, false);
        assert_eq!(own_infrastructure(&r), Some(Authority::Own(Uf::BA)));
        assert_eq!(own_infrastructure(&route(Uf::AC, Service::StatusCheck, Environment::Homologation, false)), None);
    }

    #[test]
    fn registration_carve_out_only_for_registration_lookup() {
        let cad = route(Uf::SC, Service::RegistrationLookup, Environment::Production, false);
        let stat = route(Uf::SC, Service::StatusCheck, Environment::Production, false);
        assert_eq!(select(&cad), Some(("svrs-registration-lookup", Authority::Svrs)));
        assert_eq!(select(&stat), Some(("svrs", Authority::Svrs)));
    }

    #[test]
    fn every_state_is_claimed_in_both_modes() {
        for uf in Uf::ALL {
            for contingency in [false, true] {
                for environment in [Environment::Production, Environment::Homologation] {
                    let r = route(uf, Service::StatusCheck, environment, contingency);
                    assert!(select(&r).is_some(), "{uf} contingency={contingency} {environment}");
                }
            }
        }
    }

    #[test]
    fn membership_sets_are_consistent() {
        for uf in SVRS_REGISTRATION_MEMBERS {
            assert!(SVRS_MEMBERS.contains(uf));
        }
        for uf in OWN_INFRASTRUCTURE {
            assert!(!SVRS_MEMBERS.contains(uf) && !SVAN_MEMBERS.contains(uf));
        }
        for uf in SVC_AN_MEMBERS {
            assert!(!SVC_RS_MEMBERS.contains(uf));
        }
    }
}
