//! Published web service URLs per authority and environment.
//!
//! Sources: the national portal listings for production
//! (<https://www.nfe.fazenda.gov.br/portal/webServices.aspx>) and homologation
//! (<https://hom.nfe.fazenda.gov.br/PORTAL/webServices.aspx>).
//! A missing row means the authority does not offer that service.

use crate::core::{Environment, Service, Uf};

use super::Authority;

use Authority::{An, Own, Svan, SvcAn, SvcRs, Svrs};
use Service::{
    Authorization as Aut, AuthorizationResult as RetAut, Distribution as Dist,
    EventReception as Evt, NumberInvalidation as Inut, ProtocolQuery as Cons,
    RegistrationLookup as Cad, StatusCheck as Stat,
};

type Row = (Authority, Service, &'static str);

const PRODUCTION: &[Row] = &[
    (Own(Uf::AM), Inut, "https://nfe.sefaz.am.gov.br/services2/services/NfeInutilizacao4"),
    (Own(Uf::AM), Cons, "https://nfe.sefaz.am.gov.br/services2/services/NfeConsulta4"),
    (Own(Uf::AM), Stat, "https://nfe.sefaz.am.gov.br/services2/services/NfeStatusServico4"),
    (Own(Uf::AM), Evt, "https://nfe.sefaz.am.gov.br/services2/services/RecepcaoEvento4"),
    (Own(Uf::AM), Aut, "https://nfe.sefaz.am.gov.br/services2/services/NfeAutorizacao4"),
    (Own(Uf::AM), RetAut, "https://nfe.sefaz.am.gov.br/services2/services/NfeRetAutorizacao4"),
    (Own(Uf::BA), Inut, "https://nfe.sefaz.ba.gov.br/webservices/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (Own(Uf::BA), Cons, "https://nfe.sefaz.ba.gov.br/webservices/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (Own(Uf::BA), Stat, "https://nfe.sefaz.ba.gov.br/webservices/NFeStatusServico4/NFeStatusServico4.asmx"),
    (Own(Uf::BA), Cad, "https://nfe.sefaz.ba.gov.br/webservices/CadConsultaCadastro4/CadConsultaCadastro4.asmx"),
    (Own(Uf::BA), Evt, "https://nfe.sefaz.ba.gov.br/webservices/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (Own(Uf::BA), Aut, "https://nfe.sefaz.ba.gov.br/webservices/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (Own(Uf::BA), RetAut, "https://nfe.sefaz.ba.gov.br/webservices/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (Own(Uf::GO), Inut, "https://nfe.sefaz.go.gov.br/nfe/services/NFeInutilizacao4?wsdl"),
    (Own(Uf::GO), Cons, "https://nfe.sefaz.go.gov.br/nfe/services/NFeConsultaProtocolo4?wsdl"),
    (Own(Uf::GO), Stat, "https://nfe.sefaz.go.gov.br/nfe/services/NFeStatusServico4?wsdl"),
    (Own(Uf::GO), Cad, "https://nfe.sefaz.go.gov.br/nfe/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::GO), Evt, "https://nfe.sefaz.go.gov.br/nfe/services/NFeRecepcaoEvento4?wsdl"),
    (Own(Uf::GO), Aut, "https://nfe.sefaz.go.gov.br/nfe/services/NFeAutorizacao4?wsdl"),
    (Own(Uf::GO), RetAut, "https://nfe.sefaz.go.gov.br/nfe/services/NFeRetAutorizacao4?wsdl"),
    (Own(Uf::MG), Inut, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeInutilizacao4"),
    (Own(Uf::MG), Cons, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeConsultaProtocolo4"),
    (Own(Uf::MG), Stat, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeStatusServico4"),
    (Own(Uf::MG), Cad, "https://nfe.fazenda.mg.gov.br/nfe2/services/CadConsultaCadastro4"),
    (Own(Uf::MG), Evt, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeRecepcaoEvento4"),
    (Own(Uf::MG), Aut, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeAutorizacao4"),
    (Own(Uf::MG), RetAut, "https://nfe.fazenda.mg.gov.br/nfe2/services/NFeRetAutorizacao4"),
    (Own(Uf::MS), Inut, "https://nfe.sefaz.ms.gov.br/ws/NFeInutilizacao4"),
    (Own(Uf::MS), Cons, "https://nfe.sefaz.ms.gov.br/ws/NFeConsultaProtocolo4"),
    (Own(Uf::MS), Stat, "https://nfe.sefaz.ms.gov.br/ws/NFeStatusServico4"),
    (Own(Uf::MS), Cad, "https://nfe.sefaz.ms.gov.br/ws/CadConsultaCadastro4"),
    (Own(Uf::MS), Evt, "https://nfe.sefaz.ms.gov.br/ws/NFeRecepcaoEvento4"),
    (Own(Uf::MS), Aut, "https://nfe.sefaz.ms.gov.br/ws/NFeAutorizacao4"),
    (Own(Uf::MS), RetAut, "https://nfe.sefaz.ms.gov.br/ws/NFeRetAutorizacao4"),
    (Own(Uf::MT), Inut, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/NfeInutilizacao4?wsdl"),
    (Own(Uf::MT), Cons, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/NfeConsulta4?wsdl"),
    (Own(Uf::MT), Stat, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/NfeStatusServico4?wsdl"),
    (Own(Uf::MT), Cad, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::MT), Evt, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/RecepcaoEvento4?wsdl"),
    (Own(Uf::MT), Aut, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/NfeAutorizacao4?wsdl"),
    (Own(Uf::MT), RetAut, "https://nfe.sefaz.mt.gov.br/nfews/v2/services/NfeRetAutorizacao4?wsdl"),
    (Own(Uf::PE), Inut, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeInutilizacao4"),
    (Own(Uf::PE), Cons, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeConsultaProtocolo4"),
    (Own(Uf::PE), Stat, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeStatusServico4"),
    (Own(Uf::PE), Cad, "https://nfe.sefaz.pe.gov.br/nfe-service/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::PE), Evt, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeRecepcaoEvento4"),
    (Own(Uf::PE), Aut, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeAutorizacao4"),
    (Own(Uf::PE), RetAut, "https://nfe.sefaz.pe.gov.br/nfe-service/services/NFeRetAutorizacao4"),
    (Own(Uf::PR), Inut, "https://nfe.sefa.pr.gov.br/nfe/NFeInutilizacao4?wsdl"),
    (Own(Uf::PR), Cons, "https://nfe.sefa.pr.gov.br/nfe/NFeConsultaProtocolo4?wsdl"),
    (Own(Uf::PR), Stat, "https://nfe.sefa.pr.gov.br/nfe/NFeStatusServico4?wsdl"),
    (Own(Uf::PR), Cad, "https://nfe.sefa.pr.gov.br/nfe/CadConsultaCadastro4?wsdl"),
    (Own(Uf::PR), Evt, "https://nfe.sefa.pr.gov.br/nfe/NFeRecepcaoEvento4?wsdl"),
    (Own(Uf::PR), Aut, "https://nfe.sefa.pr.gov.br/nfe/NFeAutorizacao4?wsdl"),
    (Own(Uf::PR), RetAut, "https://nfe.sefa.pr.gov.br/nfe/NFeRetAutorizacao4?wsdl"),
    (Own(Uf::RS), Inut, "https://nfe.sefazrs.rs.gov.br/ws/nfeinutilizacao/nfeinutilizacao4.asmx"),
    (Own(Uf::RS), Cons, "https://nfe.sefazrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (Own(Uf::RS), Stat, "https://nfe.sefazrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (Own(Uf::RS), Cad, "https://cad.sefazrs.rs.gov.br/ws/cadconsultacadastro/cadconsultacadastro4.asmx"),
    (Own(Uf::RS), Evt, "https://nfe.sefazrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (Own(Uf::RS), Aut, "https://nfe.sefazrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (Own(Uf::RS), RetAut, "https://nfe.sefazrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (Own(Uf::SP), Inut, "https://nfe.fazenda.sp.gov.br/ws/nfeinutilizacao4.asmx"),
    (Own(Uf::SP), Cons, "https://nfe.fazenda.sp.gov.br/ws/nfeconsultaprotocolo4.asmx"),
    (Own(Uf::SP), Stat, "https://nfe.fazenda.sp.gov.br/ws/nfestatusservico4.asmx"),
    (Own(Uf::SP), Cad, "https://nfe.fazenda.sp.gov.br/ws/cadconsultacadastro4.asmx"),
    (Own(Uf::SP), Evt, "https://nfe.fazenda.sp.gov.br/ws/nferecepcaoevento4.asmx"),
    (Own(Uf::SP), Aut, "https://nfe.fazenda.sp.gov.br/ws/nfeautorizacao4.asmx"),
    (Own(Uf::SP), RetAut, "https://nfe.fazenda.sp.gov.br/ws/nferetautorizacao4.asmx"),
    (Svan, Inut, "https://www.sefazvirtual.fazenda.gov.br/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (Svan, Cons, "https://www.sefazvirtual.fazenda.gov.br/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (Svan, Stat, "https://www.sefazvirtual.fazenda.gov.br/NFeStatusServico4/NFeStatusServico4.asmx"),
    (Svan, Evt, "https://www.sefazvirtual.fazenda.gov.br/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (Svan, Aut, "https://www.sefazvirtual.fazenda.gov.br/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (Svan, RetAut, "https://www.sefazvirtual.fazenda.gov.br/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (Svrs, Inut, "https://nfe.svrs.rs.gov.br/ws/nfeinutilizacao/nfeinutilizacao4.asmx"),
    (Svrs, Cons, "https://nfe.svrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (Svrs, Stat, "https://nfe.svrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (Svrs, Cad, "https://cad.svrs.rs.gov.br/ws/cadconsultacadastro/cadconsultacadastro4.asmx"),
    (Svrs, Evt, "https://nfe.svrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (Svrs, Aut, "https://nfe.svrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (Svrs, RetAut, "https://nfe.svrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (SvcAn, Inut, "https://www.sefazvirtual.fazenda.gov.br/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (SvcAn, Cons, "https://www.sefazvirtual.fazenda.gov.br/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (SvcAn, Stat, "https://www.sefazvirtual.fazenda.gov.br/NFeStatusServico4/NFeStatusServico4.asmx"),
    (SvcAn, Evt, "https://www.sefazvirtual.fazenda.gov.br/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (SvcAn, Aut, "https://www.sefazvirtual.fazenda.gov.br/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (SvcAn, RetAut, "https://www.sefazvirtual.fazenda.gov.br/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (SvcRs, Cons, "https://nfe.svrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (SvcRs, Stat, "https://nfe.svrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (SvcRs, Evt, "https://nfe.svrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (SvcRs, Aut, "https://nfe.svrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (SvcRs, RetAut, "https://nfe.svrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (An, Dist, "https://www1.nfe.fazenda.gov.br/NFeDistribuicaoDFe/NFeDistribuicaoDFe.asmx"),
];

const HOMOLOGATION: &[Row] = &[
    (Own(Uf::AM), Inut, "https://homnfe.sefaz.am.gov.br/services2/services/NfeInutilizacao4"),
    (Own(Uf::AM), Cons, "https://homnfe.sefaz.am.gov.br/services2/services/NfeConsulta4"),
    (Own(Uf::AM), Stat, "https://homnfe.sefaz.am.gov.br/services2/services/NfeStatusServico4"),
    (Own(Uf::AM), Evt, "https://homnfe.sefaz.am.gov.br/services2/services/RecepcaoEvento4"),
    (Own(Uf::AM), Aut, "https://homnfe.sefaz.am.gov.br/services2/services/NfeAutorizacao4"),
    (Own(Uf::AM), RetAut, "https://homnfe.sefaz.am.gov.br/services2/services/NfeRetAutorizacao4"),
    (Own(Uf::BA), Inut, "https://hnfe.sefaz.ba.gov.br/webservices/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (Own(Uf::BA), Cons, "https://hnfe.sefaz.ba.gov.br/webservices/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (Own(Uf::BA), Stat, "https://hnfe.sefaz.ba.gov.br/webservices/NFeStatusServico4/NFeStatusServico4.asmx"),
    (Own(Uf::BA), Cad, "https://hnfe.sefaz.ba.gov.br/webservices/CadConsultaCadastro4/CadConsultaCadastro4.asmx"),
    (Own(Uf::BA), Evt, "https://hnfe.sefaz.ba.gov.br/webservices/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (Own(Uf::BA), Aut, "https://hnfe.sefaz.ba.gov.br/webservices/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (Own(Uf::BA), RetAut, "https://hnfe.sefaz.ba.gov.br/webservices/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (Own(Uf::GO), Inut, "https://homolog.sefaz.go.gov.br/nfe/services/NFeInutilizacao4?wsdl"),
    (Own(Uf::GO), Cons, "https://homolog.sefaz.go.gov.br/nfe/services/NFeConsultaProtocolo4?wsdl"),
    (Own(Uf::GO), Stat, "https://homolog.sefaz.go.gov.br/nfe/services/NFeStatusServico4?wsdl"),
    (Own(Uf::GO), Cad, "https://homolog.sefaz.go.gov.br/nfe/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::GO), Evt, "https://homolog.sefaz.go.gov.br/nfe/services/NFeRecepcaoEvento4?wsdl"),
    (Own(Uf::GO), Aut, "https://homolog.sefaz.go.gov.br/nfe/services/NFeAutorizacao4?wsdl"),
    (Own(Uf::GO), RetAut, "https://homolog.sefaz.go.gov.br/nfe/services/NFeRetAutorizacao4?wsdl"),
    (Own(Uf::MG), Inut, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeInutilizacao4"),
    (Own(Uf::MG), Cons, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeConsultaProtocolo4"),
    (Own(Uf::MG), Stat, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeStatusServico4"),
    (Own(Uf::MG), Cad, "https://hnfe.fazenda.mg.gov.br/nfe2/services/CadConsultaCadastro4"),
    (Own(Uf::MG), Evt, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeRecepcaoEvento4"),
    (Own(Uf::MG), Aut, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeAutorizacao4"),
    (Own(Uf::MG), RetAut, "https://hnfe.fazenda.mg.gov.br/nfe2/services/NFeRetAutorizacao4"),
    (Own(Uf::MS), Inut, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeInutilizacao4"),
    (Own(Uf::MS), Cons, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeConsultaProtocolo4"),
    (Own(Uf::MS), Stat, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeStatusServico4"),
    (Own(Uf::MS), Cad, "https://hom.nfe.sefaz.ms.gov.br/ws/CadConsultaCadastro4"),
    (Own(Uf::MS), Evt, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeRecepcaoEvento4"),
    (Own(Uf::MS), Aut, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeAutorizacao4"),
    (Own(Uf::MS), RetAut, "https://hom.nfe.sefaz.ms.gov.br/ws/NFeRetAutorizacao4"),
    (Own(Uf::MT), Inut, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/NfeInutilizacao4?wsdl"),
    (Own(Uf::MT), Cons, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/NfeConsulta4?wsdl"),
    (Own(Uf::MT), Stat, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/NfeStatusServico4?wsdl"),
    (Own(Uf::MT), Cad, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::MT), Evt, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/RecepcaoEvento4?wsdl"),
    (Own(Uf::MT), Aut, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/NfeAutorizacao4?wsdl"),
    (Own(Uf::MT), RetAut, "https://homologacao.sefaz.mt.gov.br/nfews/v2/services/NfeRetAutorizacao4?wsdl"),
    (Own(Uf::PE), Inut, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeInutilizacao4?wsdl"),
    (Own(Uf::PE), Cons, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeConsultaProtocolo4?wsdl"),
    (Own(Uf::PE), Stat, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeStatusServico4?wsdl"),
    (Own(Uf::PE), Cad, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/CadConsultaCadastro4?wsdl"),
    (Own(Uf::PE), Evt, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeRecepcaoEvento4?wsdl"),
    (Own(Uf::PE), Aut, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeAutorizacao4?wsdl"),
    (Own(Uf::PE), RetAut, "https://nfehomolog.sefaz.pe.gov.br/nfe-service/services/NFeRetAutorizacao4?wsdl"),
    (Own(Uf::PR), Inut, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeInutilizacao4?wsdl"),
    (Own(Uf::PR), Cons, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeConsultaProtocolo4?wsdl"),
    (Own(Uf::PR), Stat, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeStatusServico4?wsdl"),
    (Own(Uf::PR), Cad, "https://homologacao.nfe.sefa.pr.gov.br/nfe/CadConsultaCadastro4?wsdl"),
    (Own(Uf::PR), Evt, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeRecepcaoEvento4?wsdl"),
    (Own(Uf::PR), Aut, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeAutorizacao4?wsdl"),
    (Own(Uf::PR), RetAut, "https://homologacao.nfe.sefa.pr.gov.br/nfe/NFeRetAutorizacao4?wsdl"),
    (Own(Uf::RS), Inut, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/nfeinutilizacao/nfeinutilizacao4.asmx"),
    (Own(Uf::RS), Cons, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (Own(Uf::RS), Stat, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (Own(Uf::RS), Cad, "https://cad.sefazrs.rs.gov.br/ws/cadconsultacadastro/cadconsultacadastro4.asmx"),
    (Own(Uf::RS), Evt, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (Own(Uf::RS), Aut, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (Own(Uf::RS), RetAut, "https://nfe-homologacao.sefazrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (Own(Uf::SP), Inut, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nfeinutilizacao4.asmx"),
    (Own(Uf::SP), Cons, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nfeconsultaprotocolo4.asmx"),
    (Own(Uf::SP), Stat, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nfestatusservico4.asmx"),
    (Own(Uf::SP), Cad, "https://homologacao.nfe.fazenda.sp.gov.br/ws/cadconsultacadastro4.asmx"),
    (Own(Uf::SP), Evt, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nferecepcaoevento4.asmx"),
    (Own(Uf::SP), Aut, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nfeautorizacao4.asmx"),
    (Own(Uf::SP), RetAut, "https://homologacao.nfe.fazenda.sp.gov.br/ws/nferetautorizacao4.asmx"),
    (Svan, Inut, "https://hom.sefazvirtual.fazenda.gov.br/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (Svan, Cons, "https://hom.sefazvirtual.fazenda.gov.br/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (Svan, Stat, "https://hom.sefazvirtual.fazenda.gov.br/NFeStatusServico4/NFeStatusServico4.asmx"),
    (Svan, Evt, "https://hom.sefazvirtual.fazenda.gov.br/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (Svan, Aut, "https://hom.sefazvirtual.fazenda.gov.br/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (Svan, RetAut, "https://hom.sefazvirtual.fazenda.gov.br/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (Svrs, Inut, "https://nfe-homologacao.svrs.rs.gov.br/ws/nfeinutilizacao/nfeinutilizacao4.asmx"),
    (Svrs, Cons, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (Svrs, Stat, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (Svrs, Cad, "https://cad-homologacao.svrs.rs.gov.br/ws/cadconsultacadastro/cadconsultacadastro4.asmx"),
    (Svrs, Evt, "https://nfe-homologacao.svrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (Svrs, Aut, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (Svrs, RetAut, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (SvcAn, Inut, "https://hom.sefazvirtual.fazenda.gov.br/NFeInutilizacao4/NFeInutilizacao4.asmx"),
    (SvcAn, Cons, "https://hom.sefazvirtual.fazenda.gov.br/NFeConsultaProtocolo4/NFeConsultaProtocolo4.asmx"),
    (SvcAn, Stat, "https://hom.sefazvirtual.fazenda.gov.br/NFeStatusServico4/NFeStatusServico4.asmx"),
    (SvcAn, Evt, "https://hom.sefazvirtual.fazenda.gov.br/NFeRecepcaoEvento4/NFeRecepcaoEvento4.asmx"),
    (SvcAn, Aut, "https://hom.sefazvirtual.fazenda.gov.br/NFeAutorizacao4/NFeAutorizacao4.asmx"),
    (SvcAn, RetAut, "https://hom.sefazvirtual.fazenda.gov.br/NFeRetAutorizacao4/NFeRetAutorizacao4.asmx"),
    (SvcRs, Cons, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeConsulta/NfeConsulta4.asmx"),
    (SvcRs, Stat, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeStatusServico/NfeStatusServico4.asmx"),
    (SvcRs, Evt, "https://nfe-homologacao.svrs.rs.gov.br/ws/recepcaoevento/recepcaoevento4.asmx"),
    (SvcRs, Aut, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeAutorizacao/NFeAutorizacao4.asmx"),
    (SvcRs, RetAut, "https://nfe-homologacao.svrs.rs.gov.br/ws/NfeRetAutorizacao/NFeRetAutorizacao4.asmx"),
    (An, Dist, "https://hom1.nfe.fazenda.gov.br/NFeDistribuicaoDFe/NFeDistribuicaoDFe.asmx"),
];

/// URL an authority publishes for a service, if any.
pub fn lookup(authority: Authority, service: Service, environment: Environment) -> Option<&'static str> {
    let table = match environment {
        Environment::Production => PRODUCTION,
        Environment::Homologation => HOMOLOGATION,
    };
    table
        .iter()
        .find(|(a, s, _)| *a == authority && *s == service)
        .map(|(_, _, url)| *url)
}
