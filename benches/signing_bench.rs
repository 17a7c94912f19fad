use criterion::{Criterion, black_box, criterion_group, criterion_main};
use openssl::asn1::Asn1Time;
use openssl::hash::MessageDigest;
use openssl::pkey::PKey;
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};

use notafiscal::certificate::PemPair;
use notafiscal::sign::{Anchor, XmlSigner};
use notafiscal::xml::{Document, XmlWriter, c14n};

const ID: &str = "NFe35240112345678000195550010000000011000000010";

fn pem_pair() -> PemPair {
    let key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", "BENCH LTDA:12345678000195").unwrap();
    let name = name.build();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
    builder.set_not_after(&Asn1Time::days_from_now(365).unwrap()).unwrap();
    builder.set_pubkey(&key).unwrap();
    builder.sign(&key, MessageDigest::sha256()).unwrap();

    PemPair {
        cert: String::from_utf8(builder.build().to_pem().unwrap()).unwrap(),
        key: String::from_utf8(key.private_key_to_pem_pkcs8().unwrap()).unwrap(),
    }
}

fn nfe(items: usize) -> String {
    let mut w = XmlWriter::new();
    w.start_element_with_attrs("NFe", &[("xmlns", "http://www.portalfiscal.inf.br/nfe")])
        .unwrap()
        .start_element_with_attrs("infNFe", &[("Id", ID), ("versao", "4.00")])
        .unwrap()
        .start_element("ide")
        .unwrap()
        .text_element("cUF", "35")
        .unwrap()
        .text_element("natOp", "VENDA")
        .unwrap()
        .end_element("ide")
        .unwrap();
    for i in 1..=items {
        let n = i.to_string();
        w.start_element_with_attrs("det", &[("nItem", n.as_str())])
            .unwrap()
            .start_element("prod")
            .unwrap()
            .text_element("cProd", &format!("P{i:05}"))
            .unwrap()
            .text_element("xProd", &format!("Produto {i} & acessórios"))
            .unwrap()
            .text_element("qCom", "2.0000")
            .unwrap()
            .text_element("vProd", "19.98")
            .unwrap()
            .end_element("prod")
            .unwrap()
            .end_element("det")
            .unwrap();
    }
    w.end_element("infNFe").unwrap().end_element("NFe").unwrap();
    w.into_string().unwrap()
}

fn bench_canonicalize(c: &mut Criterion) {
    let doc = Document::parse(&nfe(100)).unwrap();
    let scope = c14n::namespaces_at(&doc.root, &[]);
    c.bench_function("canonicalize_100_items", |b| {
        b.iter(|| black_box(c14n::canonicalize(black_box(&doc.root), &scope)));
    });
}

fn bench_sign(c: &mut Criterion) {
    let signer = XmlSigner::from_pem(&pem_pair()).unwrap();
    let anchor = Anchor::ElementId(ID.to_string());

    let small = nfe(1);
    c.bench_function("sign_1_item", |b| {
        b.iter(|| black_box(signer.sign(black_box(&small), &anchor)));
    });

    let large = nfe(500);
    c.bench_function("sign_500_items", |b| {
        b.iter(|| black_box(signer.sign(black_box(&large), &anchor)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let xml = nfe(500);
    c.bench_function("parse_500_items", |b| {
        b.iter(|| black_box(Document::parse(black_box(&xml))));
    });
}

criterion_group!(benches, bench_canonicalize, bench_sign, bench_parse);
criterion_main!(benches);
