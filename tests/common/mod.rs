//! Test credentials generated in-process.

#![allow(dead_code)]

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::hash::MessageDigest;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::stack::Stack;
use openssl::x509::{X509, X509NameBuilder};

pub const PASSPHRASE: &str = "senha123";

/// 2020-09-13
pub const NOT_BEFORE: i64 = 1_600_000_000;
/// 2033-05-18
pub const NOT_AFTER: i64 = 2_000_000_000;

pub fn rsa_key() -> PKey<Private> {
    PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap()
}

pub fn certificate(key: &PKey<Private>, cn: &str, serial: u32, not_after_unix: i64) -> X509 {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("C", "BR").unwrap();
    name.append_entry_by_text("O", "ICP-Brasil").unwrap();
    name.append_entry_by_text("CN", cn).unwrap();
    let name = name.build();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    let serial = BigNum::from_u32(serial).unwrap().to_asn1_integer().unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_not_before(&Asn1Time::from_unix(NOT_BEFORE).unwrap()).unwrap();
    builder.set_not_after(&Asn1Time::from_unix(not_after_unix).unwrap()).unwrap();
    builder.set_pubkey(key).unwrap();
    builder.sign(key, MessageDigest::sha256()).unwrap();
    builder.build()
}

/// Container with one key, a leaf certificate and extra certificates.
pub fn pkcs12(key: &PKey<Private>, leaf: &X509, extra: Vec<X509>, passphrase: &str) -> Vec<u8> {
    let mut builder = Pkcs12::builder();
    builder.name("a1").pkey(key).cert(leaf);
    if !extra.is_empty() {
        let mut ca = Stack::new().unwrap();
        for cert in extra {
            ca.push(cert).unwrap();
        }
        builder.ca(ca);
    }
    builder.build2(passphrase).unwrap().to_der().unwrap()
}

/// Container holding `certs` as plain certificate bags, in order, and
/// optionally a key. No bag is marked as the key's certificate.
pub fn pkcs12_bags(key: Option<&PKey<Private>>, certs: Vec<X509>, passphrase: &str) -> Vec<u8> {
    let mut builder = Pkcs12::builder();
    builder.name("a1");
    if let Some(key) = key {
        builder.pkey(key);
    }
    if !certs.is_empty() {
        let mut ca = Stack::new().unwrap();
        for cert in certs {
            ca.push(cert).unwrap();
        }
        builder.ca(ca);
    }
    builder.build2(passphrase).unwrap().to_der().unwrap()
}

/// Valid A1 container: key plus one certificate.
pub fn a1() -> (Vec<u8>, PKey<Private>, X509) {
    let key = rsa_key();
    let cert = certificate(&key, "EMPRESA TESTE LTDA:12345678000195", 1, NOT_AFTER);
    let der = pkcs12(&key, &cert, Vec::new(), PASSPHRASE);
    (der, key, cert)
}

/// PEM bundle with a single self-signed root.
pub fn ca_pem() -> Vec<u8> {
    let key = rsa_key();
    certificate(&key, "AC Raiz Teste", 99, NOT_AFTER).to_pem().unwrap()
}
