#![no_main]

use libfuzzer_sys::fuzz_target;
use notafiscal::webservices::DistributedDocument;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let doc = DistributedDocument {
            nsu: "000000000000001".into(),
            schema: "resNFe_v1.01.xsd".into(),
            content_base64: s.to_string(),
        };
        let _ = doc.decompress();
    }
});
