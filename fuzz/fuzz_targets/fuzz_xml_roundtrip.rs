#![no_main]

use libfuzzer_sys::fuzz_target;
use notafiscal::xml::Document;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → serialize → parse must not panic, and the second
        // serialization must equal the first.
        if let Ok(doc) = Document::parse(s) {
            if let Ok(xml) = doc.to_xml() {
                let again = Document::parse(&xml).unwrap();
                assert_eq!(again.to_xml().unwrap(), xml);
            }
        }
    }
});
