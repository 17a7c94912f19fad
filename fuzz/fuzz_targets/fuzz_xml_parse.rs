#![no_main]

use libfuzzer_sys::fuzz_target;
use notafiscal::xml::{Document, c14n};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = Document::parse(s) {
            let _ = c14n::canonicalize(&doc.root, &c14n::namespaces_at(&doc.root, &[]));
        }
    }
});
