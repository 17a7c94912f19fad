#![no_main]

use libfuzzer_sys::fuzz_target;
use notafiscal::xml::{Element, XPath};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(xpath) = XPath::parse(s) {
            let root = Element::new("NFe").with_child(Element::new("infNFe").with_attr("Id", "NFe1"));
            let _ = xpath.find_first(&root);
        }
    }
});
