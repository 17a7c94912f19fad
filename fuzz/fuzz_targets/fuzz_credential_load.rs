#![no_main]

use libfuzzer_sys::fuzz_target;
use notafiscal::certificate::Credential;

fuzz_target!(|data: &[u8]| {
    let credential = Credential::load(data.to_vec(), "senha123");
    let _ = credential.to_pem();
    let _ = credential.fields();
});
