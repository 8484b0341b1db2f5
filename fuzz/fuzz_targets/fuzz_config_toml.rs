#![no_main]

use investment_projector::ProjectorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ProjectorConfig::from_toml_str(text);
    }
});
