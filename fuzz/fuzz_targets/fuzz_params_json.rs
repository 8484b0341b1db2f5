#![no_main]

use investment_projector::{io::read_params_json_from_bytes, Projector};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Accepted inputs must project without panicking.
    if let Ok(inputs) = read_params_json_from_bytes(data) {
        if let Ok(projector) = Projector::from_inputs(&inputs) {
            assert_eq!(projector.records().len(), inputs.years as usize + 1);
        }
    }
});
