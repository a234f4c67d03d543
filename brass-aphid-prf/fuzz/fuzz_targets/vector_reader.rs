#![no_main]

use brass_aphid_prf::vectors::{run_vectors, RecordMode, VectorReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Skip empty inputs
    if data.is_empty() {
        return;
    }

    let mode = if data[0] & 1 == 0 {
        RecordMode::Carry
    } else {
        RecordMode::Strict
    };
    let _ = run_vectors(VectorReader::with_mode(&data[1..], mode));
});
