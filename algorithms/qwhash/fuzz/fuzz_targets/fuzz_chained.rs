#![no_main]

use libfuzzer_sys::fuzz_target;
use qwhash::{hash_chained, ChainHasher, ParameterSet};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Policy from the first byte, chunk size (1 to 255) from the second
    let params = if data[0] & 1 == 0 {
        ParameterSet::standard_byte()
    } else {
        ParameterSet::standard_bit()
    };
    let chunk_size = if data.len() > 1 {
        (data[1] as usize % 255) + 1
    } else {
        1
    };

    let reference = hash_chained(data, &params);

    let Ok(mut hasher) = ChainHasher::new(&params) else {
        return;
    };
    let fed: Result<(), _> = data.chunks(chunk_size).try_for_each(|chunk| hasher.update(chunk));
    let incremental = fed.and_then(|()| hasher.finalize());

    assert_eq!(reference, incremental, "Incremental chain mismatch");
});
