#![no_main]

use libfuzzer_sys::fuzz_target;
use qwhash::{hash_block_sized, verify_block, ParameterSet, QwError};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Largest supported power of two that fits the input
    if data.len() < 2 {
        return;
    }
    let block_size = 1usize << data.len().ilog2().min(10);
    let params = ParameterSet::standard_byte();

    // =============================================================================
    // 1. BLOCK HASHING
    // =============================================================================

    match hash_block_sized(data, &params, block_size) {
        Ok(digest) => {
            assert_eq!(digest.len(), block_size, "Digest length mismatch");
            let again = hash_block_sized(data, &params, block_size);
            assert_eq!(again.as_ref(), Ok(&digest), "Block hash not deterministic");
        }
        Err(QwError::ZeroNormInput) => {
            assert!(data[..block_size].iter().all(|&b| b == 0));
        }
        Err(QwError::UnderfilledDistribution { produced, required }) => {
            assert!(produced < required);
        }
        Err(err) => panic!("unexpected error: {err}"),
    }

    // =============================================================================
    // 2. VERIFICATION
    // =============================================================================

    if block_size == 32 {
        if let Ok(digest) = hash_block_sized(data, &params, 32) {
            assert_eq!(verify_block(data, &params, &digest), Ok(true));
        }
    }
});
