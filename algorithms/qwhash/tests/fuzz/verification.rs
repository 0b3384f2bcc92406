use bolero::check;
use qwhash::{hash_block, hash_chained, verify_block, verify_chained, ParameterSet};

#[test]
fn fuzz_verification_logic() {
    let params = ParameterSet::standard_bit();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let Ok(h) = hash_chained(data, &params) else {
            return;
        };
        assert_eq!(
            verify_chained(data, &params, &h),
            Ok(true),
            "verify_chained() failed on correct data"
        );

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Hash Corruption
        let mut bad_h = h.clone();
        bad_h[0] ^= 0xFF;
        assert_eq!(
            verify_chained(data, &params, &bad_h),
            Ok(false),
            "verify_chained() succeeded on corrupted hash"
        );

        // 2. Block API agrees on the first block
        if data.len() >= 32 {
            if let Ok(block) = hash_block(data, &params) {
                assert_eq!(verify_block(data, &params, &block), Ok(true));
                assert_eq!(
                    verify_block(data, &params, &block[..block.len() - 1]),
                    Ok(false),
                    "verify_block() accepted a truncated digest"
                );
            }
        }
    });
}
