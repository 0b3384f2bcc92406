use bolero::check;
use qwhash::{hash_chained, ChainHasher, ParameterSet};

#[test]
fn fuzz_chaining_consistency() {
    let params = ParameterSet::standard_byte();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash_chained(data, &params);

        // =============================================================================
        // INCREMENTAL VARIATIONS
        // =============================================================================

        // 1. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            if let Ok(mut hasher) = ChainHasher::new(&params) {
                let fed: Result<(), _> = data
                    .iter()
                    .try_for_each(|b| hasher.update(std::slice::from_ref(b)));
                let res = fed.and_then(|()| hasher.finalize());
                assert_eq!(res, expected, "Byte-by-byte chaining mismatch");
            }
        }

        // 2. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                if let Ok(mut hasher) = ChainHasher::new(&params) {
                    let (first, second) = data.split_at(split_idx);
                    let res = hasher
                        .update(first)
                        .and_then(|()| hasher.update(second))
                        .and_then(|()| hasher.finalize());
                    assert_eq!(res, expected, "Split at {split_idx} mismatch");
                }
            }
        }

        // =============================================================================
        // SHAPE
        // =============================================================================

        if let Ok(digest) = &expected {
            let len = if data.len() >= 32 { 32 } else { data.len() };
            assert_eq!(digest.len(), len, "Unexpected digest length");
        }
    });
}
