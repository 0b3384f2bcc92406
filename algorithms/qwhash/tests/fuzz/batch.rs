use bolero::check;
use qwhash::{hash_block, hash_blocks_batch, hash_chained, hash_chained_batch, ParameterSet};

#[test]
fn fuzz_batch_consistency() {
    let params = ParameterSet::standard_byte();

    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BATCH EXECUTION (RAYON)
        // =============================================================================

        // Every suffix becomes its own message, so lengths and errors vary
        // across the batch.
        let messages: Vec<&[u8]> = (0..data.len().min(8)).map(|i| &data[i..]).collect();
        let blocks = hash_blocks_batch(&messages, &params);
        let chains = hash_chained_batch(&messages, &params);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        for (i, message) in messages.iter().enumerate() {
            assert_eq!(blocks[i], hash_block(message, &params), "Batch block {i} mismatch");
            assert_eq!(chains[i], hash_chained(message, &params), "Batch chain {i} mismatch");
        }
    });
}
