//! Batch Execution Engine
//!
//! Hashes many independent messages at once. Each message owns its own walk
//! state, so messages are spread across threads with Rayon when the
//! `multithread` feature is enabled, and hashed serially otherwise. Blocks
//! inside one chain are always sequential.

use crate::oneshot::{hash_block, hash_chained};
use crate::types::{ParameterSet, QwResult};

// =============================================================================
// BATCH API
// =============================================================================

/// Block-hash every message; results are in input order.
///
/// # Example
/// ```rust
/// use qwhash::{hash_block, hash_blocks_batch, ParameterSet};
///
/// let params = ParameterSet::default();
/// let messages = [[1u8; 32], [2u8; 32]];
/// let digests = hash_blocks_batch(&messages, &params);
/// assert_eq!(digests[1], hash_block(&messages[1], &params));
/// ```
pub fn hash_blocks_batch<M>(messages: &[M], params: &ParameterSet) -> Vec<QwResult<Vec<u8>>>
where
    M: AsRef<[u8]> + Sync,
{
    messages.process_each(|message| hash_block(message.as_ref(), params))
}

/// Chain-hash every message; results are in input order.
pub fn hash_chained_batch<M>(messages: &[M], params: &ParameterSet) -> Vec<QwResult<Vec<u8>>>
where
    M: AsRef<[u8]> + Sync,
{
    messages.process_each(|message| hash_chained(message.as_ref(), params))
}

/// Helper for feature-agnostic per-message processing
trait BatchProcessor<T> {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send;
}

impl<T: Sync> BatchProcessor<T> for &[T] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
