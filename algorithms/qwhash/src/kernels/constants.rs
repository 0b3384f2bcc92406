//! Walk Constants
//!
//! Register sizes, bounds and scaling factors shared by every stage of the walk.
//!
//! ```text
//! basis index = coin << Q | position        (Q = log2(N))
//! digest byte = floor(p * 10^8) mod 256
//! ```

// =============================================================================
// BLOCK GEOMETRY
// =============================================================================

/// Block length used by `hash_block` when no explicit size is given.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Block length of the XOR-feedback chain.
pub const CHAIN_BLOCK_SIZE: usize = 32;

/// Smallest supported block (one position qubit).
pub const MIN_BLOCK_SIZE: usize = 2;

/// Largest supported block (20 position qubits, 2^21 amplitudes).
pub const MAX_BLOCK_SIZE: usize = 1 << 20;

/// Qubits in the coin register.
pub const COIN_QUBITS: usize = 1;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Entries in a byte-policy angle table (`byte % 8` selects one).
pub const ANGLE_TABLE_SIZE: usize = 8;

/// Message bits consumed per byte; also the digest bits per output byte.
pub const BITS_PER_BYTE: usize = 8;

// =============================================================================
// EXTRACTION
// =============================================================================

/// Probability scale applied before flooring (10^8).
pub const PROBABILITY_SCALE: f64 = 100_000_000.0;

/// Output byte modulus.
pub const BYTE_MODULUS: u64 = 256;

/// Tolerance for the unit-norm invariant.
pub const UNITARITY_TOLERANCE: f64 = 1e-9;
