//! qwhash Basic Example
//!
//! Minimal usage: `let digest = qwhash::hash_chained(&data, &ParameterSet::default())?;`

#![allow(clippy::pedantic, clippy::nursery)]

use qwhash::{hash_block, hash_chained, ParameterSet, QwResult};

fn main() -> QwResult<()> {
    let data = b"Hello, World! Hello, quantum walk. Hello, XOR chain.";
    let params = ParameterSet::default();

    let block = hash_block(data, &params)?;
    let chained = hash_chained(data, &params)?;

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Block:   {}", hex::encode(block));
    println!("Chained: {}", hex::encode(chained));
    Ok(())
}
