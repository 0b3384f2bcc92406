//! CLI Commands
//!
//! All qwhash CLI commands organized as separate modules.

mod check;
mod config;
mod hash;

pub use check::check_mode;
pub use config::{resolve_config, ModeArg, PolicyArg};
pub use hash::{digest_reader, hash_inputs, OutputFormat};
