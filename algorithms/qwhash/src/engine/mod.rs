//! Execution Engine
//!
//! Per-call walk context and batch processing.

pub mod context;
pub mod parallel;

pub use context::WalkContext;
