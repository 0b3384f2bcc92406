//! Walk Kernels
//!
//! The simulation pipeline: state preparation, gates, the walk driver and
//! probability extraction.

pub mod constants;
pub mod extract;
pub mod gates;
pub mod state;
pub mod walk;
