//! Random topology generation.
//!
//! This module contains the edge and gate types, the draw primitives over a
//! seeded random stream, and the DAG generator built on top of them.

pub mod types;
pub mod sampling;
pub mod generator;

// Re-export key types and functions for easier access
pub use types::{Edge, GateCounts};
pub use generator::{generate, generate_with_rng, generate_with_seed, DEFAULT_SEED, EDGE_PROBABILITY};
