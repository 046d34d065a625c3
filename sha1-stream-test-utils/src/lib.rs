//! Test utilities for the streaming SHA-1 digest
//!
//! This crate provides a fault-injecting engine, chunk partition builders and
//! published SHA-1 test vectors.

pub mod builders;
pub mod mocks;
pub mod vectors;

// Re-export commonly used types
pub use builders::ChunkPlan;
pub use mocks::{FaultPlan, FaultyEngine};
pub use vectors::{KNOWN_VECTORS, KnownVector};
