//! Builders for test inputs

mod chunks;

pub use chunks::ChunkPlan;
