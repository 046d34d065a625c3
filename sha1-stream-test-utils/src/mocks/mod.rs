//! Mock implementations for testing

mod engine;

pub use engine::{FaultPlan, FaultyEngine};
