//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;

pub mod sha1;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &AlgorithmRegistry) {
    sha1::register(registry);
}
