//! Central registry mapping algorithm identifiers to hasher constructors

use super::HashAlgorithm;
use super::traits::StreamingHash;
use crate::{Result, error::ValidationError};
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Constructor producing a hasher in its initial state
pub type HasherConstructor = fn() -> Box<dyn StreamingHash>;

/// Registry of available hash algorithms
pub struct AlgorithmRegistry {
    constructors: RwLock<HashMap<HashAlgorithm, HasherConstructor>>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Get the process-wide registry, registering the built-in algorithms on
    /// first access
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            debug!("Initializing global hash algorithm registry");
            let registry = Self::new();
            super::algorithms::register_all(&registry);
            registry
        })
    }

    /// Register `constructor` under `algorithm`, replacing any previous entry
    pub fn register(&self, algorithm: HashAlgorithm, constructor: HasherConstructor) {
        debug!("Registering hash algorithm {algorithm}");
        self.constructors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(algorithm, constructor);
    }

    /// Construct a fresh hasher for `algorithm`
    pub fn new_hasher(&self, algorithm: HashAlgorithm) -> Result<Box<dyn StreamingHash>> {
        let constructor = self
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&algorithm)
            .copied()
            .ok_or_else(|| ValidationError::unsupported_algorithm(algorithm.to_string()))?;
        Ok(constructor())
    }

    /// Whether a constructor is registered for `algorithm`
    pub fn is_available(&self, algorithm: HashAlgorithm) -> bool {
        self.constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&algorithm)
    }

    /// List registered algorithms, sorted by identifier
    pub fn list(&self) -> Vec<HashAlgorithm> {
        let mut algorithms: Vec<_> = self
            .constructors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        algorithms.sort();
        algorithms
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithms", &self.list())
            .finish()
    }
}
