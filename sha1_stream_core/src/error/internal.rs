//! Hash engine error types

use thiserror::Error;

/// Faults reported by the engine behind a digest
#[derive(Error, Debug)]
pub enum InternalError {
    /// The engine could not absorb a chunk
    #[error("Absorption failed for algorithm '{algorithm}': {message}")]
    Absorption { algorithm: String, message: String },

    /// The engine could not produce a digest from its accumulated state
    #[error("Finalization failed for algorithm '{algorithm}': {message}")]
    Finalization { algorithm: String, message: String },
}

impl InternalError {
    /// Create an absorption error
    pub fn absorption(algorithm: &str, message: &str) -> Self {
        Self::Absorption {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a finalization error
    pub fn finalization(algorithm: &str, message: &str) -> Self {
        Self::Finalization {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
        }
    }

    /// Name of the algorithm whose engine failed
    pub fn algorithm(&self) -> &str {
        match self {
            Self::Absorption { algorithm, .. } | Self::Finalization { algorithm, .. } => algorithm,
        }
    }
}
