//! Core traits for the algorithm-agnostic hashing interface

use super::HashAlgorithm;
use crate::Result;
use std::fmt;

/// Streaming hash contract shared by every registered algorithm
///
/// `sum` is an observation: after it returns, the hasher keeps accepting
/// writes as if `sum` had never been called.
pub trait StreamingHash: Send {
    /// Identifier this hasher was registered under
    fn algorithm(&self) -> HashAlgorithm;

    /// Discard all absorbed data and return to the initial state
    fn reset(&mut self);

    /// Digest length in bytes
    fn size(&self) -> usize;

    /// Block length the compression function works on, in bytes
    fn block_size(&self) -> usize;

    /// Absorb `data`, returning `data.len()` on success
    ///
    /// Either everything is absorbed or an error is returned; no partial count
    /// is ever reported.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Append the digest of everything written so far to `prefix`
    fn sum(&mut self, prefix: Vec<u8>) -> Result<Vec<u8>>;
}

/// Fault reported by a hash engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFault {
    message: String,
}

impl EngineFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Compression backend driven by a [`Digest`](super::Digest)
///
/// `finalize_into` is allowed to consume the running state: padding and the
/// length block are applied in place, after which the engine is in an
/// unspecified state until `reset`. `Clone` must copy the complete state by
/// value so a digest can snapshot it before finalizing.
pub trait Engine: Clone + Send {
    /// Algorithm this engine computes
    const ALGORITHM: HashAlgorithm;

    /// Digest length in bytes
    const SIZE: usize;

    /// Compression block length in bytes
    const BLOCK_SIZE: usize;

    /// Load the initial hash values and zero the length counter
    fn reset(&mut self);

    /// Absorb a chunk of input
    fn update(&mut self, data: &[u8]) -> std::result::Result<(), EngineFault>;

    /// Write the digest into `out`, which is exactly `SIZE` bytes long
    fn finalize_into(&mut self, out: &mut [u8]) -> std::result::Result<(), EngineFault>;
}
