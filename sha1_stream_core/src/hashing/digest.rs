//! Streaming digest with non-destructive finalization
//!
//! A [`Digest`] drives an [`Engine`] whose finalize step consumes its running
//! state. To let callers read the digest and keep writing, `sum` copies the
//! engine state, finalizes the live engine, then puts the copy back. The
//! restore happens whether or not finalization succeeded.

use super::HashAlgorithm;
use super::traits::{Engine, StreamingHash};
use crate::{Result, error::InternalError};
use log::{trace, warn};

/// Mutable, sequentially used digest over a compression engine
///
/// Not safe for concurrent use; every operation that touches the engine takes
/// `&mut self`. Wrap it in a `Mutex` to share one instance.
#[derive(Clone, Debug)]
pub struct Digest<E: Engine> {
    engine: E,
    absorbed: u64,
}

impl<E: Engine + Default> Digest<E> {
    /// Create a digest in the initial state
    pub fn new() -> Self {
        Self::with_engine(E::default())
    }
}

impl<E: Engine + Default> Default for Digest<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Digest<E> {
    /// Wrap an existing engine, resetting it first
    pub fn with_engine(engine: E) -> Self {
        let mut digest = Self {
            engine,
            absorbed: 0,
        };
        digest.reset();
        digest
    }

    /// Discard all absorbed data
    pub fn reset(&mut self) {
        self.engine.reset();
        self.absorbed = 0;
    }

    /// Digest length in bytes
    pub fn size(&self) -> usize {
        E::SIZE
    }

    /// Compression block length in bytes
    pub fn block_size(&self) -> usize {
        E::BLOCK_SIZE
    }

    /// Number of bytes absorbed since construction or the last reset
    pub fn bytes_absorbed(&self) -> u64 {
        self.absorbed
    }

    /// Absorb `data`
    ///
    /// Empty input never reaches the engine. On failure nothing about partial
    /// progress is reported and the digest should be discarded or reset.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }

        trace!("{} absorbing {} bytes", E::ALGORITHM.name(), data.len());
        match self.engine.update(data) {
            Ok(()) => {
                self.absorbed += data.len() as u64;
                Ok(data.len())
            }
            Err(fault) => {
                warn!("{} engine rejected input: {fault}", E::ALGORITHM.name());
                Err(InternalError::absorption(E::ALGORITHM.name(), fault.message()).into())
            }
        }
    }

    /// Append the digest of everything absorbed so far to `prefix`
    pub fn sum(&mut self, mut prefix: Vec<u8>) -> Result<Vec<u8>> {
        let start = prefix.len();
        prefix.resize(start + E::SIZE, 0);

        let snapshot = self.engine.clone();
        let outcome = self.engine.finalize_into(&mut prefix[start..]);
        self.engine = snapshot;

        match outcome {
            Ok(()) => Ok(prefix),
            Err(fault) => {
                warn!("{} engine failed to finalize: {fault}", E::ALGORITHM.name());
                Err(InternalError::finalization(E::ALGORITHM.name(), fault.message()).into())
            }
        }
    }
}

impl<E: Engine + 'static> StreamingHash for Digest<E> {
    fn algorithm(&self) -> HashAlgorithm {
        E::ALGORITHM
    }

    fn reset(&mut self) {
        Digest::reset(self);
    }

    fn size(&self) -> usize {
        E::SIZE
    }

    fn block_size(&self) -> usize {
        E::BLOCK_SIZE
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        Digest::write(self, data)
    }

    fn sum(&mut self, prefix: Vec<u8>) -> Result<Vec<u8>> {
        Digest::sum(self, prefix)
    }
}

impl<E: Engine> std::io::Write for Digest<E> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Digest::write(self, buf).map_err(std::io::Error::other)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
