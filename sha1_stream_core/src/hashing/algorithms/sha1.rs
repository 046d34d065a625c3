//! SHA1 hash algorithm implementation

use crate::hashing::HashAlgorithm;
use crate::hashing::digest::Digest;
use crate::hashing::registry::AlgorithmRegistry;
use crate::hashing::traits::{Engine, EngineFault, StreamingHash};
use crate::{Result, error::InternalError};
use sha1::{Digest as Sha1Digest, Sha1};

/// The size of a SHA1 checksum in bytes
pub const SIZE: usize = 20;

/// The block size of SHA1 in bytes
pub const BLOCK_SIZE: usize = 64;

/// SHA1 compression engine
///
/// Finalizing pads the live state and leaves it reset, so the running hash is
/// gone afterwards. [`Digest`] snapshots around it.
#[derive(Clone, Debug, Default)]
pub struct Sha1Engine {
    hasher: Sha1,
}

impl Engine for Sha1Engine {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::SHA1;
    const SIZE: usize = SIZE;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn reset(&mut self) {
        Sha1Digest::reset(&mut self.hasher);
    }

    fn update(&mut self, data: &[u8]) -> std::result::Result<(), EngineFault> {
        Sha1Digest::update(&mut self.hasher, data);
        Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> std::result::Result<(), EngineFault> {
        if out.len() != SIZE {
            return Err(EngineFault::new(format!(
                "output buffer is {} bytes, expected {SIZE}",
                out.len()
            )));
        }
        out.copy_from_slice(&Sha1Digest::finalize_reset(&mut self.hasher));
        Ok(())
    }
}

/// Streaming SHA1 digest
pub type Sha1StreamingHasher = Digest<Sha1Engine>;

impl Digest<Sha1Engine> {
    /// Digest of everything absorbed so far as a fixed-size array
    pub fn sum_array(&mut self) -> Result<[u8; SIZE]> {
        let bytes = self.sum(Vec::with_capacity(SIZE))?;
        bytes.try_into().map_err(|bytes: Vec<u8>| {
            crate::Error::from(InternalError::finalization(
                HashAlgorithm::SHA1.name(),
                &format!("digest has {} bytes", bytes.len()),
            ))
        })
    }
}

/// Construct a boxed SHA1 hasher in the initial state
pub fn new() -> Box<dyn StreamingHash> {
    Box::new(Sha1StreamingHasher::new())
}

/// Publish SHA1 to `registry`; registering again is a no-op
pub fn register(registry: &AlgorithmRegistry) {
    registry.register(HashAlgorithm::SHA1, new);
}
