//! Streaming SHA-1 digest library
//!
//! Provides an incremental SHA-1 digest behind the algorithm-agnostic
//! [`StreamingHash`] interface, a registry that hands out hashers by
//! [`HashAlgorithm`], and a calculator for hashing slices, readers and files.
//!
//! ```
//! use sha1_stream_core::{HashAlgorithm, StreamingHash, to_hex};
//!
//! sha1_stream_core::init();
//!
//! let mut hasher = HashAlgorithm::SHA1.new_hasher().unwrap();
//! hasher.write(b"ab").unwrap();
//! let partial = hasher.sum(Vec::new()).unwrap();
//! hasher.write(b"c").unwrap();
//!
//! assert_eq!(to_hex(&partial), "da23614e02469a0d7c7bd1bdab5c9c474b1904dc");
//! assert_eq!(
//!     to_hex(&hasher.sum(Vec::new()).unwrap()),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//! ```

pub mod config;
pub mod error;
pub mod hashing;

// Re-export main types
pub use config::HashingConfig;
pub use error::{Error, Result};
pub use hashing::{
    AlgorithmRegistry, Digest, Engine, EngineFault, HashAlgorithm, HashCalculator, HashResult,
    Sha1Engine, Sha1StreamingHasher, StreamingHash, to_hex,
};

/// Publish the built-in algorithms to the global registry
///
/// Safe to call any number of times; only the first call does any work.
/// Lookups through [`AlgorithmRegistry::global`] perform the same
/// initialization lazily, so calling this is only needed to control when it
/// happens.
pub fn init() {
    AlgorithmRegistry::global();
}
