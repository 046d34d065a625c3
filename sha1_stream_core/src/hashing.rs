//! Streaming hash calculation
//!
//! Algorithms are identified by [`HashAlgorithm`] and constructed through the
//! [`AlgorithmRegistry`]. Every hasher implements [`StreamingHash`], whose
//! `sum` can be called mid-stream without ending the stream.

use crate::config::HashingConfig;
use crate::{
    Error, Result,
    error::{IoError, ValidationError},
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;

pub mod algorithms;
mod digest;
mod registry;
mod traits;

pub use algorithms::sha1::{Sha1Engine, Sha1StreamingHasher};
pub use digest::Digest;
pub use registry::{AlgorithmRegistry, HasherConstructor};
pub use traits::{Engine, EngineFault, StreamingHash};

/// Hash algorithm identifiers
///
/// An identifier is only usable once a constructor has been registered for it;
/// see [`HashAlgorithm::is_available`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HashAlgorithm {
    /// MD5 message digest
    MD5,
    /// SHA-1 message digest
    SHA1,
    /// SHA-256 message digest
    SHA256,
}

impl HashAlgorithm {
    /// Display name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "MD5",
            HashAlgorithm::SHA1 => "SHA1",
            HashAlgorithm::SHA256 => "SHA256",
        }
    }

    /// Whether the global registry can construct this algorithm
    pub fn is_available(&self) -> bool {
        AlgorithmRegistry::global().is_available(*self)
    }

    /// Construct a fresh hasher through the global registry
    pub fn new_hasher(&self) -> Result<Box<dyn StreamingHash>> {
        AlgorithmRegistry::global().new_hasher(*self)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::MD5 => write!(f, "md5"),
            HashAlgorithm::SHA1 => write!(f, "sha1"),
            HashAlgorithm::SHA256 => write!(f, "sha256"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::SHA1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::SHA256),
            _ => Err(Error::Validation(ValidationError::unsupported_algorithm(s))),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Result of hash calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    /// Lowercase hex digest
    pub hash: String,
    pub input_size: u64,
    pub duration: Duration,
}

/// Drives registry-constructed hashers over slices, readers and files
#[derive(Debug, Clone, Default)]
pub struct HashCalculator {
    config: HashingConfig,
}

impl HashCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a validated configuration
    pub fn with_config(config: HashingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    /// Calculate hash for byte data
    pub fn calculate_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<HashResult> {
        let start_time = Instant::now();
        let mut hasher = algorithm.new_hasher()?;
        hasher.write(data)?;

        finish(algorithm, hasher.as_mut(), data.len() as u64, start_time)
    }

    /// Calculate hash for a reader, consuming it in `chunk_size` pieces
    pub fn calculate_reader<R: Read>(
        &self,
        algorithm: HashAlgorithm,
        mut reader: R,
    ) -> Result<HashResult> {
        let start_time = Instant::now();
        let mut hasher = algorithm.new_hasher()?;
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut total = 0u64;

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            trace!("Read {read} bytes for {algorithm}");
            hasher.write(&buffer[..read])?;
            total += read as u64;
        }

        finish(algorithm, hasher.as_mut(), total, start_time)
    }

    /// Calculate hash for a file without loading it into memory
    pub async fn calculate_file(
        &self,
        file_path: &Path,
        algorithm: HashAlgorithm,
    ) -> Result<HashResult> {
        let start_time = Instant::now();
        let mut file = tokio::fs::File::open(file_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => IoError::file_not_found(file_path),
                _ => IoError::from_std(e).with_path(file_path),
            })?;

        debug!("Hashing {} with {algorithm}", file_path.display());
        let mut hasher = algorithm.new_hasher()?;
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut total = 0u64;

        loop {
            let read = file
                .read(&mut buffer)
                .await
                .map_err(|e| IoError::from_std(e).with_path(file_path))?;
            if read == 0 {
                break;
            }
            hasher.write(&buffer[..read])?;
            total += read as u64;
        }

        finish(algorithm, hasher.as_mut(), total, start_time)
    }

    /// Calculate hash with the configured default algorithm
    pub fn calculate_default(&self, data: &[u8]) -> Result<HashResult> {
        self.calculate_bytes(self.config.algorithm, data)
    }
}

fn finish(
    algorithm: HashAlgorithm,
    hasher: &mut dyn StreamingHash,
    input_size: u64,
    start_time: Instant,
) -> Result<HashResult> {
    let size = hasher.size();
    let digest = hasher.sum(Vec::with_capacity(size))?;
    let result = HashResult {
        algorithm,
        hash: to_hex(&digest),
        input_size,
        duration: start_time.elapsed(),
    };
    debug!(
        "{algorithm} over {input_size} bytes finished in {:?}",
        result.duration
    );
    Ok(result)
}

/// Lowercase hex encoding of a digest
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
