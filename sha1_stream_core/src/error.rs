//! Error types for the streaming digest library
//!
//! Errors are split into categories the same way callers tend to handle them:
//! engine faults surfaced by a digest, invalid input or configuration, and I/O
//! failures while feeding a digest from a reader or file.

use thiserror::Error;

pub mod internal;
pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;
pub use internal::InternalError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the streaming digest library
///
/// - I/O errors: reading input for the calculator
/// - Validation errors: unknown algorithms, bad configuration or parameters
/// - Internal errors: faults reported by a hash engine
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Hash engine errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Whether the error came from the hash engine itself rather than from input handling
    pub fn is_engine_fault(&self) -> bool {
        matches!(
            self,
            Self::Internal(InternalError::Absorption { .. } | InternalError::Finalization { .. })
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Validation(ValidationError::invalid_configuration(&err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::path::Path;

    #[test]
    fn test_absorption_error_creation() {
        let error = Error::Internal(InternalError::absorption("SHA1", "update rejected"));

        match error {
            Error::Internal(InternalError::Absorption { algorithm, message }) => {
                assert_eq!(algorithm, "SHA1");
                assert_eq!(message, "update rejected");
            }
            _ => panic!("Expected Internal::Absorption error"),
        }
    }

    #[test]
    fn test_engine_fault_classification() {
        assert!(Error::Internal(InternalError::absorption("SHA1", "x")).is_engine_fault());
        assert!(Error::Internal(InternalError::finalization("SHA1", "x")).is_engine_fault());
        assert!(!Error::Validation(ValidationError::invalid_configuration("x")).is_engine_fault());
        assert!(!Error::Io(IoError::file_not_found(Path::new("/x"))).is_engine_fault());
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::FileNotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::Io(IoError::permission_denied(Path::new("/data.bin"), io_error));

        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_hash_errors_include_algorithm_context() {
        for algorithm in ["SHA1", "MD5", "SHA256"] {
            let error = Error::Internal(InternalError::finalization(algorithm, "Test error"));
            assert!(error.to_string().contains(algorithm));
        }
    }
}
