//! Hashing files and readers through the calculator

use sha1_stream_core::error::{IoError, IoErrorKind};
use sha1_stream_core::{Error, HashAlgorithm, HashCalculator, HashingConfig};
use sha1_stream_test_utils::vectors::{ABC_DIGEST, EMPTY_DIGEST, MILLION_A_DIGEST};
use tempfile::TempDir;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

async fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).await.unwrap();
    file.write_all(data).await.unwrap();
    file.sync_all().await.unwrap();
    path
}

#[tokio::test]
async fn test_file_matches_known_digest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "abc.bin", b"abc").await;

    let result = HashCalculator::new()
        .calculate_file(&path, HashAlgorithm::SHA1)
        .await
        .unwrap();

    assert_eq!(result.hash, ABC_DIGEST);
    assert_eq!(result.input_size, 3);
}

#[tokio::test]
async fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "empty.bin", b"").await;

    let result = HashCalculator::new()
        .calculate_file(&path, HashAlgorithm::SHA1)
        .await
        .unwrap();

    assert_eq!(result.hash, EMPTY_DIGEST);
    assert_eq!(result.input_size, 0);
}

#[tokio::test]
async fn test_large_file_with_odd_chunk_size() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "million.bin", &vec![b'a'; 1_000_000]).await;

    let config = HashingConfig {
        chunk_size: 4093,
        ..HashingConfig::default()
    };
    let result = HashCalculator::with_config(config)
        .unwrap()
        .calculate_file(&path, HashAlgorithm::SHA1)
        .await
        .unwrap();

    assert_eq!(result.hash, MILLION_A_DIGEST);
    assert_eq!(result.input_size, 1_000_000);
}

#[tokio::test]
async fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.bin");

    let error = HashCalculator::new()
        .calculate_file(&path, HashAlgorithm::SHA1)
        .await
        .unwrap_err();

    match error {
        Error::Io(IoError { kind, path: Some(error_path), .. }) => {
            assert_eq!(kind, IoErrorKind::FileNotFound);
            assert_eq!(error_path, path);
        }
        other => panic!("Expected file not found, got {other}"),
    }
}

#[tokio::test]
async fn test_file_with_unavailable_algorithm() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "abc.bin", b"abc").await;

    let error = HashCalculator::new()
        .calculate_file(&path, HashAlgorithm::SHA256)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("sha256"));
}

#[test]
fn test_reader_error_is_io_error() {
    struct Failing;

    impl std::io::Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    let error = HashCalculator::new()
        .calculate_reader(HashAlgorithm::SHA1, Failing)
        .unwrap_err();

    match error {
        Error::Io(io_err) => {
            assert_eq!(io_err.kind, IoErrorKind::Read);
            assert!(io_err.to_string().contains("device unplugged"));
        }
        other => panic!("Expected Io error, got {other}"),
    }
}
