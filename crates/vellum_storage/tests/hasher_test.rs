//! Tests for content fingerprinting.

use tempfile::TempDir;
use vellum_error::{StorageErrorKind, VellumErrorKind};
use vellum_storage::{fingerprint_bytes, fingerprint_file};

#[tokio::test]
async fn test_fingerprint_is_stable_across_calls() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ten.png");
    tokio::fs::write(&path, b"0123456789").await.unwrap();

    let first = fingerprint_file(&path).await.unwrap();
    let second = fingerprint_file(&path).await.unwrap();
    let third = fingerprint_file(&path).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first, fingerprint_bytes(b"0123456789"));
}

#[tokio::test]
async fn test_one_byte_difference_changes_fingerprint() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.png");
    let b = temp_dir.path().join("b.png");
    tokio::fs::write(&a, b"0123456789").await.unwrap();
    tokio::fs::write(&b, b"0123456788").await.unwrap();

    assert_ne!(
        fingerprint_file(&a).await.unwrap(),
        fingerprint_file(&b).await.unwrap()
    );
}

#[test]
fn test_fingerprint_is_lowercase_sha256_hex() {
    let fp = fingerprint_bytes(b"abc");
    assert_eq!(
        fp.as_str(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(fp.as_str().len(), 64);
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = fingerprint_file(temp_dir.path().join("gone.jpg")).await;

    let err = result.unwrap_err();
    match err.kind() {
        VellumErrorKind::Storage(storage) => {
            assert!(matches!(storage.kind, StorageErrorKind::NotFound(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_read_media_returns_bytes_that_fingerprint_alike() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logo.gif");
    tokio::fs::write(&path, b"GIF89a").await.unwrap();

    let data = vellum_storage::read_media(&path).await.unwrap();
    assert_eq!(data, b"GIF89a");
    assert_eq!(fingerprint_bytes(&data), fingerprint_file(&path).await.unwrap());
}
