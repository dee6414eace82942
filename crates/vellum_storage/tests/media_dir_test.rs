//! Tests for media directory scanning.

use tempfile::TempDir;
use vellum_core::MediaKind;
use vellum_storage::scan_media_dir;

#[tokio::test]
async fn test_scan_filters_to_allow_list_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    for name in ["c.gif", "a.png", "notes.txt", "b.JPG", "d.jpeg", "e.webp"] {
        tokio::fs::write(dir.join(name), name.as_bytes()).await.unwrap();
    }
    tokio::fs::create_dir(dir.join("nested.png")).await.unwrap();

    let files = scan_media_dir(dir).await.unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name().as_str()).collect();

    assert_eq!(names, vec!["a.png", "b.JPG", "c.gif", "d.jpeg"]);
    assert_eq!(*files[1].kind(), MediaKind::Jpg);
    assert_eq!(*files[0].byte_length(), "a.png".len() as u64);
    assert_eq!(files[0].path(), &dir.join("a.png"));
}

#[tokio::test]
async fn test_scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    assert!(scan_media_dir(temp_dir.path()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(scan_media_dir(temp_dir.path().join("media")).await.is_err());
}
