//! Tests for the resolved asset snapshot store.

use tempfile::TempDir;
use vellum_core::{AssetId, RemoteAssetBuilder, ResolvedAsset};
use vellum_storage::{JsonSnapshotStore, SnapshotStore};

fn resolved(id: u64, name: &str) -> ResolvedAsset {
    let remote = RemoteAssetBuilder::default()
        .id(AssetId::from(id))
        .filename(format!("https://a.storyblok.com/f/1/{}/{}", id, name))
        .content_type("image/png")
        .build()
        .unwrap();
    ResolvedAsset::from_remote(&remote, name)
}

#[tokio::test]
async fn test_load_before_any_run_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(temp_dir.path().join("uploaded-assets.json"));
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_preserves_order_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(temp_dir.path().join("data/uploaded-assets.json"));

    let first = vec![resolved(3, "z.png"), resolved(1, "a.png")];
    store.save(&first).await.unwrap();
    assert_eq!(store.load().await.unwrap().unwrap(), first);

    let second = vec![resolved(2, "m.png")];
    store.save(&second).await.unwrap();
    assert_eq!(store.load().await.unwrap().unwrap(), second);
}

#[tokio::test]
async fn test_document_uses_snake_case_content_type() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("uploaded-assets.json");
    let store = JsonSnapshotStore::new(&path);
    store.save(&[resolved(1, "a.png")]).await.unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let item = &value[0];
    assert_eq!(item["content_type"], "image/png");
    assert_eq!(item["name"], "a.png");
    assert_eq!(item["alt"], "");
    assert!(item["focus"].is_null());
}
