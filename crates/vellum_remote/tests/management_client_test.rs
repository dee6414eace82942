//! Contract tests for ManagementClient against a simulated management API.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET  | `/spaces/{id}` | `space_*` |
//! | GET  | `/spaces/{id}/assets` | `list_all_*` |
//! | POST | `/spaces/{id}/assets/` | `sign_*` |
//! | POST | `{post_url}` (blob store) | `transfer_*` |
//! | GET  | `/spaces/{id}/assets/{asset}/finish_upload` | `finalize_*` |

use std::collections::BTreeMap;
use std::time::Duration;
use tempfile::TempDir;
use vellum_core::{AssetId, LocalFile, RemoteConfig};
use vellum_error::{RemoteErrorKind, UploadStep, VellumErrorKind};
use vellum_remote::{
    AssetDirectory, AssetUploader, ManagementClient, SignRequest, SignedUploadTicket,
    UploadOptions, upload_file,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_config(base_url: &str, page_size: u32) -> RemoteConfig {
    RemoteConfig {
        base_url: base_url.to_string(),
        space_id: Some("288311".to_string()),
        management_token: Some("test-token".to_string()),
        step_timeout_secs: 5,
        page_size,
    }
}

fn test_client(mock_server: &MockServer) -> ManagementClient {
    ManagementClient::new(&remote_config(&mock_server.uri(), 100)).unwrap()
}

fn asset_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "filename": format!("https://a.storyblok.com/f/288311/{}", name),
        "short_filename": name,
        "alt": null,
        "title": null,
        "focus": null,
        "content_type": "image/png"
    })
}

fn remote_kind(err: &vellum_error::VellumError) -> &RemoteErrorKind {
    match err.kind() {
        VellumErrorKind::Remote(remote) => &remote.kind,
        other => panic!("unexpected error kind: {other}"),
    }
}

async fn write_media(dir: &TempDir, name: &str, content: &[u8]) -> LocalFile {
    let path = dir.path().join(name);
    tokio::fs::write(&path, content).await.unwrap();
    LocalFile::new(path, content.len() as u64).unwrap()
}

// ── construction ─────────────────────────────────────────────────────

#[test]
fn new_without_token_is_config_error() {
    let mut config = remote_config("http://127.0.0.1:1", 100);
    config.management_token = None;

    let err = ManagementClient::new(&config).unwrap_err();
    assert!(matches!(err.kind(), VellumErrorKind::Config(_)));
}

// ── GET /spaces/{id} ─────────────────────────────────────────────────

#[tokio::test]
async fn space_sends_token_and_returns_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311"))
        .and(header("authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "space": { "id": 288311, "name": "Marketing Site", "plan": "starter" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let space = test_client(&mock_server).check_connection().await.unwrap();
    assert_eq!(space.id, 288311);
    assert_eq!(space.name, "Marketing Site");
}

#[tokio::test]
async fn space_unauthorized_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).check_connection().await.unwrap_err();
    assert!(matches!(
        remote_kind(&err),
        RemoteErrorKind::Api { status: 401, .. }
    ));
}

// ── GET /spaces/{id}/assets ──────────────────────────────────────────

#[tokio::test]
async fn list_all_follows_pagination_until_short_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets"))
        .and(query_param("per_page", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "assets": [asset_json(1, "a.png"), asset_json(2, "b.png")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "assets": [asset_json(3, "c.png")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ManagementClient::new(&remote_config(&mock_server.uri(), 2)).unwrap();
    let assets = client.list_all().await.unwrap();

    let ids: Vec<_> = assets.iter().map(|a| a.id().clone()).collect();
    assert_eq!(
        ids,
        vec![AssetId::from(1u64), AssetId::from(2u64), AssetId::from(3u64)]
    );
}

#[tokio::test]
async fn list_all_empty_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "assets": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(test_client(&mock_server).list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).list_all().await.unwrap_err();
    match remote_kind(&err) {
        RemoteErrorKind::Api { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected remote error: {other}"),
    }
}

#[tokio::test]
async fn list_all_unreachable_is_unavailable() {
    // Nothing listens on a port released by a dropped listener.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = ManagementClient::new(&remote_config(&uri, 100)).unwrap();
    let err = client.list_all().await.unwrap_err();
    assert!(matches!(remote_kind(&err), RemoteErrorKind::Unavailable(_)));
}

#[tokio::test]
async fn list_all_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).list_all().await.unwrap_err();
    assert!(matches!(remote_kind(&err), RemoteErrorKind::Parse(_)));
}

// ── POST /spaces/{id}/assets/ ────────────────────────────────────────

#[tokio::test]
async fn sign_sends_filename_and_parses_ticket() {
    let mock_server = MockServer::start().await;
    let post_url = format!("{}/blob", mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/spaces/288311/assets/"))
        .and(body_json(serde_json::json!({
            "filename": "a.png",
            "validate_upload": 1,
            "asset_folder_id": 55
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9001,
            "post_url": post_url,
            "pretty_url": "//a.storyblok.com/f/288311/a.png",
            "fields": {
                "key": "f/288311/a.png",
                "policy": "cG9saWN5",
                "x-amz-signature": "sig",
                "success_action_status": 204
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ticket = test_client(&mock_server)
        .sign(&SignRequest::new("a.png", Some(55)))
        .await
        .unwrap();

    assert_eq!(ticket.asset_id(), &AssetId::from(9001u64));
    assert_eq!(ticket.post_url(), &post_url);
    assert_eq!(ticket.fields()["key"], "f/288311/a.png");
    assert_eq!(ticket.fields()["success_action_status"], "204");
}

#[test]
fn sign_omits_folder_when_unset() {
    let request = serde_json::to_value(SignRequest::new("a.png", None)).unwrap();
    assert!(request.get("asset_folder_id").is_none());
    assert_eq!(request["validate_upload"], 1);
}

// ── POST {post_url} ──────────────────────────────────────────────────

#[tokio::test]
async fn transfer_posts_ticket_fields_and_file_without_token() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let file = write_media(&temp_dir, "a.png", b"png-bytes").await;

    Mock::given(method("POST"))
        .and(path("/blob"))
        .and(body_string_contains("name=\"key\""))
        .and(body_string_contains("f/288311/a.png"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"a.png\""))
        .and(body_string_contains("png-bytes"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ticket = SignedUploadTicket::new(
        AssetId::from(9001u64),
        format!("{}/blob", mock_server.uri()),
        BTreeMap::from([("key".to_string(), "f/288311/a.png".to_string())]),
    );

    test_client(&mock_server)
        .transfer(&ticket, &file, b"png-bytes".to_vec())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn transfer_rejects_non_no_content_status() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let file = write_media(&temp_dir, "a.png", b"png-bytes").await;

    Mock::given(method("POST"))
        .and(path("/blob"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<PostResponse/>"))
        .mount(&mock_server)
        .await;

    let ticket = SignedUploadTicket::new(
        AssetId::from(1u64),
        format!("{}/blob", mock_server.uri()),
        BTreeMap::new(),
    );

    let err = test_client(&mock_server)
        .transfer(&ticket, &file, b"png-bytes".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(
        remote_kind(&err),
        RemoteErrorKind::Api { status: 200, .. }
    ));
}

// ── GET /spaces/{id}/assets/{asset}/finish_upload ────────────────────

#[tokio::test]
async fn finalize_returns_final_asset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets/9001/finish_upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_json(9001, "a.png")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let asset = test_client(&mock_server)
        .finalize(&AssetId::from(9001u64))
        .await
        .unwrap();
    assert_eq!(asset.filename(), "https://a.storyblok.com/f/288311/a.png");
    assert_eq!(asset.content_type().as_deref(), Some("image/png"));
}

// ── full handshake ───────────────────────────────────────────────────

#[tokio::test]
async fn upload_file_runs_all_three_steps() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let file = write_media(&temp_dir, "hero.jpg", b"jpeg-bytes").await;

    Mock::given(method("POST"))
        .and(path("/spaces/288311/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "post_url": format!("{}/blob", mock_server.uri()),
            "fields": { "key": "f/288311/hero.jpg" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/blob"))
        .and(body_string_contains("jpeg-bytes"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets/42/finish_upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_json(42, "hero.jpg")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = UploadOptions {
        asset_folder_id: None,
        step_timeout: Duration::from_secs(5),
    };
    let asset = upload_file(&client, &file, b"jpeg-bytes".to_vec(), &options)
        .await
        .unwrap();
    assert_eq!(asset.id(), &AssetId::from(42u64));
}

#[tokio::test]
async fn upload_file_tags_blob_rejection_as_transfer_step() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let file = write_media(&temp_dir, "hero.jpg", b"jpeg-bytes").await;

    Mock::given(method("POST"))
        .and(path("/spaces/288311/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "post_url": format!("{}/blob", mock_server.uri()),
            "fields": {}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/blob"))
        .respond_with(ResponseTemplate::new(403).set_body_string("AccessDenied"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/288311/assets/42/finish_upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_json(42, "hero.jpg")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = UploadOptions {
        asset_folder_id: None,
        step_timeout: Duration::from_secs(5),
    };
    let err = upload_file(&client, &file, b"jpeg-bytes".to_vec(), &options)
        .await
        .unwrap_err();
    assert_eq!(err.step, UploadStep::Transfer);
    assert!(err.cause.contains("403"));
}
