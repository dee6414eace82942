//! Storyblok management API client.

use crate::{AssetDirectory, AssetUploader, SignRequest, SignedUploadTicket};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use vellum_core::{AssetId, LocalFile, RemoteAsset, RemoteConfig};
use vellum_error::{ConfigError, RemoteError, RemoteErrorKind, VellumResult};

/// Basic facts about the configured space.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpaceInfo {
    /// Space identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

#[derive(Deserialize)]
struct SpaceEnvelope {
    space: SpaceInfo,
}

#[derive(Deserialize)]
struct AssetPage {
    assets: Vec<RemoteAsset>,
}

#[derive(Deserialize)]
struct SignResponse {
    id: AssetId,
    post_url: String,
    #[serde(default)]
    fields: BTreeMap<String, serde_json::Value>,
}

/// Client for the asset endpoints of the management API.
///
/// Management calls carry the token in the `Authorization` header. Blob transfers go
/// through a separate client without it, since the signed form is the only
/// credential the blob store accepts.
#[derive(Debug, Clone)]
pub struct ManagementClient {
    api: Client,
    blob: Client,
    base_url: String,
    space_id: String,
    page_size: u32,
    timeout: Duration,
}

impl ManagementClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if credentials are missing or the token is not a
    /// valid header value, and a remote error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: &RemoteConfig) -> VellumResult<Self> {
        let space_id = config.require_space_id()?.to_string();
        let token = config.require_management_token()?;

        let mut auth = HeaderValue::from_str(token)
            .map_err(|_| ConfigError::new("Management token is not a valid header value"))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let api = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                RemoteError::new(RemoteErrorKind::Unavailable(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        let blob = Client::builder().build().map_err(|e| {
            RemoteError::new(RemoteErrorKind::Unavailable(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        debug!(space_id = %space_id, "Creating management client");
        Ok(Self {
            api,
            blob,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space_id,
            page_size: config.page_size,
            timeout: config.step_timeout(),
        })
    }

    fn space_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/spaces/{}", self.base_url, self.space_id)
        } else {
            format!("{}/spaces/{}/{}", self.base_url, self.space_id, path)
        }
    }

    /// Send a management request and decode its JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> VellumResult<T> {
        let response = request.timeout(self.timeout).send().await.map_err(|e| {
            error!(error = %e, "Request to management API failed");
            RemoteError::new(RemoteErrorKind::Unavailable(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Management API returned error");
            return Err(RemoteError::new(RemoteErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse management API response");
            RemoteError::new(RemoteErrorKind::Parse(e.to_string()))
        })?;
        Ok(parsed)
    }

    /// Fetch the configured space, confirming credentials and connectivity.
    #[instrument(skip(self), fields(space_id = %self.space_id))]
    pub async fn check_connection(&self) -> VellumResult<SpaceInfo> {
        let envelope: SpaceEnvelope = self.send_json(self.api.get(self.space_url(""))).await?;
        info!(name = %envelope.space.name, "Connected to space");
        Ok(envelope.space)
    }
}

#[async_trait::async_trait]
impl AssetDirectory for ManagementClient {
    #[instrument(skip(self), fields(space_id = %self.space_id))]
    async fn list_all(&self) -> VellumResult<Vec<RemoteAsset>> {
        let url = self.space_url("assets");
        let mut assets = Vec::new();
        let mut page = 1u32;

        loop {
            let request = self.api.get(&url).query(&[
                ("per_page", self.page_size.to_string()),
                ("page", page.to_string()),
            ]);
            let batch: AssetPage = self.send_json(request).await?;
            let received = batch.assets.len();
            assets.extend(batch.assets);

            debug!(page, received, "Fetched asset page");
            if received == 0 || received < self.page_size as usize {
                break;
            }
            page += 1;
        }

        info!(count = assets.len(), "Fetched existing assets");
        Ok(assets)
    }
}

#[async_trait::async_trait]
impl AssetUploader for ManagementClient {
    #[instrument(skip(self, request), fields(filename = %request.filename))]
    async fn sign(&self, request: &SignRequest) -> VellumResult<SignedUploadTicket> {
        let response: SignResponse = self
            .send_json(self.api.post(self.space_url("assets/")).json(request))
            .await?;

        let fields = response
            .fields
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(text) => (key, text),
                other => (key, other.to_string()),
            })
            .collect();

        Ok(SignedUploadTicket::new(response.id, response.post_url, fields))
    }

    #[instrument(skip(self, ticket, file, data), fields(file = %file.name(), size = data.len()))]
    async fn transfer(
        &self,
        ticket: &SignedUploadTicket,
        file: &LocalFile,
        data: Vec<u8>,
    ) -> VellumResult<()> {
        let mut form = Form::new();
        for (key, value) in ticket.fields() {
            form = form.text(key.clone(), value.clone());
        }

        let part = Part::bytes(data)
            .file_name(file.name().clone())
            .mime_str(file.kind().mime_type())
            .map_err(|e| RemoteError::new(RemoteErrorKind::Parse(e.to_string())))?;
        form = form.part("file", part);

        let response = self
            .blob
            .post(ticket.post_url())
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Blob transfer failed");
                RemoteError::new(RemoteErrorKind::Unavailable(format!("Transfer failed: {}", e)))
            })?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Blob store rejected upload");
            return Err(RemoteError::new(RemoteErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(asset_id = %asset_id))]
    async fn finalize(&self, asset_id: &AssetId) -> VellumResult<RemoteAsset> {
        let url = self.space_url(&format!("assets/{}/finish_upload", asset_id));
        self.send_json(self.api.get(url)).await
    }
}
