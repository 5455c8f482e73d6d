// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ClickUp REST API client
//!
//! A wrapper around the Progenitor-generated clickup-client. Reads degrade
//! instead of failing: a transport error, a non-success status or an
//! undecodable body is logged and reported as "no data". Status updates
//! report plain success or failure. Nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use clickup_api::{Folder, List, Task, UpdateTaskRequest};
use clickup_client::{Client, ResponseValue};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::warn;

type UpstreamError = clickup_client::Error<clickup_client::types::Error>;

/// Client construction errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API token is not a valid header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Everything the client needs to talk to upstream
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Upstream root, without trailing slash
    pub base_url: String,
    /// Token sent verbatim in the `Authorization` header
    pub api_token: String,
    /// Timeout applied to each GET
    pub read_timeout: Duration,
}

/// The upstream operations the migration needs.
///
/// `None` from a read means "no data available"; callers carry on.
#[async_trait]
pub trait TaskTracker: Send + Sync {
    async fn folders(&self, space_id: &str) -> Option<Vec<Folder>>;

    async fn folderless_lists(&self, space_id: &str) -> Option<Vec<List>>;

    async fn folder_lists(&self, folder_id: &str) -> Option<Vec<List>>;

    /// One zero-based page of tasks in a list
    async fn task_page(&self, list_id: &str, page: u32) -> Option<Vec<Task>>;

    /// Set a task's status by name; true iff upstream accepted it
    async fn set_task_status(&self, task_id: &str, status: &str) -> bool;
}

/// Concrete client backed by the generated ClickUp client
#[derive(Clone)]
pub struct ApiClient {
    /// GETs, bounded by the configured read timeout
    reads: Client,
    /// The status update, on transport defaults
    writes: Client,
}

impl ApiClient {
    /// Create a new authenticated client
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        install_crypto_provider();

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&config.api_token)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let base_url = config.base_url.trim_end_matches('/');
        let user_agent = concat!("progress-step-migrate/", env!("CARGO_PKG_VERSION"));

        let reads = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers.clone())
            .timeout(config.read_timeout)
            .build()?;
        let writes = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            reads: Client::new_with_client(base_url, reads),
            writes: Client::new_with_client(base_url, writes),
        })
    }
}

/// Unwrap a response, or log why there is none
async fn settle<T>(
    result: Result<ResponseValue<T>, UpstreamError>,
    operation: &str,
    resource: &str,
) -> Option<T> {
    match result {
        Ok(response) => Some(response.into_inner()),
        Err(e) => {
            log_failure(e, operation, resource).await;
            None
        }
    }
}

/// Status and URL are already logged by the client hooks; add the body
async fn log_failure(err: UpstreamError, operation: &str, resource: &str) {
    match err {
        clickup_client::Error::ErrorResponse(response) => {
            let status = response.status();
            let body = response.into_inner();
            warn!(operation, resource, %status, body = %body.message, "Upstream rejected request");
        }
        clickup_client::Error::InvalidResponsePayload(bytes, e) => {
            let body = String::from_utf8_lossy(&bytes);
            warn!(operation, resource, %body, error = %e, "Failed to decode response body");
        }
        clickup_client::Error::UnexpectedResponse(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(operation, resource, %status, %body, "Unexpected upstream response");
        }
        other => {
            warn!(operation, resource, error = %other, "Request failed");
        }
    }
}

/// Select the ring provider for rustls; a provider installed earlier wins.
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[async_trait]
impl TaskTracker for ApiClient {
    async fn folders(&self, space_id: &str) -> Option<Vec<Folder>> {
        let result = self.reads.get_folders().space_id(space_id).send().await;
        settle(result, "get_folders", space_id)
            .await
            .map(|r| r.folders)
    }

    async fn folderless_lists(&self, space_id: &str) -> Option<Vec<List>> {
        let result = self
            .reads
            .get_folderless_lists()
            .space_id(space_id)
            .send()
            .await;
        settle(result, "get_folderless_lists", space_id)
            .await
            .map(|r| r.lists)
    }

    async fn folder_lists(&self, folder_id: &str) -> Option<Vec<List>> {
        let result = self.reads.get_lists().folder_id(folder_id).send().await;
        settle(result, "get_lists", folder_id)
            .await
            .map(|r| r.lists)
    }

    async fn task_page(&self, list_id: &str, page: u32) -> Option<Vec<Task>> {
        let result = self
            .reads
            .get_tasks()
            .list_id(list_id)
            .page(page)
            .send()
            .await;
        settle(result, "get_tasks", list_id)
            .await
            .map(|r| r.tasks)
    }

    async fn set_task_status(&self, task_id: &str, status: &str) -> bool {
        let result = self
            .writes
            .update_task()
            .task_id(task_id)
            .body(UpdateTaskRequest {
                status: status.to_string(),
            })
            .send()
            .await;
        settle(result, "update_task", task_id).await.is_some()
    }
}
