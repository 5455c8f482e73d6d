// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! ClickUp API Trait Definition
//!
//! **IMPORTANT**: This trait defines a *subset* of the ClickUp REST API v2.
//! It only covers the endpoints the progress step migration walks through:
//! the folder/list hierarchy of a space, paged task listings, and the single
//! task update used to set a status.
//!
//! The real API is served by ClickUp. This trait exists to:
//! 1. Document the exact API surface the migration depends on
//! 2. Share one set of wire types between the migration client and the stub
//! 3. Let the stub server implement the same routes for tests
//!
//! Reference: https://clickup.com/api/

use dropshot::{HttpError, HttpResponseOk, Path, Query, RequestContext, TypedBody};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Hierarchy Types
// ============================================================================

/// A folder inside a space. Lists are fetched separately per folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A list, either folderless (directly in a space) or inside a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct List {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Response from `GET /space/{space_id}/folder`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<Folder>,
}

/// Response from the two list endpoints (folderless and per folder)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListsResponse {
    #[serde(default)]
    pub lists: Vec<List>,
}

// ============================================================================
// Task Types
// ============================================================================

/// Status block embedded in a task. Only `status` (the name) matters to us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskStatus {
    /// Status name, e.g. "open" or "in review"
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Status category ("open", "custom", "closed", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl TaskStatus {
    pub fn named(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            color: None,
            kind: None,
        }
    }
}

/// A custom field attached to a task.
///
/// `value` is loosely typed upstream: dropdowns carry an integer, number
/// fields often carry a numeric string, and unset fields omit it or send null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomField {
    pub id: String,
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// A task as returned by the list-tasks endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Task {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub status: TaskStatus,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Task {
    /// Current status name
    pub fn status_name(&self) -> &str {
        &self.status.status
    }

    /// Look up a custom field on this task by field id
    pub fn custom_field(&self, field_id: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|f| f.id == field_id)
    }
}

/// Response from `GET /list/{list_id}/task`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TasksResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Set by newer API versions; the migration does not rely on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<bool>,
}

/// Body for `PUT /task/{task_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskRequest {
    pub status: String,
}

// ============================================================================
// Path and Query Parameters
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SpacePath {
    pub space_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FolderPath {
    pub folder_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListPath {
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskPath {
    pub task_id: String,
}

/// Query parameters for the list-tasks endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskPageQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<u32>,
}

// ============================================================================
// API Trait
// ============================================================================

/// ClickUp REST API v2 (Subset)
///
/// **IMPORTANT**: This is a partial definition of ClickUp's API containing only
/// the endpoints used by the progress step migration.
#[dropshot::api_description]
pub trait ClickupApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// List the folders of a space
    ///
    /// **ClickUp API Reference**: GET /api/v2/space/{space_id}/folder
    #[endpoint {
        method = GET,
        path = "/api/v2/space/{space_id}/folder",
        tags = ["folders"],
    }]
    async fn get_folders(
        rqctx: RequestContext<Self::Context>,
        path: Path<SpacePath>,
    ) -> Result<HttpResponseOk<FoldersResponse>, HttpError>;

    /// List the lists that live directly in a space
    ///
    /// **ClickUp API Reference**: GET /api/v2/space/{space_id}/list
    #[endpoint {
        method = GET,
        path = "/api/v2/space/{space_id}/list",
        tags = ["lists"],
    }]
    async fn get_folderless_lists(
        rqctx: RequestContext<Self::Context>,
        path: Path<SpacePath>,
    ) -> Result<HttpResponseOk<ListsResponse>, HttpError>;

    /// List the lists inside a folder
    ///
    /// **ClickUp API Reference**: GET /api/v2/folder/{folder_id}/list
    #[endpoint {
        method = GET,
        path = "/api/v2/folder/{folder_id}/list",
        tags = ["lists"],
    }]
    async fn get_lists(
        rqctx: RequestContext<Self::Context>,
        path: Path<FolderPath>,
    ) -> Result<HttpResponseOk<ListsResponse>, HttpError>;

    /// Get one page of tasks in a list
    ///
    /// Pages are zero-based and hold at most 100 tasks.
    ///
    /// **ClickUp API Reference**: GET /api/v2/list/{list_id}/task
    #[endpoint {
        method = GET,
        path = "/api/v2/list/{list_id}/task",
        tags = ["tasks"],
    }]
    async fn get_tasks(
        rqctx: RequestContext<Self::Context>,
        path: Path<ListPath>,
        query: Query<TaskPageQuery>,
    ) -> Result<HttpResponseOk<TasksResponse>, HttpError>;

    /// Update a task (only the status is modelled)
    ///
    /// **ClickUp API Reference**: PUT /api/v2/task/{task_id}
    #[endpoint {
        method = PUT,
        path = "/api/v2/task/{task_id}",
        tags = ["tasks"],
    }]
    async fn update_task(
        rqctx: RequestContext<Self::Context>,
        path: Path<TaskPath>,
        body: TypedBody<UpdateTaskRequest>,
    ) -> Result<HttpResponseOk<Task>, HttpError>;
}
