// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Stub ClickUp server for testing
//!
//! This crate provides a Dropshot-based HTTP server that implements the
//! ClickUp API trait over a single in-memory space. It can be used for:
//!
//! - Integration testing of the progress step migration without a real
//!   ClickUp workspace
//! - Local dry runs against fixture data
//!
//! Task listings are paged 100 at a time like the real service. The stub
//! records every page request and every status update so tests can assert
//! on the exact traffic a migration produced.

use anyhow::{Context, Result};
use clickup_api::{
    Folder, FolderPath, FoldersResponse, List, ListPath, ListsResponse, SpacePath, Task,
    TaskPageQuery, TaskPath, TaskStatus, TasksResponse, UpdateTaskRequest,
};
use dropshot::{HttpError, HttpResponseOk, Path, Query, RequestContext, TypedBody};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Number of tasks served per page
pub const STUB_PAGE_SIZE: usize = 100;

// ============================================================================
// Fixture Data Types
// ============================================================================

/// A whole space: folderless lists plus folders holding lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSpace {
    pub space_id: String,
    #[serde(default)]
    pub folderless_lists: Vec<FixtureList>,
    #[serde(default)]
    pub folders: Vec<FixtureFolder>,
    /// Task ids whose updates are rejected with a 500
    #[serde(default)]
    pub failing_tasks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFolder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lists: Vec<FixtureList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureList {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl FixtureList {
    pub fn new(id: impl Into<String>, tasks: Vec<Task>) -> Self {
        let id = id.into();
        Self {
            name: format!("List {}", id),
            id,
            tasks,
        }
    }

    fn summary(&self) -> List {
        List {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl FixtureFolder {
    pub fn new(id: impl Into<String>, lists: Vec<FixtureList>) -> Self {
        let id = id.into();
        Self {
            name: format!("Folder {}", id),
            id,
            lists,
        }
    }
}

/// A status update received by the stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    pub task_id: String,
    pub status: String,
}

// ============================================================================
// Server Context
// ============================================================================

#[derive(Debug, Default)]
struct StubState {
    space: FixtureSpace,
    /// Page requests per list id
    page_requests: HashMap<String, usize>,
    updates: Vec<RecordedUpdate>,
}

impl StubState {
    fn all_lists(&self) -> impl Iterator<Item = &FixtureList> {
        self.space
            .folderless_lists
            .iter()
            .chain(self.space.folders.iter().flat_map(|f| f.lists.iter()))
    }

    fn find_list(&self, list_id: &str) -> Option<&FixtureList> {
        self.all_lists().find(|l| l.id == list_id)
    }

    fn find_task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.space
            .folderless_lists
            .iter_mut()
            .chain(self.space.folders.iter_mut().flat_map(|f| f.lists.iter_mut()))
            .flat_map(|l| l.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }
}

/// Context for the stub ClickUp server containing the fixture space
#[derive(Debug)]
pub struct StubContext {
    state: Mutex<StubState>,
    failing_tasks: HashSet<String>,
}

impl StubContext {
    /// Create a context serving the given space
    pub fn new(space: FixtureSpace) -> Self {
        let failing_tasks = space.failing_tasks.iter().cloned().collect();
        Self {
            state: Mutex::new(StubState {
                space,
                ..Default::default()
            }),
            failing_tasks,
        }
    }

    /// Load the space from `space.json` in the fixtures directory
    pub fn from_fixtures(fixtures_dir: &std::path::Path) -> Result<Self> {
        let path = fixtures_dir.join("space.json");
        let json_str = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let space: FixtureSpace = serde_json::from_str(&json_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self::new(space))
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        // A poisoned lock only means a handler panicked mid-update; the
        // fixture data is still usable for inspection.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn space_id(&self) -> String {
        self.lock().space.space_id.clone()
    }

    /// Total number of tasks across every list in the space
    pub fn task_count(&self) -> usize {
        self.lock().all_lists().map(|l| l.tasks.len()).sum()
    }

    /// How many pages of the given list have been requested
    pub fn page_requests(&self, list_id: &str) -> usize {
        self.lock().page_requests.get(list_id).copied().unwrap_or(0)
    }

    /// Every status update received, in arrival order
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.lock().updates.clone()
    }

    /// Current snapshot of a task
    pub fn task(&self, task_id: &str) -> Option<Task> {
        self.lock()
            .all_lists()
            .flat_map(|l| l.tasks.iter())
            .find(|t| t.id == task_id)
            .cloned()
    }
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub ClickUp API implementation
pub enum StubClickupApi {}

impl clickup_api::ClickupApi for StubClickupApi {
    type Context = Arc<StubContext>;

    async fn get_folders(
        rqctx: RequestContext<Self::Context>,
        path: Path<SpacePath>,
    ) -> Result<HttpResponseOk<FoldersResponse>, HttpError> {
        let state = rqctx.context().lock();
        let space_id = path.into_inner().space_id;
        check_space(&state, &space_id)?;

        let folders = state
            .space
            .folders
            .iter()
            .map(|f| Folder {
                id: f.id.clone(),
                name: f.name.clone(),
            })
            .collect();

        Ok(HttpResponseOk(FoldersResponse { folders }))
    }

    async fn get_folderless_lists(
        rqctx: RequestContext<Self::Context>,
        path: Path<SpacePath>,
    ) -> Result<HttpResponseOk<ListsResponse>, HttpError> {
        let state = rqctx.context().lock();
        let space_id = path.into_inner().space_id;
        check_space(&state, &space_id)?;

        let lists = state
            .space
            .folderless_lists
            .iter()
            .map(FixtureList::summary)
            .collect();

        Ok(HttpResponseOk(ListsResponse { lists }))
    }

    async fn get_lists(
        rqctx: RequestContext<Self::Context>,
        path: Path<FolderPath>,
    ) -> Result<HttpResponseOk<ListsResponse>, HttpError> {
        let state = rqctx.context().lock();
        let folder_id = path.into_inner().folder_id;

        let folder = state
            .space
            .folders
            .iter()
            .find(|f| f.id == folder_id)
            .ok_or_else(|| {
                HttpError::for_not_found(None, format!("Folder not found: {}", folder_id))
            })?;

        let lists = folder.lists.iter().map(FixtureList::summary).collect();

        Ok(HttpResponseOk(ListsResponse { lists }))
    }

    async fn get_tasks(
        rqctx: RequestContext<Self::Context>,
        path: Path<ListPath>,
        query: Query<TaskPageQuery>,
    ) -> Result<HttpResponseOk<TasksResponse>, HttpError> {
        let mut state = rqctx.context().lock();
        let list_id = path.into_inner().list_id;
        let page = query.into_inner().page.unwrap_or(0) as usize;

        let (tasks, total) = {
            let list = state.find_list(&list_id).ok_or_else(|| {
                HttpError::for_not_found(None, format!("List not found: {}", list_id))
            })?;
            let tasks: Vec<Task> = list
                .tasks
                .iter()
                .skip(page * STUB_PAGE_SIZE)
                .take(STUB_PAGE_SIZE)
                .cloned()
                .collect();
            (tasks, list.tasks.len())
        };

        *state.page_requests.entry(list_id).or_insert(0) += 1;

        let last_page = (page + 1) * STUB_PAGE_SIZE >= total;
        Ok(HttpResponseOk(TasksResponse {
            tasks,
            last_page: Some(last_page),
        }))
    }

    async fn update_task(
        rqctx: RequestContext<Self::Context>,
        path: Path<TaskPath>,
        body: TypedBody<UpdateTaskRequest>,
    ) -> Result<HttpResponseOk<Task>, HttpError> {
        let ctx = rqctx.context();
        let task_id = path.into_inner().task_id;
        let body = body.into_inner();

        if ctx.failing_tasks.contains(&task_id) {
            return Err(HttpError::for_internal_error(format!(
                "injected failure for task {}",
                task_id
            )));
        }

        let mut state = ctx.lock();
        let task = state.find_task_mut(&task_id).ok_or_else(|| {
            HttpError::for_not_found(None, format!("Task not found: {}", task_id))
        })?;
        task.status = TaskStatus::named(body.status.clone());
        let updated = task.clone();

        state.updates.push(RecordedUpdate {
            task_id,
            status: body.status,
        });

        Ok(HttpResponseOk(updated))
    }
}

fn check_space(state: &StubState, space_id: &str) -> Result<(), HttpError> {
    if state.space.space_id == space_id {
        Ok(())
    } else {
        Err(HttpError::for_not_found(
            None,
            format!("Space not found: {}", space_id),
        ))
    }
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<Arc<StubContext>>, String> {
    clickup_api::clickup_api_mod::api_description::<StubClickupApi>().map_err(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
