// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Space hierarchy traversal
//!
//! A space holds folderless lists and folders; folders hold lists; lists
//! hold tasks. Every list is visited once and its tasks are read page by
//! page, so each task in the space is returned exactly once.

use std::collections::HashSet;

use clickup_api::{List, Task};
use tracing::{debug, info, warn};

use crate::client::TaskTracker;
use crate::pagination::collect_pages;

/// Enumerates every task in a space
pub struct HierarchyWalker<'a> {
    tracker: &'a dyn TaskTracker,
}

impl<'a> HierarchyWalker<'a> {
    pub fn new(tracker: &'a dyn TaskTracker) -> Self {
        Self { tracker }
    }

    /// All tasks in the space: folderless lists first, then each folder's
    /// lists. Unreachable containers contribute nothing.
    pub async fn enumerate_tasks(&self, space_id: &str) -> Vec<Task> {
        let folders = self.tracker.folders(space_id).await.unwrap_or_else(|| {
            warn!(space_id, "Could not fetch folders; continuing without them");
            Vec::new()
        });

        let folderless = self
            .tracker
            .folderless_lists(space_id)
            .await
            .unwrap_or_else(|| {
                warn!(space_id, "Could not fetch folderless lists; continuing without them");
                Vec::new()
            });

        info!(
            space_id,
            folders = folders.len(),
            folderless_lists = folderless.len(),
            "Walking space"
        );

        let mut seen = HashSet::new();
        let mut tasks = Vec::new();

        for list in &folderless {
            self.collect_list(list, &mut seen, &mut tasks).await;
        }

        for folder in &folders {
            // Lists are always fetched with this folder's own id
            let Some(lists) = self.tracker.folder_lists(&folder.id).await else {
                warn!(folder_id = %folder.id, "Could not fetch lists for folder; skipping it");
                continue;
            };
            info!(folder_id = %folder.id, folder = %folder.name, lists = lists.len(), "Walking folder");

            for list in &lists {
                self.collect_list(list, &mut seen, &mut tasks).await;
            }
        }

        info!(space_id, tasks = tasks.len(), "Found tasks");
        tasks
    }

    async fn collect_list(&self, list: &List, seen: &mut HashSet<String>, out: &mut Vec<Task>) {
        if !seen.insert(list.id.clone()) {
            warn!(list_id = %list.id, "List already visited; skipping duplicate");
            return;
        }

        let found = self.fetch_tasks(&list.id).await;
        info!(list_id = %list.id, list = %list.name, tasks = found.len(), "Fetched tasks");
        out.extend(found);
    }

    /// Every task in one list, following pages until a short one
    pub async fn fetch_tasks(&self, list_id: &str) -> Vec<Task> {
        let tracker = self.tracker;
        let (tasks, pages) = collect_pages(move |page| tracker.task_page(list_id, page)).await;
        debug!(list_id, pages, "Finished paging list");
        tasks
    }
}
