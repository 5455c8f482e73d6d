// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory [`TaskTracker`] for unit tests

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use clickup_api::{CustomField, Folder, List, Task, TaskStatus};

use crate::client::TaskTracker;
use crate::pagination::FULL_PAGE_SIZE;

pub const PROGRESS_FIELD_ID: &str = "cf-progress";

pub fn task(id: &str, status: &str, custom_fields: Vec<CustomField>) -> Task {
    Task {
        id: id.to_string(),
        name: format!("Task {}", id),
        status: TaskStatus::named(status),
        custom_fields,
    }
}

pub fn field(id: &str, name: &str, value: Option<serde_json::Value>) -> CustomField {
    CustomField {
        id: id.to_string(),
        name: name.to_string(),
        field_type: Some("drop_down".to_string()),
        value,
    }
}

pub fn progress(value: serde_json::Value) -> CustomField {
    field(PROGRESS_FIELD_ID, "Progress Step", Some(value))
}

pub fn numbered_tasks(prefix: &str, count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| task(&format!("{}-{}", prefix, i), "open", Vec::new()))
        .collect()
}

fn list(id: &str) -> List {
    List {
        id: id.to_string(),
        name: format!("List {}", id),
    }
}

#[derive(Default)]
pub struct FakeTracker {
    folders: Vec<Folder>,
    folderless: Vec<List>,
    lists_by_folder: HashMap<String, Vec<List>>,
    tasks_by_list: Mutex<HashMap<String, Vec<Task>>>,
    unreachable_lists: HashSet<String>,
    reject_updates: bool,

    pub page_calls: Mutex<Vec<(String, u32)>>,
    pub folder_list_calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<(String, String)>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folderless_list(mut self, list_id: &str, tasks: Vec<Task>) -> Self {
        self.folderless.push(list(list_id));
        self.tasks_by_list
            .get_mut()
            .unwrap()
            .insert(list_id.to_string(), tasks);
        self
    }

    pub fn with_folder(mut self, folder_id: &str, lists: Vec<(&str, Vec<Task>)>) -> Self {
        self.folders.push(Folder {
            id: folder_id.to_string(),
            name: format!("Folder {}", folder_id),
        });
        let entry = self
            .lists_by_folder
            .entry(folder_id.to_string())
            .or_default();
        for (list_id, tasks) in lists {
            entry.push(list(list_id));
            self.tasks_by_list
                .get_mut()
                .unwrap()
                .insert(list_id.to_string(), tasks);
        }
        self
    }

    /// Page requests for this list return no payload
    pub fn with_unreachable_list(mut self, list_id: &str) -> Self {
        self.unreachable_lists.insert(list_id.to_string());
        self
    }

    pub fn rejecting_updates(mut self) -> Self {
        self.reject_updates = true;
        self
    }

    pub fn pages_requested(&self, list_id: &str) -> usize {
        self.page_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == list_id)
            .count()
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskTracker for FakeTracker {
    async fn folders(&self, _space_id: &str) -> Option<Vec<Folder>> {
        Some(self.folders.clone())
    }

    async fn folderless_lists(&self, _space_id: &str) -> Option<Vec<List>> {
        Some(self.folderless.clone())
    }

    async fn folder_lists(&self, folder_id: &str) -> Option<Vec<List>> {
        self.folder_list_calls
            .lock()
            .unwrap()
            .push(folder_id.to_string());
        self.lists_by_folder.get(folder_id).cloned()
    }

    async fn task_page(&self, list_id: &str, page: u32) -> Option<Vec<Task>> {
        self.page_calls
            .lock()
            .unwrap()
            .push((list_id.to_string(), page));
        if self.unreachable_lists.contains(list_id) {
            return None;
        }
        let tasks = self.tasks_by_list.lock().unwrap();
        let all = tasks.get(list_id)?;
        Some(
            all.iter()
                .skip(page as usize * FULL_PAGE_SIZE)
                .take(FULL_PAGE_SIZE)
                .cloned()
                .collect(),
        )
    }

    async fn set_task_status(&self, task_id: &str, status: &str) -> bool {
        self.updates
            .lock()
            .unwrap()
            .push((task_id.to_string(), status.to_string()));
        if self.reject_updates {
            return false;
        }
        let mut tasks = self.tasks_by_list.lock().unwrap();
        match tasks
            .values_mut()
            .flat_map(|t| t.iter_mut())
            .find(|t| t.id == task_id)
        {
            Some(task) => {
                task.status = TaskStatus::named(status);
                true
            }
            None => false,
        }
    }
}
