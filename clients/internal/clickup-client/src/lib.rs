// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ClickUp API Client
//!
//! A Progenitor-generated client for the ClickUp v2 subset defined in
//! apis/clickup-api. The OpenAPI document is rendered from that trait at
//! build time, so the routes here are the routes the stub server serves.
//!
//! Request and response bodies use the clickup-api types directly; only the
//! error body is generated.

mod hooks;

// Include the Progenitor-generated client code
// Allow unwrap in generated code - Progenitor uses it in Client::new()
#[allow(clippy::unwrap_used)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/client.rs"));
}
pub use generated::*;

// Re-export the shared wire types for convenience
pub use clickup_api::{
    CustomField, Folder, FoldersResponse, List, ListsResponse, Task, TaskStatus, TasksResponse,
    UpdateTaskRequest,
};
