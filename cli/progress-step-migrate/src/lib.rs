// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Progress Step → status migration
//!
//! Moves tasks in a ClickUp space off the legacy "Progress Step" custom
//! field and onto native statuses:
//!
//! - [`walker`] enumerates every task in the space (folderless lists and
//!   folder lists, page by page)
//! - [`field`] finds the Progress Step field id from the fetched tasks
//! - [`migrate`] decides, per task, whether a status update is needed
//! - [`driver`] ties these together and tallies the outcome
//!
//! All upstream access goes through the [`client::TaskTracker`] trait;
//! [`client::ApiClient`] is the HTTP implementation.

pub mod client;
pub mod config;
pub mod driver;
pub mod field;
pub mod migrate;
pub mod pagination;
pub mod walker;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, ClientConfig, ClientError, TaskTracker};
pub use config::{Config, ConfigError};
pub use driver::{MigrateError, MigrationReport, RunOptions, run};
