// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for progress-step-migrate integration tests
//!
//! - Starting the stub ClickUp server on an ephemeral port
//! - Building fixture tasks
//! - Writing config files

// Not every test binary uses every helper
#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clickup_api::{CustomField, Task, TaskStatus};
use clickup_stub_server::{FixtureSpace, StubContext};
use progress_step_migrate::{ApiClient, ClientConfig};

pub const SPACE_ID: &str = "90150001";
pub const PROGRESS_FIELD_ID: &str = "c7f1e2d4-progress";

/// A running stub server plus a handle on its state
pub struct StubServer {
    pub server: dropshot::HttpServer<Arc<StubContext>>,
    pub context: Arc<StubContext>,
    pub base_url: String,
}

impl StubServer {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig {
            base_url: self.base_url.clone(),
            api_token: "pk_test".to_string(),
            read_timeout: Duration::from_secs(5),
        })
        .expect("api client")
    }

    pub async fn close(self) {
        self.server.close().await.expect("shutdown stub");
    }
}

/// Start the stub on 127.0.0.1 with an ephemeral port
pub fn start_stub(space: FixtureSpace) -> StubServer {
    let context = Arc::new(StubContext::new(space));
    let api = clickup_stub_server::api_description().expect("stub api description");

    let config = dropshot::ConfigDropshot {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let log = dropshot::ConfigLogging::StderrTerminal {
        level: dropshot::ConfigLoggingLevel::Warn,
    }
    .to_logger("clickup-stub-test")
    .expect("stub logger");

    let server = dropshot::HttpServerStarter::new(&config, api, context.clone(), &log)
        .expect("create stub server")
        .start();
    let base_url = format!("http://{}", server.local_addr());

    StubServer {
        server,
        context,
        base_url,
    }
}

pub fn space() -> FixtureSpace {
    FixtureSpace {
        space_id: SPACE_ID.to_string(),
        ..Default::default()
    }
}

pub fn progress(value: serde_json::Value) -> CustomField {
    CustomField {
        id: PROGRESS_FIELD_ID.to_string(),
        name: "Progress Step".to_string(),
        field_type: Some("drop_down".to_string()),
        value: Some(value),
    }
}

pub fn task(id: &str, status: &str, custom_fields: Vec<CustomField>) -> Task {
    Task {
        id: id.to_string(),
        name: format!("Task {}", id),
        status: TaskStatus::named(status),
        custom_fields,
    }
}

/// `count` tasks at status "open" whose step cycles through 0..=5
pub fn stepped_tasks(prefix: &str, count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| {
            task(
                &format!("{}-{}", prefix, i),
                "open",
                vec![progress(serde_json::json!(i % 6))],
            )
        })
        .collect()
}

/// Write a config file pointing at `base_url`
pub fn write_config(base_url: &str, space_id: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    let body = serde_json::json!({
        "api_token": "pk_test",
        "space_id": space_id,
        "base_url": base_url,
        "update_delay_ms": 0,
    });
    file.write_all(body.to_string().as_bytes())
        .expect("write config");
    file
}
