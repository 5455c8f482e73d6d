// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub ClickUp server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p clickup-stub-server
//! ```
//!
//! Then point the migration at it by setting `"base_url"` in its config file:
//! ```json
//! { "api_token": "pk_stub", "space_id": "90150001", "base_url": "http://localhost:9191" }
//! ```

use anyhow::{Context, Result};
use dropshot::{ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use std::sync::Arc;

use clickup_stub_server::{StubContext, api_description};

/// Default bind address for the stub
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:9191";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let log_config = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };
    let log = log_config.to_logger("clickup-stub-server")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "clickup_stub_server=info".to_string()),
        ))
        .init();

    // Load fixture data
    let fixtures_dir = std::env::var("STUB_FIXTURES_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));
    let context = Arc::new(StubContext::from_fixtures(&fixtures_dir)?);

    tracing::info!(
        "Loaded space {} with {} tasks from fixtures",
        context.space_id(),
        context.task_count()
    );

    // Configure the server
    let bind_address = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
        .parse()
        .context("Invalid BIND_ADDRESS")?;

    let config = ConfigDropshot {
        bind_address,
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    // Create and start the server
    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    tracing::info!("Stub ClickUp server listening on http://{}", bind_address);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET /api/v2/space/{{space_id}}/folder");
    tracing::info!("  GET /api/v2/space/{{space_id}}/list");
    tracing::info!("  GET /api/v2/folder/{{folder_id}}/list");
    tracing::info!("  GET /api/v2/list/{{list_id}}/task?page=N");
    tracing::info!("  PUT /api/v2/task/{{task_id}}");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
