// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use progress_step_migrate::config::DEFAULT_CONFIG_PATH;
use progress_step_migrate::{ApiClient, Config, RunOptions, run};

#[derive(Parser)]
#[command(name = "progress-step-migrate", version)]
#[command(about = "Move tasks from the \"Progress Step\" custom field to native statuses", long_about = None)]
struct Cli {
    /// JSON file with api_token and space_id
    #[arg(long, env = "PROGRESS_STEP_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Report what would change without updating any task
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries only the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "progress_step_migrate=info".to_string()),
        ))
        .init();

    let config = Config::from_file(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    info!(space_id = %config.space_id, base_url = %config.base_url, dry_run = cli.dry_run, "Starting migration");

    let client = ApiClient::new(config.client_config()).context("Failed to create API client")?;

    let options = RunOptions {
        update_delay: config.update_delay,
        dry_run: cli.dry_run,
    };

    let report = run(&client, &config.space_id, &options).await?;

    println!("{}", report);
    Ok(())
}
