// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Migration configuration
//!
//! Credentials and the target space come from a JSON file (`config.json` by
//! default). A missing file, malformed JSON, a missing required key or an
//! out-of-range value is fatal; the run never starts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::client::ClientConfig;

/// Default config file, resolved against the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default upstream root; `/api/v2/...` paths are appended to it
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com";

/// Default ceiling for read requests (seconds)
const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Default pause between tasks (milliseconds)
const DEFAULT_UPDATE_DELAY_MS: u64 = 500;

/// Configuration errors. All of them abort the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file is missing required key '{0}'")]
    MissingField(&'static str),

    #[error("config key '{key}' is invalid: {reason}")]
    InvalidValue {
        key: &'static str,
        reason: &'static str,
    },
}

/// An id written either as a JSON string or as a bare number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(u64),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Text(s) => s,
            IdValue::Number(n) => n.to_string(),
        }
    }
}

/// On-disk shape. Every key is optional here so that a missing required key
/// produces [`ConfigError::MissingField`] instead of a serde message.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_token: Option<String>,
    space_id: Option<IdValue>,
    base_url: Option<String>,
    read_timeout_secs: Option<u64>,
    update_delay_ms: Option<u64>,
}

/// Validated migration configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Token sent verbatim in the `Authorization` header
    pub api_token: String,
    /// Space whose tasks are migrated
    pub space_id: String,
    /// Upstream root URL
    pub base_url: String,
    /// Timeout applied to every GET
    pub read_timeout: Duration,
    /// Pause between consecutive tasks
    pub update_delay: Duration,
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn from_json(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;

        let api_token = required(raw.api_token, "api_token")?;
        let space_id = required(raw.space_id.map(IdValue::into_string), "space_id")?;

        let read_timeout_secs = raw.read_timeout_secs.unwrap_or(DEFAULT_READ_TIMEOUT_SECS);
        if read_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "read_timeout_secs",
                reason: "must be at least 1",
            });
        }

        let base_url = raw
            .base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_token,
            space_id,
            base_url,
            read_timeout: Duration::from_secs(read_timeout_secs),
            update_delay: Duration::from_millis(
                raw.update_delay_ms.unwrap_or(DEFAULT_UPDATE_DELAY_MS),
            ),
        })
    }

    /// Connection settings for [`crate::client::ApiClient`]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_token: self.api_token.clone(),
            read_timeout: self.read_timeout,
        }
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingField(key))
}
