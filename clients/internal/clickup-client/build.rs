// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use progenitor::GenerationSettings;
use std::env;

/// Wire types the client reuses from clickup-api instead of generating
const SHARED_TYPES: &[&str] = &[
    "CustomField",
    "Folder",
    "FoldersResponse",
    "List",
    "ListsResponse",
    "Task",
    "TaskStatus",
    "TasksResponse",
    "UpdateTaskRequest",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;

    // The OpenAPI document is rendered from the clickup-api trait itself,
    // the same description the stub server is built from.
    let description = clickup_api::clickup_api_mod::stub_api_description()?;
    let document = description
        .openapi("ClickUp API (subset)", dropshot::semver::Version::new(2, 0, 0))
        .json()?;
    let openapi: openapiv3::OpenAPI = serde_json::from_value(document)?;

    let mut settings = GenerationSettings::default();
    settings
        .with_interface(progenitor::InterfaceStyle::Builder)
        .with_tag(progenitor::TagStyle::Merged)
        // Request/response tracing lives in src/hooks.rs
        .with_pre_hook(syn::parse_quote!(crate::hooks::log_request))
        .with_post_hook(syn::parse_quote!(crate::hooks::log_response));
    for name in SHARED_TYPES {
        settings.with_replacement(name, format!("clickup_api::{}", name), std::iter::empty());
    }

    let tokens = progenitor::Generator::new(&settings).generate_tokens(&openapi)?;
    std::fs::write(format!("{}/client.rs", out_dir), tokens.to_string())?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
