// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Locating the "Progress Step" custom field.
//!
//! The field id is not configured. It is taken from the first task that
//! carries a field named "Progress Step" (any casing) and then used for the
//! rest of the run.

use clickup_api::Task;

/// Name of the legacy field, compared case-insensitively
pub const PROGRESS_STEP_FIELD_NAME: &str = "progress step";

/// Identity of the resolved field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStepField {
    pub id: String,
    pub name: String,
}

/// First field named "Progress Step" across `tasks`, scanning tasks and
/// their fields in order.
pub fn find_progress_step_field(tasks: &[Task]) -> Option<ProgressStepField> {
    tasks
        .iter()
        .flat_map(|task| task.custom_fields.iter())
        .find(|field| {
            field
                .name
                .trim()
                .eq_ignore_ascii_case(PROGRESS_STEP_FIELD_NAME)
        })
        .map(|field| ProgressStepField {
            id: field.id.clone(),
            name: field.name.clone(),
        })
}
