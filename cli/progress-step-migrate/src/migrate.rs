// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-task migration decision
//!
//! For one task: read the Progress Step value, map it to a status name, and
//! send an update only when the task is not already in that status. Running
//! it again over the same tasks sends nothing.

use clickup_api::Task;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::TaskTracker;
use crate::field::ProgressStepField;

/// Status names indexed by Progress Step value
pub const PROGRESS_STEP_STATUSES: [&str; 6] = [
    "WAITING",
    "RESEARCH",
    "EXECUTION",
    "REVIEW",
    "TESTING",
    "ACCEPTED",
];

/// Status name for a Progress Step value, if it has one
pub fn status_for_step(step: i64) -> Option<&'static str> {
    usize::try_from(step)
        .ok()
        .and_then(|i| PROGRESS_STEP_STATUSES.get(i))
        .copied()
}

/// A Progress Step value as stored upstream: dropdowns hold an integer,
/// number fields frequently hold the number as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressStepValue {
    Integer(i64),
    Text(String),
}

impl ProgressStepValue {
    /// Classify a raw field value. Null, booleans, arrays and objects carry
    /// no step. Numbers with a fraction are truncated toward zero.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
                .map(Self::Integer),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Integer step for this value.
    ///
    /// Text that is not a base-10 integer coerces to 0, which maps to
    /// WAITING.
    pub fn coerce(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

/// What happened to one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The task has no custom fields at all
    SkippedNoCustomFields,
    /// The task lacks the Progress Step field
    SkippedFieldMissing,
    /// The field is present but holds nothing usable
    SkippedNoValue,
    /// The step has no status mapping
    SkippedUnmapped { step: i64 },
    /// Status already matches the step
    AlreadyCorrect { status: &'static str },
    /// Dry run: an update would have been sent
    WouldUpdate { status: &'static str },
    Updated { status: &'static str },
    UpdateFailed { status: &'static str },
}

impl MigrationOutcome {
    /// True iff an update was sent and accepted
    pub fn is_migrated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Applies the migration decision to tasks
pub struct Migrator<'a> {
    tracker: &'a dyn TaskTracker,
    dry_run: bool,
}

impl<'a> Migrator<'a> {
    pub fn new(tracker: &'a dyn TaskTracker, dry_run: bool) -> Self {
        Self { tracker, dry_run }
    }

    /// Migrate a single task
    pub async fn migrate_one(&self, task: &Task, field: &ProgressStepField) -> MigrationOutcome {
        let outcome = self.decide_and_apply(task, field).await;
        log_outcome(task, &outcome);
        outcome
    }

    async fn decide_and_apply(&self, task: &Task, field: &ProgressStepField) -> MigrationOutcome {
        if task.custom_fields.is_empty() {
            return MigrationOutcome::SkippedNoCustomFields;
        }

        let Some(current) = task.custom_field(&field.id) else {
            return MigrationOutcome::SkippedFieldMissing;
        };

        let Some(value) = current.value.as_ref().and_then(ProgressStepValue::from_json) else {
            return MigrationOutcome::SkippedNoValue;
        };

        let step = value.coerce();
        let Some(status) = status_for_step(step) else {
            return MigrationOutcome::SkippedUnmapped { step };
        };

        // Upstream reports status names in lower case regardless of how
        // they were set.
        if task.status_name().eq_ignore_ascii_case(status) {
            return MigrationOutcome::AlreadyCorrect { status };
        }

        if self.dry_run {
            return MigrationOutcome::WouldUpdate { status };
        }

        if self.tracker.set_task_status(&task.id, status).await {
            MigrationOutcome::Updated { status }
        } else {
            MigrationOutcome::UpdateFailed { status }
        }
    }
}

fn log_outcome(task: &Task, outcome: &MigrationOutcome) {
    let id = task.id.as_str();
    let name = task.name.as_str();
    let current = task.status_name();

    match outcome {
        MigrationOutcome::SkippedNoCustomFields => {
            info!(task_id = id, task = name, "No custom fields; skipping")
        }
        MigrationOutcome::SkippedFieldMissing => {
            info!(task_id = id, task = name, "No Progress Step field; skipping")
        }
        MigrationOutcome::SkippedNoValue => {
            warn!(task_id = id, task = name, "Progress Step has no value; skipping")
        }
        MigrationOutcome::SkippedUnmapped { step } => {
            warn!(task_id = id, task = name, step, "Progress Step has no status mapping; skipping")
        }
        MigrationOutcome::AlreadyCorrect { status } => {
            info!(task_id = id, task = name, status, "Status already correct")
        }
        MigrationOutcome::WouldUpdate { status } => {
            info!(task_id = id, task = name, from = current, to = status, "Would update status (dry run)")
        }
        MigrationOutcome::Updated { status } => {
            info!(task_id = id, task = name, from = current, to = status, "Updated status")
        }
        MigrationOutcome::UpdateFailed { status } => {
            warn!(task_id = id, task = name, from = current, to = status, "Failed to update status")
        }
    }
}
