// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Run orchestration: discover, resolve the field, migrate task by task.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info};

use crate::client::TaskTracker;
use crate::field::find_progress_step_field;
use crate::migrate::{MigrationOutcome, Migrator};
use crate::walker::HierarchyWalker;

/// Errors that stop a run before any task is touched
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("no task in space {space_id} has a \"Progress Step\" custom field")]
    ProgressStepFieldNotFound { space_id: String },
}

/// Knobs for a run
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Pause between consecutive tasks
    pub update_delay: Duration,
    /// Decide but never send updates
    pub dry_run: bool,
}

/// Tally of outcomes over a run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub total: usize,
    pub updated: usize,
    pub update_failed: usize,
    pub would_update: usize,
    pub already_correct: usize,
    pub skipped_no_field: usize,
    pub skipped_no_value: usize,
    pub skipped_unmapped: usize,
}

impl MigrationReport {
    fn record(&mut self, outcome: &MigrationOutcome) {
        self.total += 1;
        match outcome {
            MigrationOutcome::SkippedNoCustomFields | MigrationOutcome::SkippedFieldMissing => {
                self.skipped_no_field += 1
            }
            MigrationOutcome::SkippedNoValue => self.skipped_no_value += 1,
            MigrationOutcome::SkippedUnmapped { .. } => self.skipped_unmapped += 1,
            MigrationOutcome::AlreadyCorrect { .. } => self.already_correct += 1,
            MigrationOutcome::WouldUpdate { .. } => self.would_update += 1,
            MigrationOutcome::Updated { .. } => self.updated += 1,
            MigrationOutcome::UpdateFailed { .. } => self.update_failed += 1,
        }
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Migrated {} of {} tasks", self.updated, self.total)?;
        writeln!(f, "  already correct:      {}", self.already_correct)?;
        if self.would_update > 0 {
            writeln!(f, "  would update:         {}", self.would_update)?;
        }
        writeln!(f, "  failed updates:       {}", self.update_failed)?;
        writeln!(f, "  no Progress Step:     {}", self.skipped_no_field)?;
        writeln!(f, "  no value:             {}", self.skipped_no_value)?;
        write!(f, "  unmapped value:       {}", self.skipped_unmapped)
    }
}

/// Migrate every task in `space_id`.
///
/// Per-task problems never stop the run; they are tallied in the report.
/// The only error is a space whose tasks carry no Progress Step field, in
/// which case nothing is written.
pub async fn run(
    tracker: &dyn TaskTracker,
    space_id: &str,
    options: &RunOptions,
) -> Result<MigrationReport, MigrateError> {
    let tasks = HierarchyWalker::new(tracker).enumerate_tasks(space_id).await;
    let mut report = MigrationReport::default();

    if tasks.is_empty() {
        info!(space_id, "No tasks found; nothing to migrate");
        return Ok(report);
    }

    let Some(field) = find_progress_step_field(&tasks) else {
        error!(space_id, tasks = tasks.len(), "Progress Step field not found; aborting");
        return Err(MigrateError::ProgressStepFieldNotFound {
            space_id: space_id.to_string(),
        });
    };
    info!(field_id = %field.id, field = %field.name, "Resolved Progress Step field");

    let migrator = Migrator::new(tracker, options.dry_run);
    for (i, task) in tasks.iter().enumerate() {
        if i > 0 && !options.update_delay.is_zero() {
            tokio::time::sleep(options.update_delay).await;
        }
        let outcome = migrator.migrate_one(task, &field).await;
        report.record(&outcome);
    }

    info!(
        space_id,
        migrated = report.updated,
        total = report.total,
        "Migration finished"
    );
    Ok(report)
}
