//! The auto-generation run: orchestration, day loop, failure aggregation.
//!
//! Partial-failure semantics: `success: false` is reserved for run-level
//! failures (guard contention, connectivity, assignment fetch). Individual
//! assignment or day failures are appended to the result's error list and
//! never abort the run.

use std::sync::Arc;

use chrono::NaiveDate;

use snd_core::generation::{GenerationProgress, GenerationResult};
use snd_core::window;
use snd_core::workday;
use snd_db::models::assignment::Assignment;
use snd_db::models::timesheet::NewGeneratedTimesheet;

use super::clock::Clock;
use super::guard::GenerationGuard;
use super::store::GenerationStore;

/// Timesheet auto-generation engine.
///
/// Stateless apart from the shared single-flight guard; construct one per
/// invocation.
pub struct AutoGenerator<S, C> {
    store: S,
    clock: C,
    guard: Arc<GenerationGuard>,
}

impl<S: GenerationStore, C: Clock> AutoGenerator<S, C> {
    pub fn new(store: S, clock: C, guard: Arc<GenerationGuard>) -> Self {
        Self {
            store,
            clock,
            guard,
        }
    }

    /// Execute one generation run.
    ///
    /// Never returns an error: every anticipated failure lands in the
    /// returned [`GenerationResult`]. Assignments are processed strictly
    /// in sequence to bound store load and keep error ordering
    /// reproducible.
    pub async fn run(&self) -> GenerationResult {
        let Some(_permit) = self.guard.try_acquire() else {
            tracing::warn!("Auto-generation refused: a run is already in progress");
            return GenerationResult::already_running();
        };
        // _permit releases the guard on every return path below.

        if let Err(e) = self.store.ping().await {
            tracing::error!(error = %e, "Auto-generation aborted: store unreachable");
            return GenerationResult::connection_failed(e.to_string());
        }

        let assignments = match self.store.list_assignments().await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!(error = %e, "Auto-generation aborted: assignment fetch failed");
                return GenerationResult::fetch_failed(e.to_string());
            }
        };

        if assignments.is_empty() {
            tracing::info!("Auto-generation finished: no assignments to process");
            return GenerationResult::no_assignments();
        }

        // One notion of "today" for the whole run, even across midnight.
        let today = self.clock.today();

        let total = assignments.len() as u32;
        let mut processed: u32 = 0;
        let mut created: u64 = 0;
        let mut errors: Vec<String> = Vec::new();

        for assignment in &assignments {
            self.process_assignment(assignment, today, &mut created, &mut errors)
                .await;
            processed += 1;
        }

        let progress = GenerationProgress::of(processed, total);
        tracing::info!(
            created,
            error_count = errors.len(),
            assignments = total,
            "Auto-generation completed",
        );
        GenerationResult::completed(created, errors, progress)
    }

    /// Generate missing timesheets for one assignment's window.
    ///
    /// Each day is handled independently: an existence-check or insert
    /// failure is recorded and the loop moves to the next day, so one bad
    /// date never blocks the rest of the window.
    async fn process_assignment(
        &self,
        assignment: &Assignment,
        today: NaiveDate,
        created: &mut u64,
        errors: &mut Vec<String>,
    ) {
        let window =
            match window::effective_window(assignment.start_date, assignment.end_date, today) {
                Ok(w) => w,
                Err(e) => {
                    errors.push(format!("Assignment {}: {e}", assignment.id));
                    return;
                }
            };

        for date in window.iter() {
            match self
                .store
                .timesheet_exists(assignment.employee_id, date)
                .await
            {
                // Already covered: the idempotent no-op that makes
                // repeated runs safe.
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    errors.push(format!(
                        "Assignment {}: existence check for {date} failed: {e}",
                        assignment.id
                    ));
                    continue;
                }
            }

            let (hours_worked, overtime_hours) = workday::day_hours(date);
            let row = NewGeneratedTimesheet {
                employee_id: assignment.employee_id,
                assignment_id: assignment.id,
                project_id: assignment.project_id,
                rental_id: assignment.rental_id,
                date,
                start_time: workday::shift_start(date),
                end_time: workday::shift_end(date),
                hours_worked,
                overtime_hours,
            };

            match self.store.insert_timesheet(&row).await {
                Ok(()) => *created += 1,
                Err(e) => {
                    errors.push(format!(
                        "Assignment {}: insert for {date} failed: {e}",
                        assignment.id
                    ));
                }
            }
        }
    }
}
