// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::board::ScheduleBoard;
use crate::command::{Command, ShiftHours};
use crate::context::{CurrentUserContext, ScheduleCapabilities, compute_capabilities, require};
use crate::error::CoreError;
use roster_domain::{
    DomainError, EmployeeId, ScheduleSpan, WorkDay, validate_employee_exists,
    validate_span_in_window,
};
use std::collections::BTreeSet;
use time::Date;
use tracing::info;

/// Hours of one day to be stored as a work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayShift {
    /// The calendar day.
    pub day: Date,
    /// Shift hours of that day.
    pub hours: ShiftHours,
}

/// A write the caller must send to the store.
///
/// Operations are listed in the order they must be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOperation {
    /// Insert a span, then its work days under the new span id.
    InsertSpan {
        /// The span, without id.
        span: ScheduleSpan,
        /// One entry per covered day.
        days: Vec<DayShift>,
    },
    /// Overwrite a stored span's dates and tag.
    UpdateSpan {
        /// The span with its id.
        span: ScheduleSpan,
    },
    /// Insert work days for an existing span.
    InsertWorkDays {
        /// The owning span.
        span_id: i64,
        /// The employee of the span.
        employee_id: EmployeeId,
        /// The days to insert.
        days: Vec<DayShift>,
    },
    /// Delete the work days of a span on the given days.
    DeleteWorkDays {
        /// The owning span.
        span_id: i64,
        /// The days to delete.
        days: Vec<Date>,
    },
    /// Insert or overwrite one work day.
    UpsertWorkDay {
        /// The work day; `work_day_id` is `None` for an insert.
        work_day: WorkDay,
    },
    /// Delete a span.
    DeleteSpan {
        /// The span to delete.
        span_id: i64,
    },
}

/// The result of planning a command.
///
/// The board is not touched; it is refreshed from the store once the
/// operations have been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The writes to send, in order.
    pub operations: Vec<StoreOperation>,
    /// Human-readable summary of the change.
    pub summary: String,
}

/// Plans the store writes for a command.
///
/// # Arguments
///
/// * `board` - The current board (immutable)
/// * `ctx` - The signed-in user
/// * `command` - The command to plan
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the ordered store operations
/// * `Err(CoreError)` if the command is not permitted or invalid
///
/// # Errors
///
/// Returns an error if:
/// - The user lacks the required capability
/// - The employee or span does not exist
/// - The span leaves the schedule window
/// - The span overlaps another span of the same employee
/// - The day of a work day edit is not covered by its span
pub fn apply(
    board: &ScheduleBoard,
    ctx: &CurrentUserContext,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    let capabilities: ScheduleCapabilities = compute_capabilities(ctx);
    let action: &str = command.action_name();

    match command {
        Command::CreateSpan {
            employee_id,
            start_date,
            end_date,
            shift,
            hours,
        } => {
            require(ctx, capabilities.can_edit_spans, action)?;
            validate_employee_exists(board.employees(), &employee_id)?;

            let span: ScheduleSpan =
                ScheduleSpan::new(None, employee_id, start_date, end_date, shift)?;
            validate_span_in_window(&span, board.window())?;
            board.check_conflict(&span, None)?;

            let days: Vec<DayShift> = span.days().map(|day| DayShift { day, hours }).collect();
            let summary: String = format!(
                "Booked '{}' from {} to {} ({})",
                span.employee_id(),
                span.start_date(),
                span.end_date(),
                span.shift().label()
            );
            info!(user = %ctx.user_id, "{summary}");

            Ok(TransitionResult {
                operations: vec![StoreOperation::InsertSpan { span, days }],
                summary,
            })
        }
        Command::UpdateSpan {
            span_id,
            start_date,
            end_date,
            shift,
            hours,
        } => {
            require(ctx, capabilities.can_edit_spans, action)?;
            let stored: &ScheduleSpan = board
                .span(span_id)
                .ok_or(DomainError::SpanNotFound(span_id))?;

            let span: ScheduleSpan = ScheduleSpan::new(
                Some(span_id),
                stored.employee_id().clone(),
                start_date,
                end_date,
                shift,
            )?;
            validate_span_in_window(&span, board.window())?;
            board.check_conflict(&span, Some(span_id))?;

            let operations: Vec<StoreOperation> = plan_update(stored, span, hours);
            let summary: String = format!(
                "Moved span {span_id} of '{}' to {start_date}..{end_date}",
                stored.employee_id()
            );
            info!(user = %ctx.user_id, "{summary}");

            Ok(TransitionResult {
                operations,
                summary,
            })
        }
        Command::DeleteSpan { span_id } => {
            require(ctx, capabilities.can_edit_spans, action)?;
            let stored: &ScheduleSpan = board
                .span(span_id)
                .ok_or(DomainError::SpanNotFound(span_id))?;

            let summary: String = format!(
                "Deleted span {span_id} of '{}' ({}..{})",
                stored.employee_id(),
                stored.start_date(),
                stored.end_date()
            );
            info!(user = %ctx.user_id, "{summary}");

            Ok(TransitionResult {
                operations: vec![
                    StoreOperation::DeleteWorkDays {
                        span_id,
                        days: stored.days().collect(),
                    },
                    StoreOperation::DeleteSpan { span_id },
                ],
                summary,
            })
        }
        Command::SetWorkDayHours {
            span_id,
            day,
            hours,
        } => {
            require(ctx, capabilities.can_edit_hours, action)?;
            let stored: &ScheduleSpan = board
                .span(span_id)
                .ok_or(DomainError::SpanNotFound(span_id))?;
            if !stored.covers(day) {
                return Err(DomainError::WorkDayOutsideSpan { span_id, day }.into());
            }

            let work_day_id: Option<i64> = board
                .work_day_index()
                .get(span_id, stored.employee_id(), day)
                .and_then(|existing| existing.work_day_id);

            let work_day: WorkDay = WorkDay::new(
                work_day_id,
                span_id,
                stored.employee_id().clone(),
                day,
                hours.start(),
                hours.end(),
            );
            let summary: String = format!(
                "Set hours of '{}' on {day} to {}",
                stored.employee_id(),
                work_day.hours_label()
            );
            info!(user = %ctx.user_id, "{summary}");

            Ok(TransitionResult {
                operations: vec![StoreOperation::UpsertWorkDay { work_day }],
                summary,
            })
        }
    }
}

/// Diffs the covered days of a span edit into work day writes.
///
/// Days kept by the edit keep their stored hours.
fn plan_update(
    stored: &ScheduleSpan,
    span: ScheduleSpan,
    hours: ShiftHours,
) -> Vec<StoreOperation> {
    let span_id: Option<i64> = span.span_id();
    let old_days: BTreeSet<Date> = stored.days().collect();
    let new_days: BTreeSet<Date> = span.days().collect();
    let employee_id: EmployeeId = span.employee_id().clone();

    let removed: Vec<Date> = old_days.difference(&new_days).copied().collect();
    let added: Vec<DayShift> = new_days
        .difference(&old_days)
        .map(|day| DayShift { day: *day, hours })
        .collect();

    let mut operations: Vec<StoreOperation> = vec![StoreOperation::UpdateSpan { span }];
    let Some(span_id) = span_id else {
        return operations;
    };

    if !removed.is_empty() {
        operations.push(StoreOperation::DeleteWorkDays {
            span_id,
            days: removed,
        });
    }
    if !added.is_empty() {
        operations.push(StoreOperation::InsertWorkDays {
            span_id,
            employee_id,
            days: added,
        });
    }
    operations
}
