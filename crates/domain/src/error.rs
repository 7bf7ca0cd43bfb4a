// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EmployeeId;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A span ends before it starts.
    InvalidSpanRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// A schedule window ends before it starts.
    InvalidWindow {
        /// The window start date.
        start: Date,
        /// The window end date.
        end: Date,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a date or time from a string.
    DateParseError {
        /// The invalid input.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Shift tag label is empty.
    InvalidShiftTag(String),
    /// Color value is not a `#RRGGBB` hex string.
    InvalidColor(String),
    /// A configuration value is not recognized.
    InvalidSetting {
        /// The setting name.
        setting: String,
        /// The rejected value.
        value: String,
    },
    /// Department name is not recognized.
    InvalidDepartment(String),
    /// Employee identifier or name is empty.
    InvalidEmployee(String),
    /// The proposed span overlaps an existing span of the same employee.
    ScheduleConflict {
        /// The employee owning both spans.
        employee_id: EmployeeId,
        /// The identifier of the existing span, if persisted.
        conflicting_span_id: Option<i64>,
        /// Start of the existing span.
        conflicting_start: Date,
        /// End of the existing span.
        conflicting_end: Date,
    },
    /// Two spans of the same employee cover the same day.
    OverlappingSpans {
        /// The employee.
        employee_id: EmployeeId,
        /// The doubly covered day.
        day: Date,
        /// The span already indexed for that day.
        existing_span_id: Option<i64>,
        /// The span that attempted to claim the day.
        incoming_span_id: Option<i64>,
    },
    /// A work day lies outside its span or belongs to another employee.
    WorkDayOutsideSpan {
        /// The span identifier.
        span_id: i64,
        /// The offending day.
        day: Date,
    },
    /// Employee does not exist.
    EmployeeNotFound(EmployeeId),
    /// Span does not exist.
    SpanNotFound(i64),
    /// A day lies outside the visible schedule window.
    DayOutsideWindow {
        /// The offending day.
        day: Date,
        /// The window start.
        window_start: Date,
        /// The window end.
        window_end: Date,
    },
}

impl std::fmt::Display for DomainError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpanRange { start, end } => {
                write!(f, "Span end date {end} is before its start date {start}")
            }
            Self::InvalidWindow { start, end } => {
                write!(f, "Schedule window end {end} is before its start {start}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::InvalidShiftTag(msg) => write!(f, "Invalid shift tag: {msg}"),
            Self::InvalidColor(value) => {
                write!(f, "Invalid color '{value}': expected #RRGGBB")
            }
            Self::InvalidSetting { setting, value } => {
                write!(f, "Invalid value '{value}' for {setting}")
            }
            Self::InvalidDepartment(name) => write!(f, "Unknown department: {name}"),
            Self::InvalidEmployee(msg) => write!(f, "Invalid employee: {msg}"),
            Self::ScheduleConflict {
                employee_id,
                conflicting_span_id,
                conflicting_start,
                conflicting_end,
            } => match conflicting_span_id {
                Some(id) => write!(
                    f,
                    "Employee '{employee_id}' is already scheduled from {conflicting_start} to {conflicting_end} (span {id})"
                ),
                None => write!(
                    f,
                    "Employee '{employee_id}' is already scheduled from {conflicting_start} to {conflicting_end}"
                ),
            },
            Self::OverlappingSpans {
                employee_id,
                day,
                existing_span_id,
                incoming_span_id,
            } => {
                write!(
                    f,
                    "Employee '{employee_id}' has overlapping spans on {day} ({existing_span_id:?} and {incoming_span_id:?})"
                )
            }
            Self::WorkDayOutsideSpan { span_id, day } => {
                write!(f, "Work day {day} is not covered by span {span_id}")
            }
            Self::EmployeeNotFound(id) => write!(f, "Employee '{id}' not found"),
            Self::SpanNotFound(id) => write!(f, "Span {id} not found"),
            Self::DayOutsideWindow {
                day,
                window_start,
                window_end,
            } => {
                write!(
                    f,
                    "Day {day} is outside the schedule window {window_start} to {window_end}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
