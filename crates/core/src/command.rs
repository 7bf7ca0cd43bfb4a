// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::selection::SelectedRange;
use roster_domain::{EmployeeId, ShiftTag};
use time::macros::time;
use time::{Date, Time};

/// Daily working hours applied to the work days of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftHours {
    start: Time,
    end: Time,
}

impl ShiftHours {
    /// Creates new shift hours. An end before the start crosses midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if start and end are equal.
    pub fn new(start: Time, end: Time) -> Result<Self, CoreError> {
        if start == end {
            return Err(CoreError::InvalidShiftHours { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the shift start.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the shift end.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self {
            start: time!(08:00),
            end: time!(16:00),
        }
    }
}

/// A command represents user intent on the schedule as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Book a new span.
    CreateSpan {
        /// The employee to book.
        employee_id: EmployeeId,
        /// First day.
        start_date: Date,
        /// Last day (inclusive).
        end_date: Date,
        /// Shift/color tag.
        shift: ShiftTag,
        /// Hours for every created work day.
        hours: ShiftHours,
    },
    /// Move, resize or retag a stored span.
    UpdateSpan {
        /// The span to change.
        span_id: i64,
        /// New first day.
        start_date: Date,
        /// New last day (inclusive).
        end_date: Date,
        /// New shift/color tag.
        shift: ShiftTag,
        /// Hours for newly covered days.
        hours: ShiftHours,
    },
    /// Delete a stored span and its work days.
    DeleteSpan {
        /// The span to delete.
        span_id: i64,
    },
    /// Change the hours of one day of a span.
    SetWorkDayHours {
        /// The owning span.
        span_id: i64,
        /// The day to change.
        day: Date,
        /// The new hours.
        hours: ShiftHours,
    },
}

impl Command {
    /// Builds the create command confirmed from a drag selection's form.
    #[must_use]
    pub fn create_from_selection(range: &SelectedRange, shift: ShiftTag, hours: ShiftHours) -> Self {
        Self::CreateSpan {
            employee_id: range.employee_id.clone(),
            start_date: range.start_date,
            end_date: range.end_date,
            shift,
            hours,
        }
    }

    /// Short action name used in logs and authorization errors.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::CreateSpan { .. } => "create spans",
            Self::UpdateSpan { .. } => "update spans",
            Self::DeleteSpan { .. } => "delete spans",
            Self::SetWorkDayHours { .. } => "edit work day hours",
        }
    }
}
