// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::DomainError;
use time::{Date, Time};

/// Errors that can occur while deriving the grid or planning changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An export bound is not one of the grid's days.
    ExportDayNotInGrid {
        /// The requested day.
        day: Date,
    },
    /// The export range ends before it starts.
    InvalidExportRange {
        /// The requested first day.
        start: Date,
        /// The requested last day.
        end: Date,
    },
    /// The current user may not perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role of the current user.
        role: String,
    },
    /// A shift starts and ends at the same time.
    InvalidShiftHours {
        /// The shift start.
        start: Time,
        /// The shift end.
        end: Time,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ExportDayNotInGrid { day } => {
                write!(f, "Export day {day} is not part of the schedule grid")
            }
            Self::InvalidExportRange { start, end } => {
                write!(f, "Export range end {end} is before its start {start}")
            }
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role '{role}' may not {action}")
            }
            Self::InvalidShiftHours { start, end } => {
                write!(f, "Shift hours {start} to {end} have no duration")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
