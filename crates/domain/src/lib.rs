// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod color;
mod conflict;
mod error;
mod normalize;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use color::{OVERLAY_ALPHA, Rgb};
pub use conflict::{ensure_no_conflict, find_conflict, has_conflict, ranges_overlap};
pub use error::DomainError;
pub use normalize::{
    DateCoercion, normalize_span_dates, parse_local_day, parse_time_of_day, parse_timezone,
    today_in,
};
pub use types::{Department, Employee, EmployeeId, ScheduleSpan, ShiftTag, WorkDay};
pub use validation::{
    validate_employee_exists, validate_employee_fields, validate_span_in_window,
    validate_work_day,
};
pub use window::{
    DayRange, SEASON_END, SEASON_START, ScheduleWindow, generate_days, week_containing,
};

// Timezone type used by the date normalization functions.
pub use chrono_tz::Tz;
