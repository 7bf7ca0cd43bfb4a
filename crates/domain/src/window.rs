// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule window and day sequence generation.
//!
//! The grid shows one column per calendar day of a fixed window. By default
//! the window is the resort season: March 31 through November 15 of a year.
//!
//! ## Invariants
//!
//! - Day sequences are ascending, contiguous and free of duplicates
//! - Both window bounds are inclusive
//! - A window never ends before it starts

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// Month and day the season window opens.
pub const SEASON_START: (Month, u8) = (Month::March, 31);

/// Month and day the season window closes (inclusive).
pub const SEASON_END: (Month, u8) = (Month::November, 15);

/// Ascending iterator over an inclusive range of calendar days.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<Date>,
    end: Date,
}

impl DayRange {
    /// Creates an iterator over `start..=end`. Empty if `start > end`.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }
}

impl Iterator for DayRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current: Date = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.next_day();
        Some(current)
    }
}

/// The inclusive range of days shown by the schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    start: Date,
    end: Date,
}

impl ScheduleWindow {
    /// Creates a new window.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the season window of the given year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar range.
    pub fn season(year: i32) -> Result<Self, DomainError> {
        let bound = |(month, day): (Month, u8)| {
            Date::from_calendar_date(year, month, day).map_err(|e| {
                DomainError::DateArithmeticOverflow {
                    operation: format!("building season window for {year}: {e}"),
                }
            })
        };
        Self::new(bound(SEASON_START)?, bound(SEASON_END)?)
    }

    /// Returns the first day of the window.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).whole_days() + 1).unwrap_or(0)
    }

    /// A window always holds at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns whether `day` lies inside the window.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns every day of the window in ascending order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        DayRange::new(self.start, self.end).collect()
    }
}

/// Generates every calendar day from `start` to `end`, inclusive.
///
/// # Errors
///
/// Returns an error if `end` is before `start`.
pub fn generate_days(start: Date, end: Date) -> Result<Vec<Date>, DomainError> {
    Ok(ScheduleWindow::new(start, end)?.days())
}

/// Returns the Monday and Sunday of the week containing `day`.
///
/// # Errors
///
/// Returns an error if the week runs past the supported calendar range.
pub fn week_containing(day: Date) -> Result<(Date, Date), DomainError> {
    let from_monday: i64 = i64::from(day.weekday().number_days_from_monday());
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("computing the week of {day}"),
    };

    let monday: Date = day
        .checked_sub(Duration::days(from_monday))
        .ok_or_else(overflow)?;
    let sunday: Date = monday
        .checked_add(Duration::days(6))
        .ok_or_else(overflow)?;
    Ok((monday, sunday))
}
