// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::color::Rgb;
use crate::error::DomainError;
use crate::window::DayRange;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

/// Identifier of an employee profile as assigned by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The department a staff role belongs to.
///
/// Departments drive the grid's employee filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Room cleaning and laundry staff.
    Housekeeping,
    /// Maintenance and repair staff.
    Technical,
    /// Front desk staff.
    Reception,
    /// Resort management.
    Management,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Self; 4] = [
        Self::Housekeeping,
        Self::Technical,
        Self::Reception,
        Self::Management,
    ];

    /// Converts this department to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Housekeeping => "housekeeping",
            Self::Technical => "technical",
            Self::Reception => "reception",
            Self::Management => "management",
        }
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "housekeeping" => Ok(Self::Housekeeping),
            "technical" => Ok(Self::Technical),
            "reception" => Ok(Self::Reception),
            "management" => Ok(Self::Management),
            _ => Err(DomainError::InvalidDepartment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member that can be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The profile identifier.
    pub id: EmployeeId,
    /// The display name shown in the grid's row header.
    pub name: String,
    /// Reference to the employee's role record.
    pub role_id: String,
    /// The department of the employee's role, if the role has one.
    pub department: Option<Department>,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `id` - The profile identifier
    /// * `name` - The display name
    /// * `role_id` - Reference to the role record
    /// * `department` - The role's department
    #[must_use]
    pub const fn new(
        id: EmployeeId,
        name: String,
        role_id: String,
        department: Option<Department>,
    ) -> Self {
        Self {
            id,
            name,
            role_id,
            department,
        }
    }

    /// Returns whether this employee passes the given department filter.
    ///
    /// `None` means no filter.
    #[must_use]
    pub fn in_department(&self, filter: Option<Department>) -> bool {
        filter.is_none_or(|department| self.department == Some(department))
    }
}

/// Shift/color tag attached to a span.
///
/// The label is what users pick in the form. Known shift names map to a
/// fixed palette; a label that is itself a `#RRGGBB` value is used as the
/// color directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShiftTag")]
pub struct ShiftTag {
    label: String,
    color: Rgb,
}

#[derive(Deserialize)]
struct RawShiftTag {
    label: String,
    color: Rgb,
}

impl TryFrom<RawShiftTag> for ShiftTag {
    type Error = DomainError;

    fn try_from(raw: RawShiftTag) -> Result<Self, Self::Error> {
        let mut tag: Self = Self::new(&raw.label)?;
        tag.color = raw.color;
        Ok(tag)
    }
}

impl ShiftTag {
    /// Creates a tag from its label, deriving the color.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty.
    pub fn new(label: &str) -> Result<Self, DomainError> {
        let label: &str = label.trim();
        if label.is_empty() {
            return Err(DomainError::InvalidShiftTag(String::from(
                "Shift tag cannot be empty",
            )));
        }

        let color: Rgb = if label.starts_with('#') {
            Rgb::from_hex(label)?
        } else {
            Rgb::for_shift(label)
        };

        Ok(Self {
            label: label.to_string(),
            color,
        })
    }

    /// Creates a tag with an explicit color.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or the color is not `#RRGGBB`.
    pub fn with_color(label: &str, hex: &str) -> Result<Self, DomainError> {
        let mut tag: Self = Self::new(label)?;
        tag.color = Rgb::from_hex(hex)?;
        Ok(tag)
    }

    /// Returns the tag label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the tag color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

/// A contiguous, inclusive range of days assigned to one employee.
///
/// The constructor enforces `start_date <= end_date`. Overlap with other
/// spans of the same employee is checked at proposal time by
/// [`crate::has_conflict`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScheduleSpan")]
pub struct ScheduleSpan {
    /// The store identifier. `None` until the span has been persisted.
    span_id: Option<i64>,
    employee_id: EmployeeId,
    start_date: Date,
    end_date: Date,
    shift: ShiftTag,
}

#[derive(Deserialize)]
struct RawScheduleSpan {
    span_id: Option<i64>,
    employee_id: EmployeeId,
    start_date: Date,
    end_date: Date,
    shift: ShiftTag,
}

impl TryFrom<RawScheduleSpan> for ScheduleSpan {
    type Error = DomainError;

    fn try_from(raw: RawScheduleSpan) -> Result<Self, Self::Error> {
        Self::new(
            raw.span_id,
            raw.employee_id,
            raw.start_date,
            raw.end_date,
            raw.shift,
        )
    }
}

impl ScheduleSpan {
    /// Creates a new `ScheduleSpan`.
    ///
    /// # Arguments
    ///
    /// * `span_id` - The store identifier, `None` if not yet persisted
    /// * `employee_id` - The owning employee
    /// * `start_date` - First covered day (inclusive)
    /// * `end_date` - Last covered day (inclusive)
    /// * `shift` - The shift/color tag
    ///
    /// # Errors
    ///
    /// Returns an error if `end_date` is before `start_date`.
    pub fn new(
        span_id: Option<i64>,
        employee_id: EmployeeId,
        start_date: Date,
        end_date: Date,
        shift: ShiftTag,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidSpanRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            span_id,
            employee_id,
            start_date,
            end_date,
            shift,
        })
    }

    /// Returns the store identifier if persisted.
    #[must_use]
    pub const fn span_id(&self) -> Option<i64> {
        self.span_id
    }

    /// Returns the owning employee.
    #[must_use]
    pub const fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Returns the first covered day.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last covered day.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the shift tag.
    #[must_use]
    pub const fn shift(&self) -> &ShiftTag {
        &self.shift
    }

    /// Returns whether `day` falls inside this span.
    #[must_use]
    pub fn covers(&self, day: Date) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Returns the number of covered days.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Iterates over every covered day in ascending order.
    #[must_use]
    pub const fn days(&self) -> DayRange {
        DayRange::new(self.start_date, self.end_date)
    }

    /// Returns a copy of this span carrying the given store identifier.
    #[must_use]
    pub fn with_span_id(&self, span_id: i64) -> Self {
        Self {
            span_id: Some(span_id),
            ..self.clone()
        }
    }
}

/// One concrete daily shift inside a span's range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The store identifier. `None` until persisted.
    pub work_day_id: Option<i64>,
    /// The owning span.
    pub span_id: i64,
    /// The employee working the shift.
    pub employee_id: EmployeeId,
    /// The calendar day of the shift.
    pub day: Date,
    /// Shift start time of day.
    pub start_time: Time,
    /// Shift end time of day.
    pub end_time: Time,
}

impl WorkDay {
    /// Creates a new `WorkDay`.
    #[must_use]
    pub const fn new(
        work_day_id: Option<i64>,
        span_id: i64,
        employee_id: EmployeeId,
        day: Date,
        start_time: Time,
        end_time: Time,
    ) -> Self {
        Self {
            work_day_id,
            span_id,
            employee_id,
            day,
            start_time,
            end_time,
        }
    }

    /// Returns the `HH:MM–HH:MM` label shown in the grid cell.
    #[must_use]
    pub fn hours_label(&self) -> String {
        format!(
            "{:02}:{:02}–{:02}:{:02}",
            self.start_time.hour(),
            self.start_time.minute(),
            self.end_time.hour(),
            self.end_time.minute()
        )
    }
}
