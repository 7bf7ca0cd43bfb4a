// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshot of the store tables.
//!
//! Records are kept in the raw shape the store delivers: string dates,
//! string departments, string times. They are normalized into domain
//! values only when a board is loaded. Planned store operations are applied
//! back onto the raw records, with ids assigned the way the store would.

use crate::error::CliError;
use roster::{DayShift, StoreOperation};
use roster_domain::{
    DateCoercion, Department, Employee, EmployeeId, ScheduleSpan, ShiftTag, Tz, WorkDay,
    normalize_span_dates, parse_local_day, parse_time_of_day,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use time::{Date, Time};
use tracing::{debug, info};

/// A profile row joined with its staff role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Profile identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Reference to the role record.
    pub role_id: String,
    /// Department of the role.
    #[serde(default)]
    pub department: Option<String>,
}

/// A span row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    /// Store identifier.
    pub span_id: i64,
    /// Owning profile.
    pub employee_id: String,
    /// Start date or timestamp.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date or timestamp.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Shift/color tag label.
    pub shift: String,
    /// Explicit `#RRGGBB` color overriding the shift palette.
    #[serde(default)]
    pub color: Option<String>,
}

/// A work day row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayRecord {
    /// Store identifier.
    pub work_day_id: i64,
    /// Owning span.
    pub span_id: i64,
    /// Profile working the shift.
    pub employee_id: String,
    /// Calendar day or timestamp.
    pub day: String,
    /// `HH:MM[:SS]` shift start.
    pub start_time: String,
    /// `HH:MM[:SS]` shift end.
    pub end_time: String,
}

/// Domain records normalized from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Records {
    pub employees: Vec<Employee>,
    pub spans: Vec<ScheduleSpan>,
    pub work_days: Vec<WorkDay>,
}

/// The three store tables the schedule reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub spans: Vec<SpanRecord>,
    #[serde(default)]
    pub work_days: Vec<WorkDayRecord>,
}

impl Snapshot {
    /// Reads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Self = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            employees = snapshot.employees.len(),
            spans = snapshot.spans.len(),
            work_days = snapshot.work_days.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let raw: String = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved snapshot");
        Ok(())
    }

    /// Normalizes the raw rows into domain records.
    ///
    /// # Arguments
    ///
    /// * `tz` - Timezone the schedule is kept in
    /// * `today` - The current local day
    /// * `coercion` - Policy for malformed span dates
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be normalized.
    pub fn records(
        &self,
        tz: Tz,
        today: Date,
        coercion: DateCoercion,
    ) -> Result<Records, CliError> {
        let employees: Vec<Employee> = self
            .employees
            .iter()
            .map(|record| -> Result<Employee, CliError> {
                Ok(Employee::new(
                    EmployeeId::new(&record.id),
                    record.name.clone(),
                    record.role_id.clone(),
                    record
                        .department
                        .as_deref()
                        .map(Department::from_str)
                        .transpose()?,
                ))
            })
            .collect::<Result<_, _>>()?;

        let spans: Vec<ScheduleSpan> = self
            .spans
            .iter()
            .map(|record| -> Result<ScheduleSpan, CliError> {
                let (start, end) = normalize_span_dates(
                    record.start_date.as_deref(),
                    record.end_date.as_deref(),
                    tz,
                    today,
                    coercion,
                )?;
                let shift: ShiftTag = match record.color.as_deref() {
                    Some(hex) => ShiftTag::with_color(&record.shift, hex)?,
                    None => ShiftTag::new(&record.shift)?,
                };
                Ok(ScheduleSpan::new(
                    Some(record.span_id),
                    EmployeeId::new(&record.employee_id),
                    start,
                    end,
                    shift,
                )?)
            })
            .collect::<Result<_, _>>()?;

        let work_days: Vec<WorkDay> = self
            .work_days
            .iter()
            .map(|record| -> Result<WorkDay, CliError> {
                Ok(WorkDay::new(
                    Some(record.work_day_id),
                    record.span_id,
                    EmployeeId::new(&record.employee_id),
                    parse_local_day(&record.day, tz)?,
                    parse_time_of_day(&record.start_time)?,
                    parse_time_of_day(&record.end_time)?,
                ))
            })
            .collect::<Result<_, _>>()?;

        Ok(Records {
            employees,
            spans,
            work_days,
        })
    }

    /// Executes planned store operations against the rows, in order.
    ///
    /// Returns the identifiers of inserted spans.
    ///
    /// # Errors
    ///
    /// Returns an error if an operation names a missing span or work day.
    pub fn execute(
        &mut self,
        operations: &[StoreOperation],
        tz: Tz,
    ) -> Result<Vec<i64>, CliError> {
        let mut inserted: Vec<i64> = Vec::new();

        for operation in operations {
            match operation {
                StoreOperation::InsertSpan { span, days } => {
                    let span_id: i64 = self.next_span_id();
                    self.spans.push(SpanRecord {
                        span_id,
                        employee_id: span.employee_id().value().to_string(),
                        start_date: Some(span.start_date().to_string()),
                        end_date: Some(span.end_date().to_string()),
                        shift: span.shift().label().to_string(),
                        color: Some(span.shift().color().to_hex()),
                    });
                    self.insert_work_days(span_id, span.employee_id(), days);
                    inserted.push(span_id);
                }
                StoreOperation::UpdateSpan { span } => {
                    let span_id: i64 = span.span_id().ok_or(CliError::MissingSpanId)?;
                    let record: &mut SpanRecord = self
                        .spans
                        .iter_mut()
                        .find(|record| record.span_id == span_id)
                        .ok_or(CliError::UnknownSpan(span_id))?;
                    record.start_date = Some(span.start_date().to_string());
                    record.end_date = Some(span.end_date().to_string());
                    record.shift = span.shift().label().to_string();
                    record.color = Some(span.shift().color().to_hex());
                }
                StoreOperation::InsertWorkDays {
                    span_id,
                    employee_id,
                    days,
                } => self.insert_work_days(*span_id, employee_id, days),
                StoreOperation::DeleteWorkDays { span_id, days } => {
                    self.work_days.retain(|record| {
                        !(record.span_id == *span_id
                            && parse_local_day(&record.day, tz).is_ok_and(|day| days.contains(&day)))
                    });
                }
                StoreOperation::UpsertWorkDay { work_day } => match work_day.work_day_id {
                    Some(work_day_id) => {
                        let record: &mut WorkDayRecord = self
                            .work_days
                            .iter_mut()
                            .find(|record| record.work_day_id == work_day_id)
                            .ok_or(CliError::UnknownWorkDay(work_day_id))?;
                        record.start_time = format_time(work_day.start_time);
                        record.end_time = format_time(work_day.end_time);
                    }
                    None => {
                        let work_day_id: i64 = self.next_work_day_id();
                        self.work_days.push(WorkDayRecord {
                            work_day_id,
                            span_id: work_day.span_id,
                            employee_id: work_day.employee_id.value().to_string(),
                            day: work_day.day.to_string(),
                            start_time: format_time(work_day.start_time),
                            end_time: format_time(work_day.end_time),
                        });
                    }
                },
                StoreOperation::DeleteSpan { span_id } => {
                    if !self.spans.iter().any(|record| record.span_id == *span_id) {
                        return Err(CliError::UnknownSpan(*span_id));
                    }
                    self.spans.retain(|record| record.span_id != *span_id);
                }
            }
        }

        info!(
            operations = operations.len(),
            inserted = inserted.len(),
            "Executed store operations"
        );
        Ok(inserted)
    }

    fn insert_work_days(&mut self, span_id: i64, employee_id: &EmployeeId, days: &[DayShift]) {
        for shift in days {
            let work_day_id: i64 = self.next_work_day_id();
            self.work_days.push(WorkDayRecord {
                work_day_id,
                span_id,
                employee_id: employee_id.value().to_string(),
                day: shift.day.to_string(),
                start_time: format_time(shift.hours.start()),
                end_time: format_time(shift.hours.end()),
            });
        }
    }

    fn next_span_id(&self) -> i64 {
        self.spans.iter().map(|record| record.span_id).max().unwrap_or(0) + 1
    }

    fn next_work_day_id(&self) -> i64 {
        self.work_days
            .iter()
            .map(|record| record.work_day_id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

fn format_time(value: Time) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}
