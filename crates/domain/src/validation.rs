// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Employee, EmployeeId, ScheduleSpan, WorkDay};
use crate::window::ScheduleWindow;

/// Validates that an employee's basic field constraints are met.
///
/// # Errors
///
/// Returns an error if:
/// - The employee identifier is empty
/// - The display name is empty
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.id.value().is_empty() {
        return Err(DomainError::InvalidEmployee(String::from(
            "Employee id cannot be empty",
        )));
    }

    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidEmployee(format!(
            "Employee '{}' has no display name",
            employee.id
        )));
    }

    Ok(())
}

/// Validates that an employee exists in the given list.
///
/// # Errors
///
/// Returns an error if no employee has the given identifier.
pub fn validate_employee_exists<'a>(
    employees: &'a [Employee],
    employee_id: &EmployeeId,
) -> Result<&'a Employee, DomainError> {
    employees
        .iter()
        .find(|employee| &employee.id == employee_id)
        .ok_or_else(|| DomainError::EmployeeNotFound(employee_id.clone()))
}

/// Validates that a span lies entirely inside the schedule window.
///
/// # Errors
///
/// Returns an error naming the first bound that falls outside the window.
pub fn validate_span_in_window(
    span: &ScheduleSpan,
    window: &ScheduleWindow,
) -> Result<(), DomainError> {
    for day in [span.start_date(), span.end_date()] {
        if !window.contains(day) {
            return Err(DomainError::DayOutsideWindow {
                day,
                window_start: window.start(),
                window_end: window.end(),
            });
        }
    }
    Ok(())
}

/// Validates that a work day belongs to the given span.
///
/// # Errors
///
/// Returns an error if the work day references another span, another
/// employee, or a day the span does not cover.
pub fn validate_work_day(work_day: &WorkDay, span: &ScheduleSpan) -> Result<(), DomainError> {
    let belongs: bool = span.span_id() == Some(work_day.span_id)
        && span.employee_id() == &work_day.employee_id
        && span.covers(work_day.day);

    if belongs {
        Ok(())
    } else {
        Err(DomainError::WorkDayOutsideSpan {
            span_id: work_day.span_id,
            day: work_day.day,
        })
    }
}
