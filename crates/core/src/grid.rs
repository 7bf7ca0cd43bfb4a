// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classifier::classify_cell;
use crate::reservation_index::{ReservationIndex, WorkDayIndex};
use roster_domain::{Employee, EmployeeId};
use serde::Serialize;
use time::Date;
use tracing::debug;

/// Presentation data for one (employee, day) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellData {
    /// The day of the cell's column.
    pub day: Date,
    /// Whether a span covers the cell.
    pub reserved: bool,
    /// The covering span, if persisted.
    pub span_id: Option<i64>,
    /// The covering span's shift label.
    pub shift: Option<String>,
    /// Translucent overlay color of the covering span.
    pub color: Option<String>,
    /// `HH:MM–HH:MM` hours of the work day, empty when there is none.
    pub text: String,
    /// Hover text.
    pub tooltip: Option<String>,
    /// Stable identity of the covering span across rebuilds.
    pub key: Option<String>,
    /// The cell's day is today.
    pub is_today: bool,
    /// The cell's day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// First day of the covering span.
    pub is_start: bool,
    /// Strictly inside the covering span.
    pub is_middle: bool,
    /// Last day of the covering span.
    pub is_end: bool,
}

impl CellData {
    /// An unreserved cell.
    #[must_use]
    pub const fn empty(day: Date, is_today: bool, is_weekend: bool) -> Self {
        Self {
            day,
            reserved: false,
            span_id: None,
            shift: None,
            color: None,
            text: String::new(),
            tooltip: None,
            key: None,
            is_today,
            is_weekend,
            is_start: false,
            is_middle: false,
            is_end: false,
        }
    }
}

/// One employee's row of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// The employee shown in this row.
    pub employee_id: EmployeeId,
    /// The row header.
    pub name: String,
    /// One cell per grid day.
    pub cells: Vec<CellData>,
}

/// The employee × day matrix rendered by the schedule view.
///
/// Entirely derived from the window days, the visible employees and the two
/// indexes. It is rebuilt rather than mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Grid {
    days: Vec<Date>,
    rows: Vec<GridRow>,
}

impl Grid {
    /// Builds the grid.
    ///
    /// # Arguments
    ///
    /// * `days` - Column days, in display order
    /// * `employees` - Visible employees, one row each, in display order
    /// * `today` - The current local day
    /// * `reservations` - The reservation index
    /// * `work_days` - The work day index
    #[must_use]
    pub fn build(
        days: Vec<Date>,
        employees: &[Employee],
        today: Date,
        reservations: &ReservationIndex,
        work_days: &WorkDayIndex,
    ) -> Self {
        let rows: Vec<GridRow> = employees
            .iter()
            .map(|employee| GridRow {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                cells: days
                    .iter()
                    .map(|day| classify_cell(&employee.id, *day, today, reservations, work_days))
                    .collect(),
            })
            .collect();

        debug!(
            rows = rows.len(),
            columns = days.len(),
            "Rebuilt schedule grid"
        );

        Self { days, rows }
    }

    pub(crate) const fn from_parts(days: Vec<Date>, rows: Vec<GridRow>) -> Self {
        Self { days, rows }
    }

    /// Returns the column days.
    #[must_use]
    pub fn days(&self) -> &[Date] {
        &self.days
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&GridRow> {
        self.rows.get(index)
    }

    /// Returns the cell at (`row`, `column`).
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellData> {
        self.rows.get(row)?.cells.get(column)
    }

    /// Returns whether the cell exists and is reserved.
    #[must_use]
    pub fn is_reserved(&self, row: usize, column: usize) -> bool {
        self.cell(row, column).is_some_and(|cell| cell.reserved)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.days.len()
    }

    /// Returns the column showing `day`.
    #[must_use]
    pub fn column_of(&self, day: Date) -> Option<usize> {
        self.days.iter().position(|column_day| *column_day == day)
    }

    /// Returns the row showing the employee.
    #[must_use]
    pub fn row_of(&self, employee_id: &EmployeeId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| &row.employee_id == employee_id)
    }
}
