// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Column slicing of the grid for image/document export.
//!
//! The export target renders whatever grid it is handed. The range must lie
//! inside the current grid; it is never extended implicitly.

use crate::error::CoreError;
use crate::grid::{Grid, GridRow};
use roster_domain::week_containing;
use time::Date;

/// Returns the sub-grid covering `start_day..=end_day` for every row.
///
/// # Errors
///
/// Returns an error if:
/// - `end_day` is before `start_day`
/// - Either day is not a column of `grid`
pub fn slice_columns(grid: &Grid, start_day: Date, end_day: Date) -> Result<Grid, CoreError> {
    if end_day < start_day {
        return Err(CoreError::InvalidExportRange {
            start: start_day,
            end: end_day,
        });
    }

    let locate = |day: Date| {
        grid.column_of(day)
            .ok_or(CoreError::ExportDayNotInGrid { day })
    };
    let first: usize = locate(start_day)?;
    let last: usize = locate(end_day)?;

    let days: Vec<Date> = grid.days()[first..=last].to_vec();
    let rows: Vec<GridRow> = grid
        .rows()
        .iter()
        .map(|row| GridRow {
            employee_id: row.employee_id.clone(),
            name: row.name.clone(),
            cells: row.cells[first..=last].to_vec(),
        })
        .collect();

    Ok(Grid::from_parts(days, rows))
}

/// Returns the Monday–Sunday week of the grid containing `day`.
///
/// # Errors
///
/// Returns an error if any day of that week is outside the grid.
pub fn slice_week(grid: &Grid, day: Date) -> Result<Grid, CoreError> {
    let (monday, sunday) = week_containing(day)?;
    slice_columns(grid, monday, sunday)
}
