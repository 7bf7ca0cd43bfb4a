// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and CSV output of a grid.

use crate::error::CliError;
use roster::{CellData, Grid};
use std::io::Write;

const NAME_WIDTH: usize = 16;

/// Renders the grid as a fixed-width text table.
///
/// Each column is three characters wide. Reserved cells show the first
/// letter of the shift, bracketed at the span's first and last day. Free
/// weekend cells show `-`, other free cells `.`. Today's column header is
/// marked with `*`.
#[must_use]
pub fn render_table(grid: &Grid) -> String {
    let mut out: String = String::new();

    out.push_str(&" ".repeat(NAME_WIDTH));
    for (column, day) in grid.days().iter().enumerate() {
        let today: bool = grid
            .rows()
            .first()
            .and_then(|row| row.cells.get(column))
            .is_some_and(|cell| cell.is_today);
        let marker: char = if today { '*' } else { ' ' };
        out.push_str(&format!("{marker}{:02}", day.day()));
    }
    out.push('\n');

    for row in grid.rows() {
        let name: String = row.name.chars().take(NAME_WIDTH - 1).collect();
        out.push_str(&format!("{name:<NAME_WIDTH$}"));
        for cell in &row.cells {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }

    out
}

fn render_cell(cell: &CellData) -> String {
    if !cell.reserved {
        return String::from(if cell.is_weekend { " - " } else { " . " });
    }

    let letter: char = cell
        .shift
        .as_deref()
        .and_then(|label| label.chars().next())
        .map_or('#', |c| c.to_ascii_uppercase());
    let open: char = if cell.is_start { '[' } else { ' ' };
    let close: char = if cell.is_end { ']' } else { ' ' };
    format!("{open}{letter}{close}")
}

/// Writes the grid as CSV: one row per employee, one column per day.
///
/// Reserved cells hold the shift label followed by the day's hours when
/// known; free cells are empty.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(grid: &Grid, writer: W) -> Result<(), CliError> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = vec![String::from("employee_id"), String::from("name")];
    header.extend(grid.days().iter().map(ToString::to_string));
    csv.write_record(&header)?;

    for row in grid.rows() {
        let mut record: Vec<String> = vec![row.employee_id.to_string(), row.name.clone()];
        record.extend(row.cells.iter().map(|cell| {
            match (cell.shift.as_deref(), cell.text.is_empty()) {
                (Some(shift), false) => format!("{shift} {}", cell.text),
                (Some(shift), true) => shift.to_string(),
                (None, _) => String::new(),
            }
        }));
        csv.write_record(&record)?;
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
