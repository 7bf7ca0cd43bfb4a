// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drag-to-select state machine over the schedule grid.
//!
//! ```text
//! Idle --pointer_down(free cell)--> Selecting
//! Selecting --pointer_move(same row)--> Selecting (end column clamped)
//! Selecting --pointer_up--> Idle, emits SelectedRange
//! Selecting --cancel--> Idle
//! ```
//!
//! ## Invariants
//!
//! - A selection never covers a reserved cell
//! - Only moves in the row the drag started in are honored
//! - Pointer-up without an active selection emits nothing

use crate::grid::Grid;
use roster_domain::EmployeeId;
use time::Date;
use tracing::debug;

/// The state of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Selecting {
        /// The row the drag started in.
        row: usize,
        /// The column the drag started in.
        start_column: usize,
        /// The column the selection currently reaches.
        end_column: usize,
    },
}

impl SelectionState {
    /// Returns whether a drag is in progress.
    #[must_use]
    pub const fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting { .. })
    }
}

/// A committed selection, ready to prefill the span form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRange {
    /// The grid row the range was selected in.
    pub row: usize,
    /// The employee of that row.
    pub employee_id: EmployeeId,
    /// First selected day.
    pub start_date: Date,
    /// Last selected day (inclusive).
    pub end_date: Date,
    /// The day the pointer was released on, clamped into the range.
    pub anchor_date: Date,
}

/// Tracks an in-progress drag selection.
#[derive(Debug, Clone, Default)]
pub struct RangeSelection {
    state: SelectionState,
}

impl RangeSelection {
    /// Creates an idle selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SelectionState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the selected row and inclusive column bounds while dragging.
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize, usize)> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selecting {
                row,
                start_column,
                end_column,
            } => Some((
                row,
                start_column.min(end_column),
                start_column.max(end_column),
            )),
        }
    }

    /// Returns whether the cell should be highlighted as selected.
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.bounds()
            .is_some_and(|(r, lo, hi)| r == row && (lo..=hi).contains(&column))
    }

    /// Starts a drag on a free cell.
    ///
    /// Returns `false` and leaves the state untouched when the cell is out of
    /// bounds or already reserved; clicking a reserved cell edits its span.
    pub fn pointer_down(&mut self, grid: &Grid, row: usize, column: usize) -> bool {
        match grid.cell(row, column) {
            Some(cell) if !cell.reserved => {
                self.state = SelectionState::Selecting {
                    row,
                    start_column: column,
                    end_column: column,
                };
                debug!(row, column, "Selection started");
                true
            }
            _ => false,
        }
    }

    /// Extends the drag to the hovered cell.
    ///
    /// Returns whether the end column changed.
    pub fn pointer_move(&mut self, grid: &Grid, row: usize, column: usize) -> bool {
        let SelectionState::Selecting {
            row: selected_row,
            start_column,
            end_column,
        } = self.state
        else {
            return false;
        };

        if row != selected_row || column >= grid.column_count() {
            return false;
        }

        let clamped: usize = clamp_end_column(grid, selected_row, start_column, column);
        if clamped == end_column {
            return false;
        }

        self.state = SelectionState::Selecting {
            row: selected_row,
            start_column,
            end_column: clamped,
        };
        true
    }

    /// Commits the drag.
    ///
    /// The range is clamped again against `grid`, since reservations may
    /// have arrived while dragging. Nothing is emitted if the start cell has
    /// been booked meanwhile. `column` is where the pointer was released; it
    /// is clamped into the selected range and reported as the anchor day.
    /// Always returns to idle.
    pub fn pointer_up(&mut self, grid: &Grid, column: usize) -> Option<SelectedRange> {
        let SelectionState::Selecting {
            row,
            start_column,
            end_column,
        } = self.state
        else {
            return None;
        };
        self.state = SelectionState::Idle;

        if grid.cell(row, start_column).is_none_or(|cell| cell.reserved) {
            debug!(row, start_column, "Selection start no longer free, dropped");
            return None;
        }

        let end_column: usize = clamp_end_column(grid, row, start_column, end_column);
        let (lo, hi) = (start_column.min(end_column), start_column.max(end_column));

        let days: &[Date] = grid.days();
        let employee_id: EmployeeId = grid.row(row)?.employee_id.clone();
        let range = SelectedRange {
            row,
            employee_id,
            start_date: *days.get(lo)?,
            end_date: *days.get(hi)?,
            anchor_date: *days.get(column.clamp(lo, hi))?,
        };

        debug!(
            row,
            start = %range.start_date,
            end = %range.end_date,
            "Selection committed"
        );
        Some(range)
    }

    /// Abandons the drag without emitting.
    pub fn cancel(&mut self) {
        if self.state.is_selecting() {
            debug!("Selection cancelled");
        }
        self.state = SelectionState::Idle;
    }
}

/// Clamps a drag from `start` towards `target` so it stops before the first
/// reserved cell in between.
///
/// Searches forward when extending right and backward when extending left.
#[must_use]
pub fn clamp_end_column(grid: &Grid, row: usize, start: usize, target: usize) -> usize {
    if target > start {
        ((start + 1)..=target)
            .find(|column| grid.is_reserved(row, *column))
            .map_or(target, |obstruction| obstruction - 1)
    } else if target < start {
        (target..start)
            .rev()
            .find(|column| grid.is_reserved(row, *column))
            .map_or(target, |obstruction| obstruction + 1)
    } else {
        target
    }
}
