// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-cell presentation data for the schedule grid.
//!
//! A cell is classified from its (employee, day) pair and the two indexes.
//! Reserved cells carry their position inside the span so the renderer can
//! draw one continuous bar: rounded on the start cell, flat in the middle
//! and rounded again on the end cell. A single-day span is both start and
//! end.

use crate::grid::CellData;
use crate::reservation_index::{ReservationIndex, WorkDayIndex};
use roster_domain::{EmployeeId, ScheduleSpan};
use time::{Date, Weekday};

/// Where a day sits inside a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanPosition {
    /// The day is the span's first day.
    pub is_start: bool,
    /// The day lies strictly between the first and last day.
    pub is_middle: bool,
    /// The day is the span's last day.
    pub is_end: bool,
}

impl SpanPosition {
    /// Computes the position of `day` inside `span`.
    ///
    /// Returns all-false for a day outside the span.
    #[must_use]
    pub fn of(span: &ScheduleSpan, day: Date) -> Self {
        if !span.covers(day) {
            return Self::default();
        }
        let is_start: bool = day == span.start_date();
        let is_end: bool = day == span.end_date();
        Self {
            is_start,
            is_middle: !is_start && !is_end,
            is_end,
        }
    }
}

/// Returns whether `day` falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(day: Date) -> bool {
    matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Stable identity of a span's cells across grid rebuilds.
///
/// Combines the span id (`new` when unpersisted) with the unix timestamp of
/// the span's start date at midnight UTC.
#[must_use]
pub fn cell_key(span: &ScheduleSpan) -> String {
    let start_stamp: i64 = span.start_date().midnight().assume_utc().unix_timestamp();
    span.span_id().map_or_else(
        || format!("span-new-{start_stamp}"),
        |id| format!("span-{id}-{start_stamp}"),
    )
}

/// Hover text summarising a span.
#[must_use]
pub fn span_tooltip(span: &ScheduleSpan) -> String {
    format!(
        "{}: {} to {}",
        span.shift().label(),
        span.start_date(),
        span.end_date()
    )
}

/// Classifies the cell of `employee_id` on `day`.
#[must_use]
pub fn classify_cell(
    employee_id: &EmployeeId,
    day: Date,
    today: Date,
    reservations: &ReservationIndex,
    work_days: &WorkDayIndex,
) -> CellData {
    let mut cell: CellData = CellData::empty(day, day == today, is_weekend(day));

    let Some(span) = reservations.get(employee_id, day) else {
        return cell;
    };

    let position: SpanPosition = SpanPosition::of(span, day);
    cell.reserved = true;
    cell.span_id = span.span_id();
    cell.shift = Some(span.shift().label().to_string());
    cell.color = Some(span.shift().color().overlay());
    cell.tooltip = Some(span_tooltip(span));
    cell.key = Some(cell_key(span));
    cell.is_start = position.is_start;
    cell.is_middle = position.is_middle;
    cell.is_end = position.is_end;

    // Unpersisted spans cannot own work days yet
    if let Some(work_day) = span
        .span_id()
        .and_then(|span_id| work_days.get(span_id, employee_id, day))
    {
        cell.text = work_day.hours_label();
    }

    cell
}
