// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overlap detection between schedule spans.
//!
//! Two spans conflict when they belong to the same employee and their
//! inclusive day ranges share at least one day. When a span is being
//! edited, its own stored version is excluded by id so it does not collide
//! with itself.
//!
//! ## Invariants
//!
//! - Both range bounds are inclusive: touching on a single day is a conflict
//! - Adjacent ranges (one ends the day before the other starts) never conflict
//! - The relation is symmetric
//! - Detection is a pure predicate; nothing is mutated

use crate::error::DomainError;
use crate::types::ScheduleSpan;
use time::Date;

/// Returns whether the inclusive ranges `[a_start, a_end]` and `[b_start, b_end]` share a day.
#[must_use]
pub fn ranges_overlap(a_start: Date, a_end: Date, b_start: Date, b_end: Date) -> bool {
    a_start <= b_end && a_end >= b_start
}

/// Returns the first existing span that collides with `candidate`.
///
/// # Arguments
///
/// * `candidate` - The proposed span
/// * `existing` - All known spans
/// * `exclude_span_id` - Identifier to skip, used when `candidate` is an edit of a stored span
#[must_use]
pub fn find_conflict<'a>(
    candidate: &ScheduleSpan,
    existing: &'a [ScheduleSpan],
    exclude_span_id: Option<i64>,
) -> Option<&'a ScheduleSpan> {
    existing.iter().find(|span| {
        span.employee_id() == candidate.employee_id()
            && !(exclude_span_id.is_some() && span.span_id() == exclude_span_id)
            && ranges_overlap(
                candidate.start_date(),
                candidate.end_date(),
                span.start_date(),
                span.end_date(),
            )
    })
}

/// Returns whether `candidate` overlaps any span of the same employee.
#[must_use]
pub fn has_conflict(
    candidate: &ScheduleSpan,
    existing: &[ScheduleSpan],
    exclude_span_id: Option<i64>,
) -> bool {
    find_conflict(candidate, existing, exclude_span_id).is_some()
}

/// Fails with [`DomainError::ScheduleConflict`] naming the colliding span.
///
/// # Errors
///
/// Returns an error if `candidate` overlaps a span of the same employee.
pub fn ensure_no_conflict(
    candidate: &ScheduleSpan,
    existing: &[ScheduleSpan],
    exclude_span_id: Option<i64>,
) -> Result<(), DomainError> {
    match find_conflict(candidate, existing, exclude_span_id) {
        Some(span) => Err(DomainError::ScheduleConflict {
            employee_id: span.employee_id().clone(),
            conflicting_span_id: span.span_id(),
            conflicting_start: span.start_date(),
            conflicting_end: span.end_date(),
        }),
        None => Ok(()),
    }
}
