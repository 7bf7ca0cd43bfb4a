// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lookup structures from (employee, day) to span and work day.
//!
//! Both indexes are rebuilt in full from the flat record lists whenever
//! spans, work days or the employee filter change. There is no incremental
//! update.

use crate::error::CoreError;
use roster_domain::{DomainError, Employee, EmployeeId, ScheduleSpan, WorkDay};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use time::Date;
use tracing::{debug, warn};

/// What to do when two spans of one employee cover the same day.
///
/// The conflict check prevents this when spans are proposed, but the store
/// does not enforce it, so inconsistent snapshots can still arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CollisionPolicy {
    /// The span processed later owns the day.
    #[default]
    LastWriteWins,
    /// Fail the rebuild.
    Reject,
}

impl FromStr for CollisionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "last-write-wins" => Ok(Self::LastWriteWins),
            "reject" => Ok(Self::Reject),
            _ => Err(DomainError::InvalidSetting {
                setting: String::from("collision policy"),
                value: s.to_string(),
            }),
        }
    }
}

/// Maps (employee, day) to the span covering that day.
#[derive(Debug, Clone, Default)]
pub struct ReservationIndex {
    spans: Vec<ScheduleSpan>,
    cells: HashMap<EmployeeId, HashMap<Date, usize>>,
    collisions: usize,
}

impl ReservationIndex {
    /// Builds the index for the visible employees.
    ///
    /// Spans of employees outside `visible` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OverlappingSpans`] on the first doubly covered
    /// day when `policy` is [`CollisionPolicy::Reject`].
    pub fn build(
        spans: &[ScheduleSpan],
        visible: &[Employee],
        policy: CollisionPolicy,
    ) -> Result<Self, CoreError> {
        let visible_ids: HashSet<&EmployeeId> = visible.iter().map(|e| &e.id).collect();
        let mut index: Self = Self::default();

        for span in spans
            .iter()
            .filter(|span| visible_ids.contains(span.employee_id()))
        {
            let slot: usize = index.spans.len();
            index.spans.push(span.clone());

            let days: &mut HashMap<Date, usize> =
                index.cells.entry(span.employee_id().clone()).or_default();

            for day in span.days() {
                let Some(previous) = days.insert(day, slot) else {
                    continue;
                };

                let existing_span_id: Option<i64> =
                    index.spans.get(previous).and_then(ScheduleSpan::span_id);

                match policy {
                    CollisionPolicy::Reject => {
                        return Err(DomainError::OverlappingSpans {
                            employee_id: span.employee_id().clone(),
                            day,
                            existing_span_id,
                            incoming_span_id: span.span_id(),
                        }
                        .into());
                    }
                    CollisionPolicy::LastWriteWins => {
                        warn!(
                            employee = %span.employee_id(),
                            %day,
                            existing = ?existing_span_id,
                            incoming = ?span.span_id(),
                            "Overlapping spans in snapshot, later span wins"
                        );
                        index.collisions += 1;
                    }
                }
            }
        }

        debug!(
            spans = index.spans.len(),
            employees = index.cells.len(),
            collisions = index.collisions,
            "Rebuilt reservation index"
        );

        Ok(index)
    }

    /// Returns the span covering `day` for the employee.
    #[must_use]
    pub fn get(&self, employee_id: &EmployeeId, day: Date) -> Option<&ScheduleSpan> {
        let slot: usize = *self.cells.get(employee_id)?.get(&day)?;
        self.spans.get(slot)
    }

    /// Returns whether the employee is booked on `day`.
    #[must_use]
    pub fn is_reserved(&self, employee_id: &EmployeeId, day: Date) -> bool {
        self.get(employee_id, day).is_some()
    }

    /// Returns the number of indexed (employee, day) cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    /// Returns whether no cell is reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many days were claimed by more than one span.
    #[must_use]
    pub const fn collision_count(&self) -> usize {
        self.collisions
    }
}

/// Maps (span, employee, day) to the concrete work day.
#[derive(Debug, Clone, Default)]
pub struct WorkDayIndex {
    entries: HashMap<EmployeeId, HashMap<(i64, Date), WorkDay>>,
}

impl WorkDayIndex {
    /// Builds the index. A later record for the same triple replaces an earlier one.
    #[must_use]
    pub fn build(work_days: &[WorkDay]) -> Self {
        let mut entries: HashMap<EmployeeId, HashMap<(i64, Date), WorkDay>> = HashMap::new();
        for work_day in work_days {
            entries
                .entry(work_day.employee_id.clone())
                .or_default()
                .insert((work_day.span_id, work_day.day), work_day.clone());
        }
        Self { entries }
    }

    /// Returns the work day for the exact (span, employee, day) triple.
    #[must_use]
    pub fn get(&self, span_id: i64, employee_id: &EmployeeId, day: Date) -> Option<&WorkDay> {
        self.entries.get(employee_id)?.get(&(span_id, day))
    }

    /// Returns the number of indexed work days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns whether the index holds no work days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
