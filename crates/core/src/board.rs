// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The schedule board: store records plus everything derived from them.
//!
//! Every input change rebuilds the reservation index and the grid from
//! scratch. Rebuilds are atomic: derived state is computed first and only
//! committed together with the new inputs, so a rejected snapshot leaves the
//! board as it was.

use crate::error::CoreError;
use crate::export::slice_week;
use crate::grid::Grid;
use crate::reservation_index::{CollisionPolicy, ReservationIndex, WorkDayIndex};
use roster_domain::{
    Department, DomainError, Employee, ScheduleSpan, ScheduleWindow, WorkDay, ensure_no_conflict,
};
use time::Date;

/// Static configuration of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    /// The days shown as columns.
    pub window: ScheduleWindow,
    /// The department filter, `None` for all.
    pub department: Option<Department>,
    /// How doubly booked days are handled.
    pub collision_policy: CollisionPolicy,
}

/// Store records and the grid derived from them.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    settings: BoardSettings,
    today: Date,
    employees: Vec<Employee>,
    spans: Vec<ScheduleSpan>,
    work_days: Vec<WorkDay>,
    reservations: ReservationIndex,
    work_day_index: WorkDayIndex,
    grid: Grid,
}

impl ScheduleBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new(settings: BoardSettings, today: Date) -> Self {
        let grid: Grid = Grid::build(
            settings.window.days(),
            &[],
            today,
            &ReservationIndex::default(),
            &WorkDayIndex::default(),
        );
        Self {
            settings,
            today,
            employees: Vec::new(),
            spans: Vec::new(),
            work_days: Vec::new(),
            reservations: ReservationIndex::default(),
            work_day_index: WorkDayIndex::default(),
            grid,
        }
    }

    /// Replaces all store records at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn load(
        &mut self,
        employees: Vec<Employee>,
        spans: Vec<ScheduleSpan>,
        work_days: Vec<WorkDay>,
    ) -> Result<(), CoreError> {
        self.rebuild(self.settings, self.today, employees, spans, work_days)
    }

    /// Replaces the employee list.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_employees(&mut self, employees: Vec<Employee>) -> Result<(), CoreError> {
        let (spans, work_days) = (self.spans.clone(), self.work_days.clone());
        self.rebuild(self.settings, self.today, employees, spans, work_days)
    }

    /// Replaces the span list.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_spans(&mut self, spans: Vec<ScheduleSpan>) -> Result<(), CoreError> {
        let (employees, work_days) = (self.employees.clone(), self.work_days.clone());
        self.rebuild(self.settings, self.today, employees, spans, work_days)
    }

    /// Replaces the work day list.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_work_days(&mut self, work_days: Vec<WorkDay>) -> Result<(), CoreError> {
        let (employees, spans) = (self.employees.clone(), self.spans.clone());
        self.rebuild(self.settings, self.today, employees, spans, work_days)
    }

    /// Changes the department filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_department(&mut self, department: Option<Department>) -> Result<(), CoreError> {
        let settings = BoardSettings {
            department,
            ..self.settings
        };
        let (employees, spans, work_days) = self.records();
        self.rebuild(settings, self.today, employees, spans, work_days)
    }

    /// Moves the window to other days.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_window(&mut self, window: ScheduleWindow) -> Result<(), CoreError> {
        let settings = BoardSettings {
            window,
            ..self.settings
        };
        let (employees, spans, work_days) = self.records();
        self.rebuild(settings, self.today, employees, spans, work_days)
    }

    /// Changes what counts as today, e.g. after midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation index rejects the spans.
    pub fn set_today(&mut self, today: Date) -> Result<(), CoreError> {
        let (employees, spans, work_days) = self.records();
        self.rebuild(self.settings, today, employees, spans, work_days)
    }

    fn records(&self) -> (Vec<Employee>, Vec<ScheduleSpan>, Vec<WorkDay>) {
        (
            self.employees.clone(),
            self.spans.clone(),
            self.work_days.clone(),
        )
    }

    fn rebuild(
        &mut self,
        settings: BoardSettings,
        today: Date,
        employees: Vec<Employee>,
        spans: Vec<ScheduleSpan>,
        work_days: Vec<WorkDay>,
    ) -> Result<(), CoreError> {
        let visible: Vec<Employee> = employees
            .iter()
            .filter(|employee| employee.in_department(settings.department))
            .cloned()
            .collect();

        let reservations: ReservationIndex =
            ReservationIndex::build(&spans, &visible, settings.collision_policy)?;
        let work_day_index: WorkDayIndex = WorkDayIndex::build(&work_days);
        let grid: Grid = Grid::build(
            settings.window.days(),
            &visible,
            today,
            &reservations,
            &work_day_index,
        );

        self.settings = settings;
        self.today = today;
        self.employees = employees;
        self.spans = spans;
        self.work_days = work_days;
        self.reservations = reservations;
        self.work_day_index = work_day_index;
        self.grid = grid;
        Ok(())
    }

    /// Returns the board settings.
    #[must_use]
    pub const fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Returns the window.
    #[must_use]
    pub const fn window(&self) -> &ScheduleWindow {
        &self.settings.window
    }

    /// Returns the current local day.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Returns every employee, filtered or not.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns every span, including those of filtered-out employees.
    #[must_use]
    pub fn spans(&self) -> &[ScheduleSpan] {
        &self.spans
    }

    /// Returns every work day.
    #[must_use]
    pub fn work_days(&self) -> &[WorkDay] {
        &self.work_days
    }

    /// Returns the reservation index of the visible employees.
    #[must_use]
    pub const fn reservations(&self) -> &ReservationIndex {
        &self.reservations
    }

    /// Returns the work day index.
    #[must_use]
    pub const fn work_day_index(&self) -> &WorkDayIndex {
        &self.work_day_index
    }

    /// Returns the derived grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the span with the given identifier.
    #[must_use]
    pub fn span(&self, span_id: i64) -> Option<&ScheduleSpan> {
        self.spans
            .iter()
            .find(|span| span.span_id() == Some(span_id))
    }

    /// Checks a proposed span against all spans, visible or not.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ScheduleConflict`] naming the colliding span.
    pub fn check_conflict(
        &self,
        candidate: &ScheduleSpan,
        exclude_span_id: Option<i64>,
    ) -> Result<(), DomainError> {
        ensure_no_conflict(candidate, &self.spans, exclude_span_id)
    }

    /// Slices the Monday–Sunday week containing `day` out of the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the week is not fully inside the window.
    pub fn export_week(&self, day: Date) -> Result<Grid, CoreError> {
        slice_week(&self.grid, day)
    }
}
