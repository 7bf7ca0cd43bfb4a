// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppRole, BoardSettings, CollisionPolicy, CurrentUserContext, ScheduleBoard, ShiftHours,
};
use roster_domain::{
    Department, Employee, EmployeeId, ScheduleSpan, ScheduleWindow, ShiftTag, WorkDay,
};
use time::Date;
use time::macros::{date, time};

/// A June 2026 window; June 1st is a Monday.
pub fn create_test_window() -> ScheduleWindow {
    ScheduleWindow::new(date!(2026 - 06 - 01), date!(2026 - 06 - 30)).unwrap()
}

pub fn create_test_settings() -> BoardSettings {
    BoardSettings {
        window: create_test_window(),
        department: None,
        collision_policy: CollisionPolicy::LastWriteWins,
    }
}

pub fn create_test_employee(id: &str, department: Department) -> Employee {
    Employee::new(
        EmployeeId::new(id),
        format!("Employee {id}"),
        format!("role-{id}"),
        Some(department),
    )
}

pub fn create_test_employees() -> Vec<Employee> {
    vec![
        create_test_employee("ana", Department::Housekeeping),
        create_test_employee("ivo", Department::Technical),
        create_test_employee("maja", Department::Housekeeping),
    ]
}

pub fn create_test_span(id: i64, employee: &str, start: Date, end: Date) -> ScheduleSpan {
    ScheduleSpan::new(
        Some(id),
        EmployeeId::new(employee),
        start,
        end,
        ShiftTag::new("morning").unwrap(),
    )
    .unwrap()
}

pub fn create_test_work_day(id: i64, span_id: i64, employee: &str, day: Date) -> WorkDay {
    WorkDay::new(
        Some(id),
        span_id,
        EmployeeId::new(employee),
        day,
        time!(07:00),
        time!(15:00),
    )
}

/// Board with span 1 (ana, 06-10..06-12) and span 2 (ivo, 06-15..06-16).
pub fn create_test_board() -> ScheduleBoard {
    let mut board: ScheduleBoard =
        ScheduleBoard::new(create_test_settings(), date!(2026 - 06 - 11));
    board
        .load(
            create_test_employees(),
            vec![
                create_test_span(1, "ana", date!(2026 - 06 - 10), date!(2026 - 06 - 12)),
                create_test_span(2, "ivo", date!(2026 - 06 - 15), date!(2026 - 06 - 16)),
            ],
            vec![
                create_test_work_day(10, 1, "ana", date!(2026 - 06 - 10)),
                create_test_work_day(11, 1, "ana", date!(2026 - 06 - 11)),
            ],
        )
        .unwrap();
    board
}

pub fn create_manager() -> CurrentUserContext {
    CurrentUserContext::new(EmployeeId::new("boss"), AppRole::Manager, None)
}

pub fn create_staff() -> CurrentUserContext {
    CurrentUserContext::new(
        EmployeeId::new("maja"),
        AppRole::Staff,
        Some(Department::Housekeeping),
    )
}

pub fn create_test_hours() -> ShiftHours {
    ShiftHours::new(time!(06:00), time!(14:00)).unwrap()
}
