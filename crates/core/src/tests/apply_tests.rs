// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_manager, create_staff, create_test_board, create_test_hours, create_test_span,
};
use crate::{
    Command, CoreError, DayShift, RangeSelection, ScheduleBoard, SelectedRange, ShiftHours,
    StoreOperation, TransitionResult, apply,
};
use roster_domain::{DomainError, EmployeeId, ScheduleSpan, ShiftTag, WorkDay};
use time::Date;
use time::macros::{date, time};

fn create_command(employee: &str, start: Date, end: Date) -> Command {
    Command::CreateSpan {
        employee_id: EmployeeId::new(employee),
        start_date: start,
        end_date: end,
        shift: ShiftTag::new("afternoon").unwrap(),
        hours: create_test_hours(),
    }
}

fn update_command(span_id: i64, start: Date, end: Date) -> Command {
    Command::UpdateSpan {
        span_id,
        start_date: start,
        end_date: end,
        shift: ShiftTag::new("morning").unwrap(),
        hours: create_test_hours(),
    }
}

#[test]
fn test_create_plans_span_with_one_work_day_per_day() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult = apply(
        &board,
        &create_manager(),
        create_command("maja", date!(2026 - 06 - 10), date!(2026 - 06 - 12)),
    )
    .unwrap();

    assert_eq!(result.operations.len(), 1);
    let StoreOperation::InsertSpan { span, days } = &result.operations[0] else {
        panic!("expected InsertSpan, got {:?}", result.operations[0]);
    };
    assert_eq!(span.span_id(), None);
    assert_eq!(span.employee_id(), &EmployeeId::new("maja"));
    assert_eq!(days.len(), 3);
    assert_eq!(
        days[0],
        DayShift {
            day: date!(2026 - 06 - 10),
            hours: create_test_hours()
        }
    );
    assert!(result.summary.contains("maja"));
}

#[test]
fn test_create_does_not_touch_board() {
    let board: ScheduleBoard = create_test_board();
    let before = board.grid().clone();
    apply(
        &board,
        &create_manager(),
        create_command("maja", date!(2026 - 06 - 10), date!(2026 - 06 - 12)),
    )
    .unwrap();

    assert_eq!(board.grid(), &before);
    assert_eq!(board.spans().len(), 2);
}

#[test]
fn test_create_overlapping_span_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        create_command("ana", date!(2026 - 06 - 12), date!(2026 - 06 - 14)),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ScheduleConflict {
            employee_id: EmployeeId::new("ana"),
            conflicting_span_id: Some(1),
            conflicting_start: date!(2026 - 06 - 10),
            conflicting_end: date!(2026 - 06 - 12),
        })
    );
}

#[test]
fn test_create_adjacent_span_is_allowed() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        create_command("ana", date!(2026 - 06 - 13), date!(2026 - 06 - 14)),
    );
    assert!(result.is_ok());
}

#[test]
fn test_create_for_unknown_employee_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        create_command("ghost", date!(2026 - 06 - 13), date!(2026 - 06 - 14)),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::EmployeeNotFound(EmployeeId::new("ghost")))
    );
}

#[test]
fn test_create_outside_window_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        create_command("maja", date!(2026 - 06 - 29), date!(2026 - 07 - 02)),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DayOutsideWindow { .. }
        ))
    ));
}

#[test]
fn test_create_reversed_range_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        create_command("maja", date!(2026 - 06 - 12), date!(2026 - 06 - 10)),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidSpanRange { .. }
        ))
    ));
}

#[test]
fn test_staff_cannot_create() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_staff(),
        create_command("maja", date!(2026 - 06 - 20), date!(2026 - 06 - 21)),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::Unauthorized {
            action: String::from("create spans"),
            role: String::from("staff"),
        }
    );
}

#[test]
fn test_selection_feeds_create_command() {
    let board: ScheduleBoard = create_test_board();
    let mut selection: RangeSelection = RangeSelection::new();
    assert!(selection.pointer_down(board.grid(), 2, 19));
    assert!(selection.pointer_move(board.grid(), 2, 21));
    let range: SelectedRange = selection.pointer_up(board.grid(), 21).unwrap();

    let command: Command = Command::create_from_selection(
        &range,
        ShiftTag::new("night").unwrap(),
        ShiftHours::default(),
    );
    let result: TransitionResult = apply(&board, &create_manager(), command).unwrap();

    let StoreOperation::InsertSpan { span, days } = &result.operations[0] else {
        panic!("expected InsertSpan");
    };
    assert_eq!(span.start_date(), date!(2026 - 06 - 20));
    assert_eq!(span.end_date(), date!(2026 - 06 - 22));
    assert!(days.iter().all(|d| d.hours.start() == time!(08:00)));
}

#[test]
fn test_update_excludes_own_span_from_conflict_check() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult = apply(
        &board,
        &create_manager(),
        update_command(1, date!(2026 - 06 - 11), date!(2026 - 06 - 13)),
    )
    .unwrap();

    let moved: ScheduleSpan = ScheduleSpan::new(
        Some(1),
        EmployeeId::new("ana"),
        date!(2026 - 06 - 11),
        date!(2026 - 06 - 13),
        ShiftTag::new("morning").unwrap(),
    )
    .unwrap();
    assert_eq!(
        result.operations,
        vec![
            StoreOperation::UpdateSpan { span: moved },
            StoreOperation::DeleteWorkDays {
                span_id: 1,
                days: vec![date!(2026 - 06 - 10)],
            },
            StoreOperation::InsertWorkDays {
                span_id: 1,
                employee_id: EmployeeId::new("ana"),
                days: vec![DayShift {
                    day: date!(2026 - 06 - 13),
                    hours: create_test_hours(),
                }],
            },
        ]
    );
}

#[test]
fn test_update_with_same_days_only_updates_span() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult = apply(
        &board,
        &create_manager(),
        update_command(2, date!(2026 - 06 - 15), date!(2026 - 06 - 16)),
    )
    .unwrap();

    assert_eq!(result.operations.len(), 1);
    assert!(matches!(
        result.operations[0],
        StoreOperation::UpdateSpan { .. }
    ));
}

#[test]
fn test_update_into_other_span_is_rejected() {
    let mut board: ScheduleBoard = create_test_board();
    board
        .set_spans(vec![
            create_test_span(1, "ana", date!(2026 - 06 - 10), date!(2026 - 06 - 12)),
            create_test_span(3, "ana", date!(2026 - 06 - 20), date!(2026 - 06 - 22)),
        ])
        .unwrap();

    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        update_command(3, date!(2026 - 06 - 12), date!(2026 - 06 - 21)),
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ScheduleConflict {
            conflicting_span_id: Some(1),
            ..
        }))
    ));
}

#[test]
fn test_update_unknown_span_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        update_command(42, date!(2026 - 06 - 11), date!(2026 - 06 - 13)),
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::SpanNotFound(42))
    );
}

#[test]
fn test_delete_removes_work_days_before_span() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult =
        apply(&board, &create_manager(), Command::DeleteSpan { span_id: 2 }).unwrap();

    assert_eq!(
        result.operations,
        vec![
            StoreOperation::DeleteWorkDays {
                span_id: 2,
                days: vec![date!(2026 - 06 - 15), date!(2026 - 06 - 16)],
            },
            StoreOperation::DeleteSpan { span_id: 2 },
        ]
    );
}

#[test]
fn test_set_hours_reuses_existing_work_day() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult = apply(
        &board,
        &create_manager(),
        Command::SetWorkDayHours {
            span_id: 1,
            day: date!(2026 - 06 - 11),
            hours: ShiftHours::new(time!(22:00), time!(06:00)).unwrap(),
        },
    )
    .unwrap();

    assert_eq!(
        result.operations,
        vec![StoreOperation::UpsertWorkDay {
            work_day: WorkDay::new(
                Some(11),
                1,
                EmployeeId::new("ana"),
                date!(2026 - 06 - 11),
                time!(22:00),
                time!(06:00),
            ),
        }]
    );
}

#[test]
fn test_set_hours_inserts_missing_work_day() {
    let board: ScheduleBoard = create_test_board();
    let result: TransitionResult = apply(
        &board,
        &create_manager(),
        Command::SetWorkDayHours {
            span_id: 1,
            day: date!(2026 - 06 - 12),
            hours: create_test_hours(),
        },
    )
    .unwrap();

    let StoreOperation::UpsertWorkDay { work_day } = &result.operations[0] else {
        panic!("expected UpsertWorkDay");
    };
    assert_eq!(work_day.work_day_id, None);
    assert_eq!(work_day.hours_label(), "06:00–14:00");
}

#[test]
fn test_set_hours_outside_span_is_rejected() {
    let board: ScheduleBoard = create_test_board();
    let result: Result<TransitionResult, CoreError> = apply(
        &board,
        &create_manager(),
        Command::SetWorkDayHours {
            span_id: 1,
            day: date!(2026 - 06 - 13),
            hours: create_test_hours(),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::WorkDayOutsideSpan {
            span_id: 1,
            day: date!(2026 - 06 - 13),
        })
    );
}

#[test]
fn test_zero_length_hours_are_rejected() {
    assert!(matches!(
        ShiftHours::new(time!(08:00), time!(08:00)),
        Err(CoreError::InvalidShiftHours { .. })
    ));
}
