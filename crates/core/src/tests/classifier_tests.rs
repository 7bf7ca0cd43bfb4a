// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_employees, create_test_span, create_test_work_day};
use crate::{
    CellData, CollisionPolicy, ReservationIndex, SpanPosition, WorkDayIndex, cell_key,
    classify_cell, is_weekend, span_tooltip,
};
use roster_domain::{EmployeeId, ScheduleSpan, ShiftTag};
use time::Date;
use time::macros::date;

fn create_indexes() -> (ReservationIndex, WorkDayIndex) {
    let spans: Vec<ScheduleSpan> = vec![create_test_span(
        1,
        "ana",
        date!(2026 - 06 - 10),
        date!(2026 - 06 - 12),
    )];
    let reservations: ReservationIndex =
        ReservationIndex::build(&spans, &create_test_employees(), CollisionPolicy::default())
            .unwrap();
    let work_days: WorkDayIndex =
        WorkDayIndex::build(&[create_test_work_day(10, 1, "ana", date!(2026 - 06 - 10))]);
    (reservations, work_days)
}

#[test]
fn test_three_day_span_positions() {
    let (reservations, work_days) = create_indexes();
    let ana: EmployeeId = EmployeeId::new("ana");
    let today: Date = date!(2026 - 06 - 01);

    let first: CellData =
        classify_cell(&ana, date!(2026 - 06 - 10), today, &reservations, &work_days);
    let middle: CellData =
        classify_cell(&ana, date!(2026 - 06 - 11), today, &reservations, &work_days);
    let last: CellData =
        classify_cell(&ana, date!(2026 - 06 - 12), today, &reservations, &work_days);

    assert!(first.is_start && !first.is_middle && !first.is_end);
    assert!(!middle.is_start && middle.is_middle && !middle.is_end);
    assert!(!last.is_start && !last.is_middle && last.is_end);
    assert!(first.reserved && middle.reserved && last.reserved);
    assert_eq!(first.key, middle.key);
    assert_eq!(middle.key, last.key);
}

#[test]
fn test_single_day_span_is_start_and_end() {
    let span: ScheduleSpan =
        create_test_span(3, "ivo", date!(2026 - 06 - 20), date!(2026 - 06 - 20));
    let position: SpanPosition = SpanPosition::of(&span, date!(2026 - 06 - 20));

    assert!(position.is_start);
    assert!(position.is_end);
    assert!(!position.is_middle);
}

#[test]
fn test_position_outside_span_is_empty() {
    let span: ScheduleSpan =
        create_test_span(3, "ivo", date!(2026 - 06 - 20), date!(2026 - 06 - 22));
    assert_eq!(
        SpanPosition::of(&span, date!(2026 - 06 - 23)),
        SpanPosition::default()
    );
}

#[test]
fn test_free_cell_carries_only_calendar_flags() {
    let (reservations, work_days) = create_indexes();
    let cell: CellData = classify_cell(
        &EmployeeId::new("ivo"),
        date!(2026 - 06 - 13),
        date!(2026 - 06 - 13),
        &reservations,
        &work_days,
    );

    assert!(!cell.reserved);
    assert!(cell.is_today);
    assert!(cell.is_weekend);
    assert_eq!(cell.span_id, None);
    assert_eq!(cell.color, None);
    assert_eq!(cell.key, None);
    assert!(cell.text.is_empty());
    assert!(!cell.is_start && !cell.is_middle && !cell.is_end);
}

#[test]
fn test_reserved_cell_carries_span_data() {
    let (reservations, work_days) = create_indexes();
    let cell: CellData = classify_cell(
        &EmployeeId::new("ana"),
        date!(2026 - 06 - 10),
        date!(2026 - 06 - 01),
        &reservations,
        &work_days,
    );

    assert_eq!(cell.span_id, Some(1));
    assert_eq!(cell.shift.as_deref(), Some("morning"));
    assert_eq!(cell.color.as_deref(), Some("rgba(76, 175, 80, 0.35)"));
    assert_eq!(
        cell.tooltip.as_deref(),
        Some("morning: 2026-06-10 to 2026-06-12")
    );
    assert_eq!(cell.text, "07:00–15:00");
}

#[test]
fn test_reserved_cell_without_work_day_has_no_text() {
    let (reservations, work_days) = create_indexes();
    let cell: CellData = classify_cell(
        &EmployeeId::new("ana"),
        date!(2026 - 06 - 12),
        date!(2026 - 06 - 01),
        &reservations,
        &work_days,
    );

    assert!(cell.reserved);
    assert!(cell.text.is_empty());
}

#[test]
fn test_weekend_detection() {
    assert!(!is_weekend(date!(2026 - 06 - 12)));
    assert!(is_weekend(date!(2026 - 06 - 13)));
    assert!(is_weekend(date!(2026 - 06 - 14)));
    assert!(!is_weekend(date!(2026 - 06 - 15)));
}

#[test]
fn test_cell_key_uses_start_midnight_utc() {
    let span: ScheduleSpan =
        create_test_span(7, "ana", date!(2026 - 06 - 10), date!(2026 - 06 - 12));
    assert_eq!(cell_key(&span), "span-7-1781049600");

    let unsaved: ScheduleSpan = ScheduleSpan::new(
        None,
        EmployeeId::new("ana"),
        date!(2026 - 06 - 10),
        date!(2026 - 06 - 12),
        ShiftTag::new("night").unwrap(),
    )
    .unwrap();
    assert_eq!(cell_key(&unsaved), "span-new-1781049600");
}

#[test]
fn test_tooltip_names_shift_and_range() {
    let span: ScheduleSpan = ScheduleSpan::new(
        Some(1),
        EmployeeId::new("ana"),
        date!(2026 - 07 - 01),
        date!(2026 - 07 - 03),
        ShiftTag::new("night").unwrap(),
    )
    .unwrap();
    assert_eq!(span_tooltip(&span), "night: 2026-07-01 to 2026-07-03");
}
