// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_manager, create_staff};
use crate::{
    AppRole, Capability, CoreError, CurrentUserContext, ScheduleCapabilities, compute_capabilities,
    effective_department,
};
use roster_domain::{Department, EmployeeId};
use std::str::FromStr;

#[test]
fn test_planners_may_edit() {
    let admin: CurrentUserContext =
        CurrentUserContext::new(EmployeeId::new("root"), AppRole::Admin, None);

    for ctx in [admin, create_manager()] {
        let capabilities: ScheduleCapabilities = compute_capabilities(&ctx);
        assert_eq!(capabilities.can_edit_spans, Capability::Allowed);
        assert_eq!(capabilities.can_edit_hours, Capability::Allowed);
        assert_eq!(capabilities.can_view_all_departments, Capability::Allowed);
    }
}

#[test]
fn test_staff_may_only_view() {
    let capabilities: ScheduleCapabilities = compute_capabilities(&create_staff());

    assert!(!capabilities.can_edit_spans.is_allowed());
    assert!(!capabilities.can_edit_hours.is_allowed());
    assert!(!capabilities.can_view_all_departments.is_allowed());
}

#[test]
fn test_staff_are_pinned_to_their_department() {
    assert_eq!(
        effective_department(&create_staff(), None).unwrap(),
        Some(Department::Housekeeping)
    );
    assert_eq!(
        effective_department(&create_staff(), Some(Department::Technical)).unwrap(),
        Some(Department::Housekeeping)
    );
    assert_eq!(
        effective_department(&create_manager(), Some(Department::Technical)).unwrap(),
        Some(Department::Technical)
    );
    assert_eq!(effective_department(&create_manager(), None).unwrap(), None);
}

#[test]
fn test_staff_without_department_see_nothing() {
    let ctx: CurrentUserContext =
        CurrentUserContext::new(EmployeeId::new("drifter"), AppRole::Staff, None);

    assert_eq!(
        compute_capabilities(&ctx).can_view_all_departments,
        Capability::Denied
    );
    assert_eq!(
        effective_department(&ctx, Some(Department::Technical)).unwrap_err(),
        CoreError::Unauthorized {
            action: String::from("view schedules without a department"),
            role: String::from("staff"),
        }
    );
    assert!(effective_department(&ctx, None).is_err());
}

#[test]
fn test_role_parsing() {
    assert_eq!(AppRole::from_str(" Manager ").unwrap(), AppRole::Manager);
    assert_eq!(AppRole::from_str("admin").unwrap(), AppRole::Admin);
    assert_eq!(AppRole::Staff.to_string(), "staff");
    assert!(AppRole::from_str("guest").is_err());
}
