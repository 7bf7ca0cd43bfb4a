// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The current user and what they may do on the schedule.
//!
//! The caller supplies the context explicitly. Capabilities are advisory
//! for the UI; [`crate::apply`] enforces them again.

use crate::error::CoreError;
use roster_domain::{Department, DomainError, EmployeeId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Application role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppRole {
    /// Full access.
    Admin,
    /// Plans schedules.
    Manager,
    /// Views schedules.
    Staff,
}

impl AppRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }
}

impl FromStr for AppRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "staff" => Ok(Self::Staff),
            _ => Err(DomainError::InvalidSetting {
                setting: String::from("role"),
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AppRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserContext {
    /// The user's profile identifier.
    pub user_id: EmployeeId,
    /// The user's application role.
    pub role: AppRole,
    /// The department of the user's staff role, if any.
    pub department: Option<Department>,
}

impl CurrentUserContext {
    /// Creates a new context.
    #[must_use]
    pub const fn new(user_id: EmployeeId, role: AppRole, department: Option<Department>) -> Self {
        Self {
            user_id,
            role,
            department,
        }
    }
}

/// Whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    /// Returns whether the action is permitted.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Schedule actions available to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCapabilities {
    /// May switch the department filter off.
    pub can_view_all_departments: Capability,
    /// May create, move and delete spans.
    pub can_edit_spans: Capability,
    /// May change the hours of individual work days.
    pub can_edit_hours: Capability,
}

/// Computes the schedule capabilities of the current user.
#[must_use]
pub const fn compute_capabilities(ctx: &CurrentUserContext) -> ScheduleCapabilities {
    let planner: bool = matches!(ctx.role, AppRole::Admin | AppRole::Manager);
    ScheduleCapabilities {
        can_view_all_departments: Capability::from_bool(planner),
        can_edit_spans: Capability::from_bool(planner),
        can_edit_hours: Capability::from_bool(planner),
    }
}

/// Resolves the department filter the grid should use.
///
/// Planners get what they asked for. Staff are always limited to their own
/// department.
///
/// # Errors
///
/// Returns [`CoreError::Unauthorized`] for a user who may not see all
/// departments but has no department of their own.
pub fn effective_department(
    ctx: &CurrentUserContext,
    requested: Option<Department>,
) -> Result<Option<Department>, CoreError> {
    if compute_capabilities(ctx).can_view_all_departments.is_allowed() {
        return Ok(requested);
    }
    match ctx.department {
        Some(department) => Ok(Some(department)),
        None => Err(CoreError::Unauthorized {
            action: String::from("view schedules without a department"),
            role: ctx.role.to_string(),
        }),
    }
}

/// Fails unless `capability` is allowed.
///
/// # Errors
///
/// Returns [`CoreError::Unauthorized`] naming the action and role.
pub fn require(
    ctx: &CurrentUserContext,
    capability: Capability,
    action: &str,
) -> Result<(), CoreError> {
    if capability.is_allowed() {
        Ok(())
    } else {
        Err(CoreError::Unauthorized {
            action: action.to_string(),
            role: ctx.role.to_string(),
        })
    }
}
