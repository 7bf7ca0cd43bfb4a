// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of command-line options into board settings.

use crate::error::CliError;
use clap::Args;
use roster::{
    AppRole, BoardSettings, CollisionPolicy, CurrentUserContext, effective_department,
};
use roster_domain::{
    DateCoercion, Department, EmployeeId, ScheduleWindow, Tz, parse_local_day, parse_timezone,
    today_in,
};
use std::str::FromStr;
use time::Date;
use tracing::debug;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// IANA timezone the schedule is kept in
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Season year to show. Defaults to the current local year
    #[arg(long)]
    pub season: Option<i32>,

    /// First day of the window, overriding the season start
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the window, overriding the season end
    #[arg(long)]
    pub to: Option<String>,

    /// Only show employees of this department
    #[arg(long)]
    pub department: Option<String>,

    /// How days claimed by two spans are handled (last-write-wins, reject)
    #[arg(long, default_value = "last-write-wins")]
    pub collision_policy: String,

    /// How malformed span dates are handled (strict, lenient)
    #[arg(long, default_value = "strict")]
    pub date_coercion: String,

    /// Identifier of the user running the command
    #[arg(long, default_value = "cli")]
    pub user: String,

    /// Application role of the user (admin, manager, staff)
    #[arg(long, default_value = "manager")]
    pub role: String,

    /// Department of the user's staff role
    #[arg(long)]
    pub user_department: Option<String>,
}

/// Fully resolved configuration of one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Timezone the schedule is kept in.
    pub tz: Tz,
    /// The current local day.
    pub today: Date,
    /// Policy for malformed span dates.
    pub coercion: DateCoercion,
    /// Settings handed to the board.
    pub board: BoardSettings,
    /// The user running the command.
    pub user: CurrentUserContext,
}

impl BoardArgs {
    /// Resolves the options against the current local day.
    ///
    /// # Errors
    ///
    /// Returns an error if an option value is invalid.
    pub fn resolve(&self) -> Result<Settings, CliError> {
        let tz: Tz = parse_timezone(&self.timezone)?;
        let today: Date = today_in(tz)?;
        self.resolve_at(tz, today)
    }

    /// Resolves the options with a fixed current day.
    ///
    /// # Errors
    ///
    /// Returns an error if an option value is invalid.
    pub fn resolve_at(&self, tz: Tz, today: Date) -> Result<Settings, CliError> {
        let season: ScheduleWindow = ScheduleWindow::season(self.season.unwrap_or(today.year()))?;
        let (season_start, season_end) = (season.start(), season.end());
        let start: Date = self
            .from
            .as_deref()
            .map(|raw| parse_local_day(raw, tz))
            .transpose()?
            .unwrap_or(season_start);
        let end: Date = self
            .to
            .as_deref()
            .map(|raw| parse_local_day(raw, tz))
            .transpose()?
            .unwrap_or(season_end);
        let window: ScheduleWindow = ScheduleWindow::new(start, end)?;

        let user = CurrentUserContext::new(
            EmployeeId::new(&self.user),
            AppRole::from_str(&self.role)?,
            parse_department(self.user_department.as_deref())?,
        );
        let requested: Option<Department> = parse_department(self.department.as_deref())?;

        let board = BoardSettings {
            window,
            department: effective_department(&user, requested)?,
            collision_policy: CollisionPolicy::from_str(&self.collision_policy)?,
        };

        debug!(
            %tz,
            %today,
            window_start = %window.start(),
            window_end = %window.end(),
            department = ?board.department,
            "Resolved settings"
        );

        Ok(Settings {
            tz,
            today,
            coercion: DateCoercion::from_str(&self.date_coercion)?,
            board,
            user,
        })
    }
}

fn parse_department(raw: Option<&str>) -> Result<Option<Department>, CliError> {
    Ok(raw.map(Department::from_str).transpose()?)
}
