// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::Settings;
use crate::error::CliError;
use crate::render::{render_table, write_csv};
use crate::snapshot::{Records, Snapshot};
use clap::Subcommand;
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use roster::{Command, Grid, ScheduleBoard, ShiftHours, TransitionResult, apply, slice_columns};
use roster_domain::{
    EmployeeId, ScheduleSpan, ShiftTag, parse_local_day, parse_time_of_day,
    validate_employee_exists,
};
use std::path::{Path, PathBuf};
use time::Date;
use tracing::info;

#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Print the schedule grid
    Grid {
        /// First day to print, defaults to the window start
        #[arg(long)]
        start: Option<String>,
        /// Last day to print, defaults to the window end
        #[arg(long)]
        end: Option<String>,
    },

    /// Check whether a span would collide with a booked one
    Check {
        /// Employee to check
        employee: String,
        /// First day
        start: String,
        /// Last day
        end: String,
        /// Span being edited, excluded from the check
        #[arg(long)]
        exclude: Option<i64>,
    },

    /// Book a new span
    Book {
        /// Employee to book
        employee: String,
        /// First day
        start: String,
        /// Last day
        end: String,
        /// Shift name or `#RRGGBB` color
        #[arg(long, default_value = "morning")]
        shift: String,
        /// Daily start time
        #[arg(long, default_value = "08:00")]
        from_time: String,
        /// Daily end time
        #[arg(long, default_value = "16:00")]
        to_time: String,
    },

    /// Move, resize or retag a span
    Update {
        /// Span to change
        span_id: i64,
        /// New first day
        start: String,
        /// New last day
        end: String,
        /// New shift, defaults to the current one
        #[arg(long)]
        shift: Option<String>,
        /// Daily start time for newly covered days
        #[arg(long, default_value = "08:00")]
        from_time: String,
        /// Daily end time for newly covered days
        #[arg(long, default_value = "16:00")]
        to_time: String,
    },

    /// Delete a span and its work days
    Delete {
        /// Span to delete
        span_id: i64,
    },

    /// Change the hours of one day of a span
    Hours {
        /// Owning span
        span_id: i64,
        /// Day to change
        day: String,
        /// Start time
        from_time: String,
        /// End time
        to_time: String,
    },

    /// Write the Monday to Sunday week containing a day as CSV
    ExportWeek {
        /// Any day of the week
        day: String,
        /// Output file, defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Loads the board from the snapshot and runs the action.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the action is
/// rejected, or its result cannot be written.
pub fn run(action: Action, snapshot_path: &Path, settings: &Settings) -> Result<()> {
    let mut snapshot: Snapshot = Snapshot::load(snapshot_path)
        .wrap_err_with(|| format!("loading {}", snapshot_path.display()))?;
    let board: ScheduleBoard = load_board(&snapshot, settings)?;
    let day = |raw: &str| parse_local_day(raw, settings.tz);

    let command: Command = match action {
        Action::Grid { start, end } => {
            let (window_start, window_end) = (board.window().start(), board.window().end());
            let grid: Grid = match (start, end) {
                (None, None) => board.grid().clone(),
                (start, end) => slice_columns(
                    board.grid(),
                    start.as_deref().map(day).transpose()?.unwrap_or(window_start),
                    end.as_deref().map(day).transpose()?.unwrap_or(window_end),
                )?,
            };
            print!("{}", render_table(&grid));
            return Ok(());
        }
        Action::Check {
            employee,
            start,
            end,
            exclude,
        } => {
            let candidate: ScheduleSpan = check_span(
                &board,
                EmployeeId::new(&employee),
                day(&start)?,
                day(&end)?,
                exclude,
            )
            .wrap_err("Span cannot be booked")?;
            println!(
                "No conflict for '{employee}' from {} to {}",
                candidate.start_date(),
                candidate.end_date()
            );
            return Ok(());
        }
        Action::ExportWeek { day: raw, output } => {
            let week: Grid = board.export_week(day(&raw)?)?;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path).map_err(|source| CliError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    write_csv(&week, file)?;
                    info!(path = %path.display(), "Exported week");
                }
                None => write_csv(&week, std::io::stdout().lock())?,
            }
            return Ok(());
        }
        Action::Book {
            employee,
            start,
            end,
            shift,
            from_time,
            to_time,
        } => Command::CreateSpan {
            employee_id: EmployeeId::new(&employee),
            start_date: day(&start)?,
            end_date: day(&end)?,
            shift: ShiftTag::new(&shift)?,
            hours: parse_hours(&from_time, &to_time)?,
        },
        Action::Update {
            span_id,
            start,
            end,
            shift,
            from_time,
            to_time,
        } => {
            let shift: ShiftTag = match shift {
                Some(label) => ShiftTag::new(&label)?,
                None => board
                    .span(span_id)
                    .map(|span| span.shift().clone())
                    .ok_or_else(|| eyre!("Span {span_id} not found"))?,
            };
            Command::UpdateSpan {
                span_id,
                start_date: day(&start)?,
                end_date: day(&end)?,
                shift,
                hours: parse_hours(&from_time, &to_time)?,
            }
        }
        Action::Delete { span_id } => Command::DeleteSpan { span_id },
        Action::Hours {
            span_id,
            day: raw,
            from_time,
            to_time,
        } => Command::SetWorkDayHours {
            span_id,
            day: day(&raw)?,
            hours: parse_hours(&from_time, &to_time)?,
        },
    };

    let result: TransitionResult = apply(&board, &settings.user, command)?;
    snapshot.execute(&result.operations, settings.tz)?;
    snapshot
        .save(snapshot_path)
        .wrap_err_with(|| format!("saving {}", snapshot_path.display()))?;

    println!("{}", result.summary);
    Ok(())
}

/// Normalizes the snapshot and loads it into a board.
///
/// # Errors
///
/// Returns an error if a record cannot be normalized or the reservation
/// index rejects the spans.
pub fn load_board(snapshot: &Snapshot, settings: &Settings) -> Result<ScheduleBoard, CliError> {
    let records: Records = snapshot.records(settings.tz, settings.today, settings.coercion)?;
    let mut board: ScheduleBoard = ScheduleBoard::new(settings.board, settings.today);
    board.load(records.employees, records.spans, records.work_days)?;
    Ok(board)
}

/// Builds the span `employee_id` would get and checks it against the board.
///
/// # Errors
///
/// Returns an error if the employee is unknown, the range is inverted, or
/// the span collides with another span of the employee.
pub fn check_span(
    board: &ScheduleBoard,
    employee_id: EmployeeId,
    start_date: Date,
    end_date: Date,
    exclude: Option<i64>,
) -> Result<ScheduleSpan, CliError> {
    validate_employee_exists(board.employees(), &employee_id)?;
    let candidate: ScheduleSpan = ScheduleSpan::new(
        None,
        employee_id,
        start_date,
        end_date,
        ShiftTag::new("check")?,
    )?;
    board.check_conflict(&candidate, exclude)?;
    Ok(candidate)
}

fn parse_hours(from: &str, to: &str) -> Result<ShiftHours, CliError> {
    Ok(ShiftHours::new(
        parse_time_of_day(from)?,
        parse_time_of_day(to)?,
    )?)
}
