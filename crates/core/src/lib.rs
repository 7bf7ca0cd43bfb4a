// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod board;
mod classifier;
mod command;
mod context;
mod error;
mod export;
mod grid;
mod reservation_index;
mod selection;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{DayShift, StoreOperation, TransitionResult, apply};
pub use board::{BoardSettings, ScheduleBoard};
pub use classifier::{SpanPosition, cell_key, classify_cell, is_weekend, span_tooltip};
pub use command::{Command, ShiftHours};
pub use context::{
    AppRole, Capability, CurrentUserContext, ScheduleCapabilities, compute_capabilities,
    effective_department, require,
};
pub use error::CoreError;
pub use export::{slice_columns, slice_week};
pub use grid::{CellData, Grid, GridRow};
pub use reservation_index::{CollisionPolicy, ReservationIndex, WorkDayIndex};
pub use selection::{RangeSelection, SelectedRange, SelectionState, clamp_end_column};
