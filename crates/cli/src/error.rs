// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster::CoreError;
use roster_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The snapshot file could not be read or written.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON of the expected shape.
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV export could not be written.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A record or argument broke a domain rule.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Planning or grid derivation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A planned write names a span the snapshot does not hold.
    #[error("Span {0} is not in the snapshot")]
    UnknownSpan(i64),

    /// A span update carries no store identifier.
    #[error("Span update carries no span id")]
    MissingSpanId,

    /// A planned write names a work day the snapshot does not hold.
    #[error("Work day {0} is not in the snapshot")]
    UnknownWorkDay(i64),
}
