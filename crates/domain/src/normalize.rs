// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalization of raw store dates to local calendar days.
//!
//! The store delivers span bounds as strings: plain `YYYY-MM-DD` days,
//! RFC 3339 timestamps or Postgres-style `YYYY-MM-DD HH:MM:SS+00`
//! timestamps. Timestamps are converted into the configured timezone and
//! reduced to the local calendar day, so every comparison downstream works
//! at local-midnight granularity.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Time};
use tracing::warn;

/// What to do with a missing or malformed span date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateCoercion {
    /// Reject the record.
    #[default]
    Strict,
    /// Substitute today for the start and the start for the end.
    Lenient,
}

impl FromStr for DateCoercion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(DomainError::InvalidSetting {
                setting: String::from("date coercion"),
                value: s.to_string(),
            }),
        }
    }
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns an error if the name is not a known zone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns the current calendar day in `tz`.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented.
pub fn today_in(tz: Tz) -> Result<Date, DomainError> {
    from_naive(Utc::now().with_timezone(&tz).date_naive())
}

/// Parses a store date or timestamp into a local calendar day.
///
/// # Errors
///
/// Returns an error if the input matches none of the accepted formats.
pub fn parse_local_day(input: &str, tz: Tz) -> Result<Date, DomainError> {
    let input: &str = input.trim();

    if let Ok(day) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Ok(day);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f%#z"))
    {
        return from_naive(stamp.with_timezone(&tz).date_naive());
    }

    // Timestamps without an offset are already local
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|e| DomainError::DateParseError {
            date_string: input.to_string(),
            error: e.to_string(),
        })
        .and_then(|stamp| from_naive(stamp.date()))
}

/// Parses an `HH:MM` or `HH:MM:SS` time of day.
///
/// # Errors
///
/// Returns an error if the input is not a valid time of day.
pub fn parse_time_of_day(input: &str) -> Result<Time, DomainError> {
    let input: &str = input.trim();
    Time::parse(input, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(input, format_description!("[hour]:[minute]")))
        .map_err(|e| DomainError::DateParseError {
            date_string: input.to_string(),
            error: e.to_string(),
        })
}

/// Normalizes the raw bounds of a span to an ordered pair of local days.
///
/// # Arguments
///
/// * `raw_start` - Start as delivered by the store, if any
/// * `raw_end` - End as delivered by the store, if any
/// * `tz` - Timezone the schedule is kept in
/// * `today` - The current local day, substituted under [`DateCoercion::Lenient`]
/// * `coercion` - Policy for missing or malformed values
///
/// # Errors
///
/// Returns an error if a bound is missing or malformed under
/// [`DateCoercion::Strict`], or if the normalized end precedes the start.
pub fn normalize_span_dates(
    raw_start: Option<&str>,
    raw_end: Option<&str>,
    tz: Tz,
    today: Date,
    coercion: DateCoercion,
) -> Result<(Date, Date), DomainError> {
    let start: Date = match (parse_optional(raw_start, tz), coercion) {
        (Ok(day), _) => day,
        (Err(e), DateCoercion::Strict) => return Err(e),
        (Err(e), DateCoercion::Lenient) => {
            warn!(error = %e, substitute = %today, "Coercing malformed span start to today");
            today
        }
    };

    let end: Date = match (parse_optional(raw_end, tz), coercion) {
        (Ok(day), _) => day,
        (Err(e), DateCoercion::Strict) => return Err(e),
        (Err(e), DateCoercion::Lenient) => {
            warn!(error = %e, substitute = %start, "Coercing malformed span end to its start");
            start
        }
    };

    if end < start {
        return Err(DomainError::InvalidSpanRange { start, end });
    }

    Ok((start, end))
}

fn parse_optional(raw: Option<&str>, tz: Tz) -> Result<Date, DomainError> {
    match raw {
        Some(value) if !value.trim().is_empty() => parse_local_day(value, tz),
        _ => Err(DomainError::DateParseError {
            date_string: String::new(),
            error: String::from("date is missing"),
        }),
    }
}

fn from_naive(date: NaiveDate) -> Result<Date, DomainError> {
    let ordinal: u16 =
        u16::try_from(date.ordinal()).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("converting {date} to a calendar day"),
        })?;
    Date::from_ordinal_date(date.year(), ordinal).map_err(|e| DomainError::DateParseError {
        date_string: date.to_string(),
        error: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    const ZAGREB: Tz = chrono_tz::Europe::Zagreb;

    #[test]
    fn test_plain_day_is_taken_as_is() {
        assert_eq!(
            parse_local_day("2024-06-10", ZAGREB).unwrap(),
            date!(2024 - 06 - 10)
        );
    }

    #[test]
    fn test_utc_timestamp_lands_on_local_day() {
        // 22:30 UTC is 00:30 the next day in Zagreb during summer time
        assert_eq!(
            parse_local_day("2024-06-09T22:30:00Z", ZAGREB).unwrap(),
            date!(2024 - 06 - 10)
        );
        assert_eq!(
            parse_local_day("2024-06-09T22:30:00Z", Tz::UTC).unwrap(),
            date!(2024 - 06 - 09)
        );
    }

    #[test]
    fn test_postgres_timestamp_with_short_offset() {
        assert_eq!(
            parse_local_day("2024-06-10 08:15:00+00", Tz::UTC).unwrap(),
            date!(2024 - 06 - 10)
        );
    }

    #[test]
    fn test_naive_timestamp_keeps_its_day() {
        assert_eq!(
            parse_local_day("2024-06-10T23:59:59", ZAGREB).unwrap(),
            date!(2024 - 06 - 10)
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            parse_local_day("not a date", ZAGREB),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_time_of_day_formats() {
        assert_eq!(parse_time_of_day("08:30").unwrap(), time!(08:30));
        assert_eq!(parse_time_of_day("16:00:00").unwrap(), time!(16:00));
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn test_strict_rejects_missing_end() {
        let result =
            normalize_span_dates(Some("2024-06-10"), None, ZAGREB, date!(2024 - 01 - 01), DateCoercion::Strict);
        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }

    #[test]
    fn test_lenient_substitutes_start_for_end() {
        let result = normalize_span_dates(
            Some("2024-06-10"),
            Some("garbage"),
            ZAGREB,
            date!(2024 - 01 - 01),
            DateCoercion::Lenient,
        )
        .unwrap();
        assert_eq!(result, (date!(2024 - 06 - 10), date!(2024 - 06 - 10)));
    }

    #[test]
    fn test_lenient_substitutes_today_for_start() {
        let result = normalize_span_dates(
            None,
            Some("2024-06-12"),
            ZAGREB,
            date!(2024 - 06 - 11),
            DateCoercion::Lenient,
        )
        .unwrap();
        assert_eq!(result, (date!(2024 - 06 - 11), date!(2024 - 06 - 12)));
    }

    #[test]
    fn test_inverted_range_rejected_under_both_policies() {
        for coercion in [DateCoercion::Strict, DateCoercion::Lenient] {
            let result = normalize_span_dates(
                Some("2024-06-12"),
                Some("2024-06-10"),
                ZAGREB,
                date!(2024 - 06 - 11),
                coercion,
            );
            assert!(matches!(result, Err(DomainError::InvalidSpanRange { .. })));
        }
    }

    #[test]
    fn test_coercion_from_str() {
        assert_eq!("Lenient".parse::<DateCoercion>().unwrap(), DateCoercion::Lenient);
        assert!("loose".parse::<DateCoercion>().is_err());
    }
}
