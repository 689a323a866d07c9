// SPDX-License-Identifier: MIT OR Apache-2.0

//! A span of time with whole-unit accessors.
//!
//! This module provides the [`Duration`] value type, constructed either from a
//! millisecond count or from a human-readable token such as `"90s"`, `"2 hours"`
//! or `"1.5d"`.

use crate::domain::errors::DurationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECOND: i64 = 1000;
const MINUTE: i64 = SECOND * 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;
// 365.25 days
const YEAR: i64 = DAY * 365 + DAY / 4;

static MAGNITUDE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:[0-9]+)?\.?[0-9]+$").expect("magnitude regex is valid"));

/// Looks up the millisecond factor for a unit suffix (already lowercased).
fn unit_factor(unit: &str) -> Option<i64> {
    let factor = match unit {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1,
        "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => YEAR,
        _ => return None,
    };
    Some(factor)
}

/// A span of time stored as a whole number of milliseconds.
///
/// A `Duration` is never zero: both constructors reject inputs that resolve to
/// zero milliseconds. Negative spans are allowed.
///
/// The unit accessors divide the millisecond count by the unit's factor and
/// round to the nearest whole number, ties away from zero. A year is 365.25 days.
///
/// # Examples
///
/// ```
/// use envschema::domain::Duration;
///
/// let d = Duration::from_milliseconds(172_800_000).unwrap();
/// assert_eq!(d.as_seconds(), 172_800);
/// assert_eq!(d.as_hours(), 48);
///
/// let d: Duration = "2y".parse().unwrap();
/// assert_eq!(d.as_days(), 731);
/// assert_eq!(d.as_years(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// Creates a duration from a millisecond count.
    ///
    /// Fails with [`DurationError::Zero`] when `millis` is zero.
    pub fn from_milliseconds(millis: i64) -> Result<Self, DurationError> {
        if millis == 0 {
            return Err(DurationError::Zero);
        }
        Ok(Self { millis })
    }

    /// Resolves a human-readable token like `"15m"`, `"2 days"` or `"0.5h"`.
    ///
    /// The token is a magnitude optionally followed by a unit, with optional
    /// whitespace in between. Without a unit the magnitude is in milliseconds.
    /// Compound expressions such as `"1h30m"` are not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::Duration;
    ///
    /// assert_eq!(Duration::from_string("1.5 s").unwrap().as_milliseconds(), 1500);
    /// assert!(Duration::from_string("1h30m").is_err());
    /// assert!(Duration::from_string("").is_err());
    /// ```
    pub fn from_string(input: &str) -> Result<Self, DurationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DurationError::Empty);
        }

        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (magnitude, unit) = trimmed.split_at(split);
        let magnitude = magnitude.trim_end();

        if !MAGNITUDE_REGEX.is_match(magnitude) {
            return Err(DurationError::InvalidMagnitude(input.to_string()));
        }
        let factor = unit_factor(&unit.to_ascii_lowercase())
            .ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
        let out_of_range = || DurationError::OutOfRange(input.to_string());

        let millis = if magnitude.contains('.') {
            let value: f64 = magnitude
                .parse()
                .map_err(|_| DurationError::InvalidMagnitude(input.to_string()))?;
            let millis = (value * factor as f64).round();
            if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
                return Err(out_of_range());
            }
            millis as i64
        } else {
            // Whole magnitudes stay exact across the full i64 range.
            magnitude
                .parse::<i64>()
                .ok()
                .and_then(|value| value.checked_mul(factor))
                .ok_or_else(out_of_range)?
        };
        Self::from_milliseconds(millis)
    }

    fn rounded(&self, factor: i64) -> i64 {
        (self.millis as f64 / factor as f64).round() as i64
    }

    /// Returns the stored millisecond count.
    pub fn as_milliseconds(&self) -> i64 {
        self.millis
    }

    /// Returns the span in whole seconds.
    pub fn as_seconds(&self) -> i64 {
        self.rounded(SECOND)
    }

    /// Returns the span in whole minutes.
    pub fn as_minutes(&self) -> i64 {
        self.rounded(MINUTE)
    }

    /// Returns the span in whole hours.
    pub fn as_hours(&self) -> i64 {
        self.rounded(HOUR)
    }

    /// Returns the span in whole days.
    pub fn as_days(&self) -> i64 {
        self.rounded(DAY)
    }

    /// Returns the span in whole years of 365.25 days.
    pub fn as_years(&self) -> i64 {
        self.rounded(YEAR)
    }

    /// Alias of [`Duration::as_milliseconds`].
    pub fn to_milliseconds(&self) -> i64 {
        self.as_milliseconds()
    }

    /// Alias of [`Duration::as_seconds`].
    pub fn to_seconds(&self) -> i64 {
        self.as_seconds()
    }

    /// Alias of [`Duration::as_minutes`].
    pub fn to_minutes(&self) -> i64 {
        self.as_minutes()
    }

    /// Alias of [`Duration::as_hours`].
    pub fn to_hours(&self) -> i64 {
        self.as_hours()
    }

    /// Alias of [`Duration::as_days`].
    pub fn to_days(&self) -> i64 {
        self.as_days()
    }

    /// Alias of [`Duration::as_years`].
    pub fn to_years(&self) -> i64 {
        self.as_years()
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<i64> for Duration {
    type Error = DurationError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_milliseconds(millis)
    }
}

impl From<Duration> for i64 {
    fn from(duration: Duration) -> Self {
        duration.millis
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        u64::try_from(duration.millis)
            .map(std::time::Duration::from_millis)
            .map_err(|_| DurationError::OutOfRange(duration.to_string()))
    }
}

impl fmt::Display for Duration {
    /// Formats with the largest unit that divides the span evenly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(i64, &str); 5] = [
            (YEAR, "y"),
            (DAY, "d"),
            (HOUR, "h"),
            (MINUTE, "m"),
            (SECOND, "s"),
        ];
        for (factor, suffix) in UNITS {
            if self.millis % factor == 0 {
                return write!(f, "{}{}", self.millis / factor, suffix);
            }
        }
        write!(f, "{}ms", self.millis)
    }
}
