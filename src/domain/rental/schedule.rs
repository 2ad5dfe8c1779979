//! Booked-day schedule compaction
//!
//! Folds an item's rental periods into the minimal list of printable day
//! ranges shown in the booking calendar, e.g. `"12.08-15.08, 20.08"`.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::domain::period::DatePeriod;

/// One maximal run of consecutive booked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    Single(NaiveDate),
    Span(NaiveDate, NaiveDate),
}

impl DayRange {
    pub fn first_day(&self) -> NaiveDate {
        match self {
            Self::Single(d) => *d,
            Self::Span(start, _) => *start,
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        match self {
            Self::Single(d) => *d,
            Self::Span(_, end) => *end,
        }
    }
}

impl std::fmt::Display for DayRange {
    /// Renders as `DD.MM` or `DD.MM-DD.MM`. The year is omitted, which is
    /// ambiguous for schedules spanning a year boundary; acceptable for the
    /// short booking horizons this calendar is shown for.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(d) => write!(f, "{}", d.format("%d.%m")),
            Self::Span(start, end) => {
                write!(f, "{}-{}", start.format("%d.%m"), end.format("%d.%m"))
            }
        }
    }
}

/// Compact rental periods into maximal runs of consecutive booked days,
/// ascending by start day.
///
/// Days covered by more than one period (overlapping historical data)
/// collapse into one, and adjacent periods merge into a single range, so
/// the output is deterministic regardless of input order. Empty input
/// yields an empty list.
pub fn booked_day_ranges(periods: &[DatePeriod]) -> Vec<DayRange> {
    let days: BTreeSet<NaiveDate> = periods.iter().flat_map(|p| p.days()).collect();

    let mut ranges = Vec::new();
    let mut run: Option<(NaiveDate, NaiveDate)> = None;

    for day in days {
        run = match run {
            Some((start, prev)) if prev.checked_add_days(Days::new(1)) == Some(day) => {
                Some((start, day))
            }
            Some((start, prev)) => {
                ranges.push(close_run(start, prev));
                Some((day, day))
            }
            None => Some((day, day)),
        };
    }
    if let Some((start, prev)) = run {
        ranges.push(close_run(start, prev));
    }

    ranges
}

fn close_run(start: NaiveDate, end: NaiveDate) -> DayRange {
    if start == end {
        DayRange::Single(start)
    } else {
        DayRange::Span(start, end)
    }
}

// ── Tests ──────────────────────────────────────────────────────
