//! Booking conflict detection
//!
//! Decides whether a candidate rental period may be admitted given the
//! item's existing rentals. Pure functions over `DatePeriod`; callers are
//! responsible for fetching the existing periods and for holding whatever
//! lock makes the surrounding check-then-insert sequence atomic.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::period::DatePeriod;

/// Return the first existing period that shares a calendar day with the
/// candidate, if any. The input does not need to be sorted.
pub fn find_conflict(existing: &[DatePeriod], candidate: &DatePeriod) -> Option<DatePeriod> {
    existing.iter().find(|p| p.overlaps(candidate)).copied()
}

/// Admit the candidate period or reject it with `DomainError::Conflict`
/// naming the occupied span.
pub fn check_conflicts(existing: &[DatePeriod], candidate: &DatePeriod) -> DomainResult<()> {
    match find_conflict(existing, candidate) {
        None => Ok(()),
        Some(taken) => Err(DomainError::Conflict(format!(
            "item is already rented for {} within the requested period {}",
            taken, candidate
        ))),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn p(start: (i32, u32, u32), end: (i32, u32, u32)) -> DatePeriod {
        DatePeriod::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn empty_existing_admits_anything() {
        let candidate = p((2025, 8, 12), (2025, 8, 15));
        assert!(check_conflicts(&[], &candidate).is_ok());
    }

    #[test]
    fn shared_end_day_is_rejected() {
        let existing = [p((2025, 8, 12), (2025, 8, 15))];
        // Both want August 15.
        let candidate = p((2025, 8, 15), (2025, 8, 18));
        let err = check_conflicts(&existing, &candidate).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn next_day_start_is_admitted() {
        let existing = [p((2025, 8, 12), (2025, 8, 15))];
        let candidate = p((2025, 8, 16), (2025, 8, 18));
        assert!(check_conflicts(&existing, &candidate).is_ok());
    }

    #[test]
    fn single_day_candidate_conflicts_on_that_day_only() {
        let existing = [p((2025, 8, 20), (2025, 8, 20))];
        assert!(check_conflicts(&existing, &p((2025, 8, 20), (2025, 8, 20))).is_err());
        assert!(check_conflicts(&existing, &p((2025, 8, 19), (2025, 8, 19))).is_ok());
        assert!(check_conflicts(&existing, &p((2025, 8, 21), (2025, 8, 21))).is_ok());
        assert!(check_conflicts(&existing, &p((2025, 8, 18), (2025, 8, 22))).is_err());
    }

    #[test]
    fn scan_does_not_require_sorted_input() {
        let existing = [
            p((2025, 9, 1), (2025, 9, 3)),
            p((2025, 8, 1), (2025, 8, 5)),
            p((2025, 8, 20), (2025, 8, 25)),
        ];
        assert!(check_conflicts(&existing, &p((2025, 8, 6), (2025, 8, 19))).is_ok());
        assert!(check_conflicts(&existing, &p((2025, 8, 4), (2025, 8, 6))).is_err());
    }

    #[test]
    fn find_conflict_names_the_occupied_period() {
        let taken = p((2025, 8, 1), (2025, 8, 5));
        let existing = [p((2025, 9, 1), (2025, 9, 3)), taken];
        assert_eq!(
            find_conflict(&existing, &p((2025, 8, 5), (2025, 8, 10))),
            Some(taken)
        );
        assert_eq!(find_conflict(&existing, &p((2025, 8, 6), (2025, 8, 10))), None);
    }
}
