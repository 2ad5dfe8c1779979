//! Booking business logic service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{
    booked_day_ranges, check_conflicts, DatePeriod, DayRange, DomainError, DomainResult, Rental,
    RepositoryProvider,
};

/// Orchestrates rental creation: normalize dates, check for conflicts,
/// persist.
///
/// The check-then-insert sequence is serialized per item with an async
/// mutex held across fetch + check + save, so two concurrent requests for
/// the same item cannot both pass the conflict check. Requests for
/// different items do not contend. Read paths take no lock.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    item_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            item_locks: DashMap::new(),
        }
    }

    /// Rent an item for every calendar day in `[start, end]`.
    ///
    /// Instants are truncated to calendar dates first; two requests that
    /// differ only in time-of-day ask for the same days. Fails with
    /// `InvalidPeriod` when start is after end, `NotFound` for an unknown
    /// item, `Conflict` when any requested day is already rented. Nothing
    /// is persisted on failure.
    pub async fn rent_item(
        &self,
        item_id: &str,
        renter_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Rental> {
        let period = DatePeriod::try_new(start.date_naive(), end.date_naive()).ok_or_else(|| {
            DomainError::InvalidPeriod(format!(
                "date_start {} is after date_end {}",
                start.date_naive(),
                end.date_naive()
            ))
        })?;

        if self.repos.items().find_by_id(item_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Item",
                field: "id",
                value: item_id.to_string(),
            });
        }

        let lock = Arc::clone(
            self.item_locks
                .entry(item_id.to_string())
                .or_default()
                .value(),
        );
        let _guard = lock.lock().await;

        let existing: Vec<DatePeriod> = self
            .repos
            .rentals()
            .find_by_item(item_id)
            .await?
            .into_iter()
            .map(|r| r.period)
            .collect();

        check_conflicts(&existing, &period)?;

        let rental = self
            .repos
            .rentals()
            .save(Rental::new(item_id, renter_id, period))
            .await?;

        info!(
            "Rental {} created: item={}, renter={}, period={}",
            rental.id, item_id, renter_id, period
        );

        Ok(rental)
    }

    /// All rentals for an item, newest start date first.
    pub async fn rentals_for_item(&self, item_id: &str) -> DomainResult<Vec<Rental>> {
        self.repos.rentals().find_by_item(item_id).await
    }

    /// The item's booked days compacted into printable ranges.
    pub async fn booked_days(&self, item_id: &str) -> DomainResult<Vec<DayRange>> {
        let periods: Vec<DatePeriod> = self
            .repos
            .rentals()
            .find_by_item(item_id)
            .await?
            .into_iter()
            .map(|r| r.period)
            .collect();
        Ok(booked_day_ranges(&periods))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStore;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            .and_utc()
    }

    fn service_with_item(item_id: &str) -> BookingService {
        let store = InMemoryStore::new();
        store.add_item(InMemoryStore::sample_item(item_id));
        BookingService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn rent_item_persists_and_returns_rental() {
        let svc = service_with_item("itm-1");
        let rental = svc
            .rent_item("itm-1", "usr-1", utc(2025, 8, 12, 10), utc(2025, 8, 15, 18))
            .await
            .unwrap();

        assert_eq!(rental.item_id, "itm-1");
        assert_eq!(rental.renter_id, "usr-1");
        assert_eq!(rental.period.num_days(), 4);

        let stored = svc.rentals_for_item("itm-1").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, rental.id);
    }

    #[tokio::test]
    async fn overlapping_request_is_rejected_without_persisting() {
        let svc = service_with_item("itm-1");
        svc.rent_item("itm-1", "usr-1", utc(2025, 8, 12, 0), utc(2025, 8, 15, 0))
            .await
            .unwrap();

        let err = svc
            .rent_item("itm-1", "usr-2", utc(2025, 8, 15, 0), utc(2025, 8, 18, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // The rejected attempt left nothing behind.
        assert_eq!(svc.rentals_for_item("itm-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn touching_periods_are_admitted() {
        let svc = service_with_item("itm-1");
        svc.rent_item("itm-1", "usr-1", utc(2025, 8, 12, 0), utc(2025, 8, 15, 0))
            .await
            .unwrap();
        svc.rent_item("itm-1", "usr-2", utc(2025, 8, 16, 0), utc(2025, 8, 18, 0))
            .await
            .unwrap();

        assert_eq!(svc.rentals_for_item("itm-1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn single_day_rental_blocks_that_day() {
        let svc = service_with_item("itm-1");
        svc.rent_item("itm-1", "usr-1", utc(2025, 8, 20, 0), utc(2025, 8, 20, 0))
            .await
            .unwrap();

        let err = svc
            .rent_item("itm-1", "usr-2", utc(2025, 8, 18, 0), utc(2025, 8, 22, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn time_of_day_is_ignored_for_overlap() {
        let svc = service_with_item("itm-1");
        svc.rent_item("itm-1", "usr-1", utc(2025, 8, 20, 23), utc(2025, 8, 20, 23))
            .await
            .unwrap();

        // Same calendar day, different hours: still taken.
        let err = svc
            .rent_item("itm-1", "usr-2", utc(2025, 8, 20, 1), utc(2025, 8, 20, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn reversed_period_is_invalid() {
        let svc = service_with_item("itm-1");
        let err = svc
            .rent_item("itm-1", "usr-1", utc(2025, 8, 15, 0), utc(2025, 8, 12, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidPeriod(_)));
        assert!(svc.rentals_for_item("itm-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_item_is_rejected() {
        let svc = BookingService::new(Arc::new(InMemoryStore::new()));
        let err = svc
            .rent_item("missing", "usr-1", utc(2025, 8, 12, 0), utc(2025, 8, 15, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn booked_days_compacts_adjacent_rentals() {
        let svc = service_with_item("itm-1");
        svc.rent_item("itm-1", "usr-1", utc(2025, 8, 10, 0), utc(2025, 8, 12, 0))
            .await
            .unwrap();
        svc.rent_item("itm-1", "usr-2", utc(2025, 8, 13, 0), utc(2025, 8, 13, 0))
            .await
            .unwrap();
        svc.rent_item("itm-1", "usr-3", utc(2025, 8, 20, 0), utc(2025, 8, 20, 0))
            .await
            .unwrap();

        let rendered: Vec<String> = svc
            .booked_days("itm-1")
            .await
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["10.08-13.08", "20.08"]);
    }

    #[tokio::test]
    async fn booked_days_is_empty_without_rentals() {
        let svc = service_with_item("itm-1");
        assert!(svc.booked_days("itm-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_overlapping_requests_admit_exactly_one() {
        let svc = Arc::new(service_with_item("itm-1"));

        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.rent_item(
                    "itm-1",
                    &format!("usr-{i}"),
                    utc(2025, 8, 12, 0),
                    utc(2025, 8, 15, 0),
                )
                .await
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(svc.rentals_for_item("itm-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn sequential_rentals_never_overlap() {
        let svc = service_with_item("itm-1");
        let attempts = [
            (utc(2025, 8, 1, 0), utc(2025, 8, 5, 0)),
            (utc(2025, 8, 4, 0), utc(2025, 8, 8, 0)),
            (utc(2025, 8, 6, 0), utc(2025, 8, 9, 0)),
            (utc(2025, 8, 9, 0), utc(2025, 8, 9, 0)),
            (utc(2025, 8, 10, 0), utc(2025, 8, 10, 0)),
        ];
        for (start, end) in attempts {
            let _ = svc.rent_item("itm-1", "usr-1", start, end).await;
        }

        let periods: Vec<DatePeriod> = svc
            .rentals_for_item("itm-1")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.period)
            .collect();
        for (i, a) in periods.iter().enumerate() {
            for b in periods.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }
}
