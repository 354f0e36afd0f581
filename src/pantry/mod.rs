//! Pantry domain model: items, expiry classification and view stats.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod images;
pub mod store;

/// Items with `today <= expiry <= today + window` count as expiring soon.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Safe,
}

/// Signed number of days until `expiry`, negative once it has passed.
#[must_use]
pub fn days_left(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

#[must_use]
pub fn classify(expiry: NaiveDate, today: NaiveDate, window_days: i64) -> ExpiryStatus {
    if expiry < today {
        return ExpiryStatus::Expired;
    }
    if days_left(expiry, today) <= window_days {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Safe
    }
}

/// Counters shown alongside the pantry view.
///
/// Expired items do not count toward `total`: they are purged before the
/// view is rendered and only leave a trace in `expired`.
#[derive(ToSchema, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: u64,
    pub expired: u64,
    pub expiring_soon: u64,
    pub safe: u64,
}

impl Stats {
    pub fn record(&mut self, status: ExpiryStatus) {
        match status {
            ExpiryStatus::Expired => {
                self.expired += 1;
                return;
            }
            ExpiryStatus::ExpiringSoon => self.expiring_soon += 1,
            ExpiryStatus::Safe => self.safe += 1,
        }
        self.total += 1;
    }
}

/// A pantry item as served by the API, with the derived `days_left`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct PantryItem {
    pub id: Uuid,
    pub name: String,
    pub expiry: NaiveDate,
    pub image: String,
    pub added_on: NaiveDate,
    pub days_left: i64,
}

impl PantryItem {
    #[must_use]
    pub fn from_stored(stored: store::StoredItem, today: NaiveDate) -> Self {
        let days_left = days_left(stored.expiry, today);
        Self {
            id: stored.id,
            name: stored.name,
            expiry: stored.expiry,
            image: stored.image,
            added_on: stored.added_on,
            days_left,
        }
    }
}
