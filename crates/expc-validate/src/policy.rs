//! Expiry policy: the blackout window and the advisory horizon.

use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Expiry dates are written in this form.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Expiries further out than this many days draw a warning.
pub const MAX_EXPIRY_HORIZON_DAYS: i64 = 180;

/// Clock and horizon used by the query-time expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    pub today: NaiveDate,
    pub horizon_days: i64,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl ExpiryPolicy {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            horizon_days: MAX_EXPIRY_HORIZON_DAYS,
        }
    }

    pub fn latest_allowed(&self) -> NaiveDate {
        self.today + Duration::days(self.horizon_days)
    }

    pub fn is_expired(&self, expiry: NaiveDate) -> bool {
        expiry < self.today
    }

    pub fn is_too_far(&self, expiry: NaiveDate) -> bool {
        expiry > self.latest_allowed()
    }
}

/// Parse an expiry in `YYYY-MM-DD` form.
pub fn parse_expiry(expiry: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(expiry, EXPIRY_FORMAT).ok()
}

/// November 1 through January 15, both ends included.
pub fn in_blackout_window(date: NaiveDate) -> bool {
    match date.month() {
        11 | 12 => true,
        1 => date.day() <= 15,
        _ => false,
    }
}
