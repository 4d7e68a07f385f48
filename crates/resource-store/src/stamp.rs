//! # Record Timestamps
//!
//! Creation and last-update stamps written by the store, never by callers.
//! Serialized through chrono's serde support as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-managed creation and update stamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Stamps for a record created at `now`.
    pub fn created(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves `updated_at` forward. `created_at` is left alone.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_touch_keeps_creation_time() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap();

        let mut stamps = Timestamps::created(created);
        assert_eq!(stamps.created_at, stamps.updated_at);

        stamps.touch(later);
        assert_eq!(stamps.created_at, created);
        assert_eq!(stamps.updated_at, later);
    }

    #[test]
    fn test_serializes_as_iso_8601() {
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 9, 15, 0).unwrap();
        let json = serde_json::to_value(Timestamps::created(created)).unwrap();
        assert_eq!(json["created_at"], "2024-03-05T09:15:00Z");
        assert_eq!(json["updated_at"], "2024-03-05T09:15:00Z");
    }
}
