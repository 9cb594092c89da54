// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-scoped TTL cache.
//!
//! Used for the portal configuration, which is fetched once per portal
//! selection and held in memory for the session. Expiry is a pure predicate
//! over an injected "now" — the cache never reads a wall clock itself, which
//! keeps it deterministic under test.

use chrono::{DateTime, Duration, Utc};

/// A single cached value with its fetch time and time-to-live.
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    value: T,
    fetched_at: DateTime<Utc>,
    ttl: Duration,
}

impl<T> TtlCache<T> {
    pub fn new(value: T, fetched_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            fetched_at,
            ttl,
        }
    }

    /// True once `now` is at or past `fetched_at + ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at >= self.ttl
    }

    /// The cached value if still fresh at `now`, else `None`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&T> {
        if self.is_expired(now) { None } else { Some(&self.value) }
    }

    /// The cached value regardless of freshness.
    pub fn value(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_900_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn fresh_value_is_returned_until_ttl_elapses() {
        let cache = TtlCache::new("config", at(0), Duration::seconds(900));
        assert_eq!(cache.get(at(0)), Some(&"config"));
        assert_eq!(cache.get(at(899)), Some(&"config"));
    }

    #[test]
    fn value_expires_exactly_at_ttl_boundary() {
        let cache = TtlCache::new("config", at(0), Duration::seconds(900));
        assert!(!cache.is_expired(at(899)));
        assert!(cache.is_expired(at(900)));
        assert_eq!(cache.get(at(900)), None);
    }

    #[test]
    fn clock_injection_means_no_wall_clock_dependence() {
        // A cache "fetched in the future" is simply fresh relative to any
        // earlier now; nothing here consults the real clock.
        let cache = TtlCache::new(42u32, at(1000), Duration::seconds(60));
        assert!(!cache.is_expired(at(500)));
    }
}
