use chrono::{DateTime, Utc};
use serde::Serialize;

use packhouse_core::{Clock, DomainError, DomainResult, ValueObject};

/// Immutable fact: an order was packaged at a point in time.
///
/// One logical instance per packaging event for a given order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackagingAudit {
    order_id: i64,
    timestamp: DateTime<Utc>,
}

impl PackagingAudit {
    pub fn new(order_id: i64, timestamp: DateTime<Utc>) -> DomainResult<Self> {
        if order_id < 1 {
            return Err(DomainError::validation("order_id must be positive"));
        }
        Ok(Self {
            order_id,
            timestamp,
        })
    }

    /// Canonical factory: stamps the record via the injected clock.
    ///
    /// Tests that need a reproducible instance pass a
    /// [`packhouse_core::FixedClock`].
    pub fn create(order_id: i64, clock: &impl Clock) -> DomainResult<Self> {
        Self::new(order_id, clock.now())
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl ValueObject for PackagingAudit {}

#[cfg(test)]
mod tests {
    use super::*;
    use packhouse_core::FixedClock;

    #[test]
    fn create_is_deterministic_under_a_fixed_clock() {
        let clock = FixedClock::epoch();
        let a = PackagingAudit::create(5, &clock).unwrap();
        let b = PackagingAudit::create(5, &clock).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.timestamp().timestamp(), 0);
    }

    #[test]
    fn non_positive_order_id_is_rejected() {
        let clock = FixedClock::epoch();
        for order_id in [0, -4] {
            let err = PackagingAudit::create(order_id, &clock).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }
}
