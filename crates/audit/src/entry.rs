use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use packhouse_core::{Clock, DomainError, DomainResult, ValueObject};

/// Immutable fact: an action ("assigned", "confirmed", "packaged", ...) was
/// taken on an order at a point in time.
///
/// `user_id` and `staff_id` are contextual - either, both or neither may be
/// present depending on the call site that recorded the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLogEntry {
    id: String,
    order_id: i64,
    action: String,
    user_id: Option<String>,
    staff_id: Option<i64>,
    timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Build an entry from explicit fields, validating each one.
    pub fn new(
        id: impl Into<String>,
        order_id: i64,
        action: impl Into<String>,
        user_id: Option<String>,
        staff_id: Option<i64>,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("id must be a non-empty string"));
        }
        if order_id < 1 {
            return Err(DomainError::validation("order_id must be positive"));
        }
        let action = action.into();
        if action.trim().is_empty() {
            return Err(DomainError::validation("action must be a non-empty string"));
        }

        Ok(Self {
            id,
            order_id,
            action,
            user_id,
            staff_id,
            timestamp,
        })
    }

    /// Record a fact now: generates a UUIDv7 entry id and stamps the entry
    /// via the injected clock.
    pub fn record(
        order_id: i64,
        action: impl Into<String>,
        clock: &impl Clock,
    ) -> DomainResult<Self> {
        Self::new(
            Uuid::now_v7().to_string(),
            order_id,
            action,
            None,
            None,
            clock.now(),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn staff_id(&self) -> Option<i64> {
        self.staff_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl ValueObject for AuditLogEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use packhouse_core::FixedClock;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn valid_entry_is_constructed() {
        let entry = AuditLogEntry::new(
            "log-1",
            42,
            "confirmed",
            Some("mgr_7".to_string()),
            Some(3),
            test_time(),
        )
        .unwrap();

        assert_eq!(entry.id(), "log-1");
        assert_eq!(entry.order_id(), 42);
        assert_eq!(entry.action(), "confirmed");
        assert_eq!(entry.user_id(), Some("mgr_7"));
        assert_eq!(entry.staff_id(), Some(3));
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = AuditLogEntry::new("  ", 1, "assigned", None, None, test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn non_positive_order_id_is_rejected() {
        for order_id in [0, -1] {
            let err =
                AuditLogEntry::new("log-1", order_id, "assigned", None, None, test_time())
                    .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn blank_action_is_rejected() {
        let err = AuditLogEntry::new("log-1", 1, "", None, None, test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn record_stamps_via_injected_clock() {
        let clock = FixedClock::epoch();
        let entry = AuditLogEntry::record(9, "packaged", &clock).unwrap();
        assert_eq!(entry.timestamp(), clock.now());
        assert!(!entry.id().is_empty());
        assert!(entry.user_id().is_none());
    }

    #[test]
    fn entries_are_compared_by_value() {
        let at = test_time();
        let a = AuditLogEntry::new("log-1", 1, "assigned", None, None, at).unwrap();
        let b = AuditLogEntry::new("log-1", 1, "assigned", None, None, at).unwrap();
        assert_eq!(a, b);
    }
}
