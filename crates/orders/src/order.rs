use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use packhouse_core::{DomainError, DomainResult, Entity};

/// Order status lifecycle: new → confirmed → packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Confirmed,
    Packaged,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Packaged => "packaged",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderStatus::New),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "packaged" => Ok(OrderStatus::Packaged),
            other => Err(DomainError::validation(format!("invalid status: {other}"))),
        }
    }
}

/// Aggregate root: warehouse order.
///
/// # Invariants
/// - `items` is never empty.
/// - `id` is non-negative (assigned by the persistence collaborator).
/// - `processing_time`, when present, is finite and non-negative.
///
/// Lifecycle methods are deliberately permissive: `assign_to_staff`,
/// `confirm` and `mark_packaged` do not gate on the current status. Callers
/// enforce ordering explicitly via [`Order::validate_new`] /
/// [`Order::validate_status`] before a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: i64,
    items: Vec<Value>,
    status: OrderStatus,
    staff_id: Option<i64>,
    confirmed_at: Option<DateTime<Utc>>,
    processing_time: Option<f64>,
}

impl Order {
    /// Create a fresh order in `new` status.
    ///
    /// Prefer [`crate::OrderValidator::validate`] when the input is an
    /// untrusted map; this constructor is for callers that already hold
    /// typed fields.
    pub fn new(id: i64, items: Vec<Value>) -> DomainResult<Self> {
        check_id(id)?;
        check_items(&items)?;

        Ok(Self {
            id,
            items,
            status: OrderStatus::New,
            staff_id: None,
            confirmed_at: None,
            processing_time: None,
        })
    }

    /// Rebuild an order from stored fields, re-running every field invariant.
    ///
    /// This is the seam for the persistence collaborator: rows loaded from
    /// storage pass through the same checks as fresh input.
    pub fn hydrate(
        id: i64,
        items: Vec<Value>,
        status: OrderStatus,
        staff_id: Option<i64>,
        confirmed_at: Option<DateTime<Utc>>,
        processing_time: Option<f64>,
    ) -> DomainResult<Self> {
        check_id(id)?;
        check_items(&items)?;
        if let Some(staff_id) = staff_id {
            check_staff_id(staff_id)?;
        }
        if let Some(t) = processing_time {
            check_processing_time(t)?;
        }

        Ok(Self {
            id,
            items,
            status,
            staff_id,
            confirmed_at,
            processing_time,
        })
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn staff_id(&self) -> Option<i64> {
        self.staff_id
    }

    pub fn confirmed_at(&self) -> Option<DateTime<Utc>> {
        self.confirmed_at
    }

    pub fn processing_time(&self) -> Option<f64> {
        self.processing_time
    }

    /// Assign the order to a staff member.
    ///
    /// Does not check the current status; run [`Order::validate_new`] first
    /// when "assign only from new" is required.
    pub fn assign_to_staff(&mut self, staff_id: i64) -> DomainResult<()> {
        check_staff_id(staff_id)?;
        self.staff_id = Some(staff_id);
        Ok(())
    }

    /// Confirm the order at the given instant.
    ///
    /// Sets `status = confirmed` and records `confirmed_at`. Infallible: a
    /// malformed timestamp is unrepresentable against `DateTime<Utc>`.
    pub fn confirm(&mut self, at: DateTime<Utc>) {
        self.status = OrderStatus::Confirmed;
        self.confirmed_at = Some(at);
    }

    /// Mark the order as packaged. Unconditional and idempotent.
    pub fn mark_packaged(&mut self) {
        self.status = OrderStatus::Packaged;
    }

    /// Attach an externally computed handling duration, in seconds.
    pub fn set_processing_time(&mut self, seconds: f64) -> DomainResult<()> {
        check_processing_time(seconds)?;
        self.processing_time = Some(seconds);
        Ok(())
    }

    /// Precondition check: the order has not left `new` status.
    pub fn validate_new(&self) -> DomainResult<()> {
        self.validate_status(OrderStatus::New)
    }

    /// Precondition check usable before any transition.
    pub fn validate_status(&self, expected: OrderStatus) -> DomainResult<()> {
        if self.status != expected {
            return Err(DomainError::validation(format!(
                "expected status '{expected}', got '{}'",
                self.status
            )));
        }
        Ok(())
    }
}

impl Entity for Order {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn check_id(id: i64) -> DomainResult<()> {
    if id < 0 {
        return Err(DomainError::validation("id must be non-negative"));
    }
    Ok(())
}

fn check_items(items: &[Value]) -> DomainResult<()> {
    if items.is_empty() {
        return Err(DomainError::validation("items cannot be empty"));
    }
    Ok(())
}

fn check_staff_id(staff_id: i64) -> DomainResult<()> {
    if staff_id < 0 {
        return Err(DomainError::validation(
            "staff_id must be a non-negative integer",
        ));
    }
    Ok(())
}

fn check_processing_time(seconds: f64) -> DomainResult<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(DomainError::validation(
            "processing_time must be a non-negative number when provided",
        ));
    }
    Ok(())
}
