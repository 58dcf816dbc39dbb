//! Read-only capability the aggregation services need from an order.

use packhouse_orders::Order;

/// Narrow view of an order for aggregation purposes.
///
/// The services accept anything exposing these two fields, not just the
/// strict [`Order`] entity - projection rows or precomputed records from the
/// persistence collaborator qualify by implementing this trait.
pub trait OrderMetrics {
    /// Staff member the order is attributed to, when assigned.
    fn staff_id(&self) -> Option<i64>;

    /// Externally attached handling duration in seconds, when known.
    fn processing_time(&self) -> Option<f64>;
}

impl OrderMetrics for Order {
    fn staff_id(&self) -> Option<i64> {
        Order::staff_id(self)
    }

    fn processing_time(&self) -> Option<f64> {
        Order::processing_time(self)
    }
}
