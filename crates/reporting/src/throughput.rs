use std::collections::BTreeMap;

use packhouse_core::{DomainError, DomainResult};

use crate::metrics::OrderMetrics;

/// Calculates number of orders processed per staff member.
///
/// Counts orders where a staff id is set, grouping by staff id. Orders
/// without one are skipped, not counted as zero.
pub struct OrdersPerStaffService;

impl OrdersPerStaffService {
    /// Map from staff id to count of orders referencing it, accumulated in
    /// input order.
    pub fn compute_throughput<O: OrderMetrics>(
        orders: &[O],
    ) -> DomainResult<BTreeMap<i64, i64>> {
        let mut result: BTreeMap<i64, i64> = BTreeMap::new();

        for order in orders {
            let Some(staff_id) = order.staff_id() else {
                continue;
            };
            if staff_id < 0 {
                return Err(DomainError::validation(
                    "staff_id must be a non-negative integer when provided",
                ));
            }
            *result.entry(staff_id).or_insert(0) += 1;
        }

        Ok(result)
    }
}
