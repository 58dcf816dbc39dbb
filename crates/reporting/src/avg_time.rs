use packhouse_core::{DomainError, DomainResult};

use crate::metrics::OrderMetrics;

/// Calculates average processing time from a collection of orders.
///
/// Handling times are attached to orders by an upstream consumer; this
/// service only averages over orders that carry one. Absent values are
/// skipped, not treated as zero.
pub struct AvgProcessingTimeService;

impl AvgProcessingTimeService {
    /// Arithmetic mean of the present processing times, or exactly `0.0`
    /// when no order carries one. The zero-on-empty result is deliberate,
    /// not an error.
    pub fn compute_avg_time<O: OrderMetrics>(orders: &[O]) -> DomainResult<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;

        for order in orders {
            let Some(seconds) = order.processing_time() else {
                continue;
            };
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(DomainError::validation(
                    "processing_time must be a non-negative number when provided",
                ));
            }
            sum += seconds;
            count += 1;
        }

        if count == 0 {
            return Ok(0.0);
        }
        Ok(sum / f64::from(count))
    }
}
