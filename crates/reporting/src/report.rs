use std::collections::BTreeMap;

use serde::Serialize;

use packhouse_core::{DomainError, DomainResult, ValueObject};

use crate::avg_time::AvgProcessingTimeService;
use crate::metrics::OrderMetrics;
use crate::throughput::OrdersPerStaffService;

/// Validated KPI output: per-staff throughput plus average handling time.
///
/// Constructed fresh per report request; owns copies of the aggregation
/// outputs and never mutates after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiReport {
    throughput_per_staff: BTreeMap<i64, i64>,
    avg_handling_time: f64,
}

impl KpiReport {
    pub fn new(
        throughput_per_staff: BTreeMap<i64, i64>,
        avg_handling_time: f64,
    ) -> DomainResult<Self> {
        for (staff_id, count) in &throughput_per_staff {
            if *count < 0 {
                return Err(DomainError::validation(format!(
                    "throughput for staff {staff_id} must be a non-negative count"
                )));
            }
        }
        if !avg_handling_time.is_finite() || avg_handling_time < 0.0 {
            return Err(DomainError::validation(
                "avg_handling_time must be a non-negative number",
            ));
        }

        Ok(Self {
            throughput_per_staff,
            avg_handling_time,
        })
    }

    pub fn throughput_per_staff(&self) -> &BTreeMap<i64, i64> {
        &self.throughput_per_staff
    }

    pub fn avg_handling_time(&self) -> f64 {
        self.avg_handling_time
    }
}

impl ValueObject for KpiReport {}

/// Batch the current order set through both aggregation services and build
/// the report.
pub fn compile_report<O: OrderMetrics>(orders: &[O]) -> DomainResult<KpiReport> {
    let throughput = OrdersPerStaffService::compute_throughput(orders)?;
    let avg_handling_time = AvgProcessingTimeService::compute_avg_time(orders)?;

    tracing::debug!(
        orders = orders.len(),
        staff = throughput.len(),
        avg_handling_time,
        "compiled kpi report"
    );

    KpiReport::new(throughput, avg_handling_time)
}
