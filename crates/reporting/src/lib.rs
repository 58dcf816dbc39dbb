//! Derived KPIs over the order set.
//!
//! Pure aggregations: given a snapshot of orders, compute per-staff
//! throughput and average handling time, and assemble them into a validated
//! [`KpiReport`]. No IO, deterministic given input order.

pub mod avg_time;
pub mod metrics;
pub mod report;
pub mod throughput;

pub use avg_time::AvgProcessingTimeService;
pub use metrics::OrderMetrics;
pub use report::{compile_report, KpiReport};
pub use throughput::OrdersPerStaffService;
