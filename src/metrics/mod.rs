//! Run-wide request metrics: the error-rate accumulator, per-endpoint
//! statistics, and the end-of-run report.
mod accumulator;
mod collector;
mod endpoints;
mod histogram;
mod summary;


pub use accumulator::MetricsAccumulator;
pub use collector::MetricsCollector;
pub use endpoints::{EndpointStats, EndpointSummary};
pub use histogram::LatencyHistogram;
pub use summary::{ERROR_RATE_ALERT_PERCENT, MetricsSummary, summary_lines};
