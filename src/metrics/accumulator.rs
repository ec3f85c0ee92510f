use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use super::MetricsSummary;

/// Counters behind the end-of-run error-rate report.
///
/// Each field is updated independently; the summary is only read once every
/// writer has stopped, so no cross-field consistency is needed.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    total_requests: AtomicU64,
    failed_requests: AtomicU64,
    response_times_us: Mutex<Vec<u64>>,
}

impl MetricsAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed request. `transport_failed` is true only when
    /// the request produced an exception rather than a response.
    pub fn record(&self, response_time_us: u64, transport_failed: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if transport_failed {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
        match self.response_times_us.lock() {
            Ok(mut times) => times.push(response_time_us),
            Err(poisoned) => {
                warn!("Response time buffer lock was poisoned; recovering.");
                poisoned.into_inner().push(response_time_us);
            }
        }
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn failed_requests(&self) -> u64 {
        self.failed_requests.load(Ordering::Relaxed)
    }

    /// Returns `None` when no request completed.
    #[must_use]
    pub fn summarize(&self) -> Option<MetricsSummary> {
        let total_requests = self.total_requests();
        if total_requests == 0 {
            return None;
        }
        let failed_requests = self.failed_requests();
        let (sample_count, sum_us) = match self.response_times_us.lock() {
            Ok(times) => sum_samples(&times),
            Err(poisoned) => sum_samples(&poisoned.into_inner()),
        };
        let avg_response_time_us = sum_us
            .checked_div(u128::from(sample_count))
            .map_or(0, |avg| u64::try_from(avg).unwrap_or(u64::MAX));

        Some(MetricsSummary::new(
            total_requests,
            failed_requests,
            avg_response_time_us,
        ))
    }
}

fn sum_samples(times: &[u64]) -> (u64, u128) {
    let count = u64::try_from(times.len()).unwrap_or(u64::MAX);
    let sum = times
        .iter()
        .fold(0u128, |acc, value| acc.saturating_add(u128::from(*value)));
    (count, sum)
}
