use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::warn;

use crate::events::{EventListener, RequestEvent};

use super::LatencyHistogram;

const US_PER_MS: u64 = 1_000;

#[derive(Debug)]
struct EndpointEntry {
    requests: u64,
    soft_failures: u64,
    transport_errors: u64,
    histogram: Option<LatencyHistogram>,
}

impl EndpointEntry {
    fn new() -> Self {
        let histogram = match LatencyHistogram::new() {
            Ok(histogram) => Some(histogram),
            Err(err) => {
                warn!("Failed to initialize endpoint histogram: {}", err);
                None
            }
        };
        Self {
            requests: 0,
            soft_failures: 0,
            transport_errors: 0,
            histogram,
        }
    }
}

/// Per `(method, name)` row of the endpoint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSummary {
    pub method: String,
    pub name: String,
    pub requests: u64,
    pub soft_failures: u64,
    pub transport_errors: u64,
    pub p50_ms: u64,
    pub p90_ms: u64,
    pub p99_ms: u64,
    pub max_ms: u64,
}

/// Bus listener grouping requests by route template.
///
/// Unlike [`super::MetricsCollector`], soft failures count here, so the
/// table shows what each step actually classified.
#[derive(Debug, Default)]
pub struct EndpointStats {
    entries: Mutex<BTreeMap<(String, String), EndpointEntry>>,
}

impl EndpointStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows sorted by name, then method.
    #[must_use]
    pub fn snapshot(&self) -> Vec<EndpointSummary> {
        let entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut rows: Vec<EndpointSummary> = entries
            .iter()
            .map(|((method, name), entry)| {
                let (p50_ms, p90_ms, p99_ms, max_ms) =
                    entry.histogram.as_ref().map_or((0, 0, 0, 0), |histogram| {
                        let (p50, p90, p99) = histogram.percentiles();
                        (p50, p90, p99, histogram.max())
                    });
                EndpointSummary {
                    method: method.clone(),
                    name: name.clone(),
                    requests: entry.requests,
                    soft_failures: entry.soft_failures,
                    transport_errors: entry.transport_errors,
                    p50_ms,
                    p90_ms,
                    p99_ms,
                    max_ms,
                }
            })
            .collect();
        rows.sort_by(|left, right| {
            left.name
                .cmp(&right.name)
                .then_with(|| left.method.cmp(&right.method))
        });
        rows
    }
}

impl EventListener for EndpointStats {
    fn on_request_completed(&self, event: &RequestEvent) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = entries
            .entry((event.method.to_owned(), event.name.clone()))
            .or_insert_with(EndpointEntry::new);
        entry.requests = entry.requests.saturating_add(1);
        if event.exception.is_some() {
            entry.transport_errors = entry.transport_errors.saturating_add(1);
        } else if !event.outcome.is_success() {
            entry.soft_failures = entry.soft_failures.saturating_add(1);
        }
        if let Some(histogram) = entry.histogram.as_mut()
            && let Err(err) = histogram.record(event.response_time_us() / US_PER_MS)
        {
            warn!("Failed to record latency for {}: {}", event.name, err);
        }
    }

    fn on_test_stopped(&self) {
        let rows = self.snapshot();
        if rows.is_empty() {
            return;
        }
        for line in endpoint_lines(&rows) {
            println!("{}", line);
        }
    }
}

pub(super) fn endpoint_lines(rows: &[EndpointSummary]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len().saturating_add(2));
    lines.push(format!(
        "{:<6} {:<28} {:>8} {:>8} {:>8} {:>7} {:>7} {:>7} {:>7}",
        "Type", "Name", "Reqs", "Fails", "Errors", "p50", "p90", "p99", "Max"
    ));
    lines.push("-".repeat(92));
    for row in rows {
        lines.push(format!(
            "{:<6} {:<28} {:>8} {:>8} {:>8} {:>5}ms {:>5}ms {:>5}ms {:>5}ms",
            row.method,
            row.name,
            row.requests,
            row.soft_failures,
            row.transport_errors,
            row.p50_ms,
            row.p90_ms,
            row.p99_ms,
            row.max_ms
        ));
    }
    lines
}
