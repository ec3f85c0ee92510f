/// Error rate, in percent, above which the run is flagged.
pub const ERROR_RATE_ALERT_PERCENT: u64 = 2;

/// Divisor for fixed-point values stored with two decimals.
const PERCENT_DIVISOR: u64 = 100;
/// Microseconds per hundredth of a millisecond.
const US_PER_CENTI_MS: u64 = 10;
const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub failed_requests: u64,
    pub avg_response_time_us: u64,
    /// Error rate in hundredths of a percent (`250` is 2.50%), rounded half
    /// up.
    pub error_rate_x100: u64,
}

impl MetricsSummary {
    #[must_use]
    pub fn new(total_requests: u64, failed_requests: u64, avg_response_time_us: u64) -> Self {
        let total = u128::from(total_requests);
        let error_rate_x100 = u128::from(failed_requests)
            .saturating_mul(10_000)
            .saturating_add(total / 2)
            .checked_div(total)
            .map_or(0, |rate| u64::try_from(rate).unwrap_or(u64::MAX));
        Self {
            total_requests,
            failed_requests,
            avg_response_time_us,
            error_rate_x100,
        }
    }

    /// True when `failed / total * 100` is strictly above the alert threshold.
    ///
    /// Compared on the raw counters so rounding of `error_rate_x100` never
    /// moves a run across the threshold.
    #[must_use]
    pub fn is_alert(&self) -> bool {
        u128::from(self.failed_requests).saturating_mul(100)
            > u128::from(self.total_requests).saturating_mul(u128::from(ERROR_RATE_ALERT_PERCENT))
    }

    #[must_use]
    pub fn error_rate_display(&self) -> String {
        format!(
            "{}.{:02}%",
            self.error_rate_x100 / PERCENT_DIVISOR,
            self.error_rate_x100 % PERCENT_DIVISOR
        )
    }

    #[must_use]
    pub fn avg_response_time_display(&self) -> String {
        let centi_ms = self
            .avg_response_time_us
            .saturating_add(US_PER_CENTI_MS / 2)
            / US_PER_CENTI_MS;
        format!(
            "{}.{:02}ms",
            centi_ms / PERCENT_DIVISOR,
            centi_ms % PERCENT_DIVISOR
        )
    }
}

#[must_use]
pub fn summary_lines(summary: &MetricsSummary) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "METRICS SUMMARY".to_owned(),
        rule.clone(),
        format!("Total Requests: {}", summary.total_requests),
        format!("Failed Requests: {}", summary.failed_requests),
        format!("Error Rate: {}", summary.error_rate_display()),
        format!(
            "Average Response Time: {}",
            summary.avg_response_time_display()
        ),
        String::new(),
    ];
    if summary.is_alert() {
        lines.push(format!(
            "ALERT: error rate ({}) exceeds {}%!",
            summary.error_rate_display(),
            ERROR_RATE_ALERT_PERCENT
        ));
    } else {
        lines.push("Error rate is within the acceptable limit.".to_owned());
    }
    lines.push(rule);
    lines
}
