use std::time::Duration;

/// Classification a step gives to one response.
///
/// This is separate from `RequestEvent::exception`: a `Failure` here is a soft
/// failure decided by the step, while an exception means no usable response
/// arrived at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Failure(String),
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success)
    }
}

/// One completed HTTP exchange, labelled by route template.
#[derive(Debug, Clone)]
pub struct RequestEvent {
    pub method: &'static str,
    pub name: String,
    pub response_time: Duration,
    pub response_length: u64,
    pub status: Option<u16>,
    pub outcome: RequestOutcome,
    pub exception: Option<String>,
}

impl RequestEvent {
    #[must_use]
    pub fn response_time_us(&self) -> u64 {
        u64::try_from(self.response_time.as_micros()).unwrap_or(u64::MAX)
    }
}
