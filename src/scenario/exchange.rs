use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, warn};

use crate::events::{EventBus, RequestEvent, RequestOutcome};
use crate::http::HttpReply;

use super::StepContext;

pub(super) enum Call<'form> {
    Get,
    PostForm(&'form [(&'static str, &'form str)]),
}

impl Call<'_> {
    const fn method(&self) -> &'static str {
        match self {
            Call::Get => "GET",
            Call::PostForm(_) => "POST",
        }
    }
}

/// A response that still has to be classified and published.
pub(super) struct Pending {
    method: &'static str,
    name: &'static str,
    response_time: Duration,
    pub(super) reply: HttpReply,
}

impl Pending {
    /// Publishes the request under its template name and hands the reply
    /// back.
    pub(super) fn finish(self, bus: &EventBus, outcome: RequestOutcome) -> HttpReply {
        if let RequestOutcome::Failure(reason) = &outcome {
            warn!("{} {} failed: {}", self.method, self.name, reason);
        }
        bus.request_completed(&RequestEvent {
            method: self.method,
            name: self.name.to_owned(),
            response_time: self.response_time,
            response_length: self.reply.body_len(),
            status: Some(self.reply.status),
            outcome,
            exception: None,
        });
        self.reply
    }
}

/// Issues one request. A transport error is published right away with its
/// exception text and returned as `Err`.
pub(super) async fn perform(
    ctx: StepContext<'_>,
    name: &'static str,
    path: &str,
    call: Call<'_>,
) -> Result<Pending, String> {
    let method = call.method();
    let start = Instant::now();
    let result = match call {
        Call::Get => ctx.client.get(path).await,
        Call::PostForm(fields) => ctx.client.post_form(path, fields).await,
    };
    let response_time = start.elapsed();

    match result {
        Ok(reply) => Ok(Pending {
            method,
            name,
            response_time,
            reply,
        }),
        Err(err) => {
            let exception = err.to_string();
            error!("{} {} failed: {}", method, name, exception);
            ctx.bus.request_completed(&RequestEvent {
                method,
                name: name.to_owned(),
                response_time,
                response_length: 0,
                status: None,
                outcome: RequestOutcome::Failure(exception.clone()),
                exception: Some(exception.clone()),
            });
            Err(exception)
        }
    }
}
