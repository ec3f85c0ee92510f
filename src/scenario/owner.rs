use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::data::generate_owner_data;
use crate::events::RequestOutcome;
use crate::http::HttpReply;

use super::exchange::{Call, perform};
use super::{NEW_OWNER, SessionState, StepContext, StepOutcome};

static OWNER_ID_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"/owners/(\d+)"));

/// Pulls the numeric owner id out of a redirect target such as
/// `/owners/42` or `http://host/owners/42`.
#[must_use]
pub fn extract_owner_id(location: &str) -> Option<String> {
    let pattern = OWNER_ID_PATTERN.as_ref().ok()?;
    pattern
        .captures(location)?
        .get(1)
        .map(|id| id.as_str().to_owned())
}

fn classify_owner_submission(reply: &HttpReply) -> Result<String, String> {
    if reply.status != 302 {
        return Err(format!("Expected 302, got {}", reply.status));
    }
    let location = reply.location.as_deref().unwrap_or_default();
    extract_owner_id(location)
        .ok_or_else(|| format!("Could not extract owner ID from: {}", location))
}

/// Fetches the owner form, then submits a random owner. On success the new
/// owner id is stored in `session`.
pub async fn create_owner(ctx: StepContext<'_>, session: &mut SessionState) -> StepOutcome {
    let form = match perform(ctx, NEW_OWNER, NEW_OWNER, Call::Get).await {
        Ok(form) => form,
        Err(reason) => return StepOutcome::Failed(reason),
    };
    if form.reply.status != 200 {
        let reason = format!("GET /owners/new failed: {}", form.reply.status);
        form.finish(ctx.bus, RequestOutcome::Failure(reason.clone()));
        return StepOutcome::Failed(reason);
    }
    form.finish(ctx.bus, RequestOutcome::Success);

    let owner = generate_owner_data();
    let fields = owner.form_fields();
    let submitted = match perform(ctx, NEW_OWNER, NEW_OWNER, Call::PostForm(&fields)).await {
        Ok(submitted) => submitted,
        Err(reason) => return StepOutcome::Failed(reason),
    };

    match classify_owner_submission(&submitted.reply) {
        Ok(owner_id) => {
            submitted.finish(ctx.bus, RequestOutcome::Success);
            debug!("Created owner {}", owner_id);
            session.set_owner_id(owner_id);
            StepOutcome::Succeeded
        }
        Err(reason) => {
            submitted.finish(ctx.bus, RequestOutcome::Failure(reason.clone()));
            StepOutcome::Failed(reason)
        }
    }
}
