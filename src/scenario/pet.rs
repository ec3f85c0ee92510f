use crate::data::generate_pet_data;
use crate::events::RequestOutcome;

use super::exchange::{Call, perform};
use super::{NEW_PET, SessionState, StepContext, StepOutcome, new_pet_path};

/// 302 is success; a 200 re-rendering the form is success unless the body
/// mentions an error (case-insensitive).
#[must_use]
pub fn classify_pet_submission(status: u16, body: &str) -> RequestOutcome {
    match status {
        302 => RequestOutcome::Success,
        200 if body.to_lowercase().contains("error") => {
            RequestOutcome::Failure("Validation error in pet creation".to_owned())
        }
        200 => RequestOutcome::Success,
        other => RequestOutcome::Failure(format!("Expected 302 or 200, got {}", other)),
    }
}

/// Adds a random pet to the owner held in `session`. Does nothing when no
/// owner is held. The owner is consumed whatever the outcome.
pub async fn create_pet(ctx: StepContext<'_>, session: &mut SessionState) -> StepOutcome {
    let Some(owner_id) = session.take_owner_id() else {
        return StepOutcome::Skipped;
    };
    let path = new_pet_path(&owner_id);

    let form = match perform(ctx, NEW_PET, &path, Call::Get).await {
        Ok(form) => form,
        Err(reason) => return StepOutcome::Failed(reason),
    };
    if form.reply.status != 200 {
        let reason = format!("GET pets/new failed: {}", form.reply.status);
        form.finish(ctx.bus, RequestOutcome::Failure(reason.clone()));
        return StepOutcome::Failed(reason);
    }
    form.finish(ctx.bus, RequestOutcome::Success);

    let pet = generate_pet_data();
    let fields = pet.form_fields();
    let submitted = match perform(ctx, NEW_PET, &path, Call::PostForm(&fields)).await {
        Ok(submitted) => submitted,
        Err(reason) => return StepOutcome::Failed(reason),
    };

    let outcome = classify_pet_submission(submitted.reply.status, &submitted.reply.body);
    submitted.finish(ctx.bus, outcome.clone());
    match outcome {
        RequestOutcome::Success => StepOutcome::Succeeded,
        RequestOutcome::Failure(reason) => StepOutcome::Failed(reason),
    }
}
