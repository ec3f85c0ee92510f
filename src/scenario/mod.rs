//! The owner-then-pet task sequence run by every simulated user.
mod exchange;
mod owner;
mod pet;
mod routes;
mod session;


pub use owner::{create_owner, extract_owner_id};
pub use pet::{classify_pet_submission, create_pet};
pub use routes::{HOME_PAGE, NEW_OWNER, NEW_PET, new_pet_path};
pub use session::SessionState;

use tracing::debug;

use crate::events::{EventBus, RequestOutcome};
use crate::http::HttpTransport;

use exchange::{Call, perform};

/// Borrowed collaborators for one step.
#[derive(Clone, Copy)]
pub struct StepContext<'ctx> {
    pub client: &'ctx dyn HttpTransport,
    pub bus: &'ctx EventBus,
}

/// Result of one step, as reported to the caller. Failures are soft: they
/// have already been published on the bus and never stop the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Skipped,
    Succeeded,
    Failed(String),
}

/// The tasks of one iteration, in the order every user runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    CreateOwner,
    CreatePet,
}

pub const TASK_SEQUENCE: [Task; 2] = [Task::CreateOwner, Task::CreatePet];

/// Runs one task of the sequence for one user.
pub async fn run_task(
    task: Task,
    ctx: StepContext<'_>,
    session: &mut SessionState,
) -> StepOutcome {
    let outcome = match task {
        Task::CreateOwner => create_owner(ctx, session).await,
        Task::CreatePet => create_pet(ctx, session).await,
    };
    debug!("{:?} finished: {:?}", task, outcome);
    outcome
}

/// Landing page visit made once when a user starts.
pub async fn visit_home(ctx: StepContext<'_>) -> StepOutcome {
    let pending = match perform(ctx, HOME_PAGE, HOME_PAGE, Call::Get).await {
        Ok(pending) => pending,
        Err(reason) => return StepOutcome::Failed(reason),
    };
    let status = pending.reply.status;
    if status >= 400 {
        let reason = format!("GET / failed: {}", status);
        pending.finish(ctx.bus, RequestOutcome::Failure(reason.clone()));
        return StepOutcome::Failed(reason);
    }
    pending.finish(ctx.bus, RequestOutcome::Success);
    StepOutcome::Succeeded
}
