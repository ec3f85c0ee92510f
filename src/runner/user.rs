use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::time::sleep;
use tracing::debug;

use crate::events::EventBus;
use crate::http::HttpTransport;
use crate::scenario::{SessionState, StepContext, TASK_SEQUENCE, run_task, visit_home};
use crate::shutdown::ShutdownReceiver;

use super::WaitTime;

/// One simulated user: a home page visit, then the owner/pet task sequence
/// with a random wait after every task, until shutdown.
pub(super) async fn run_user(
    user_id: usize,
    client: Arc<dyn HttpTransport>,
    bus: Arc<EventBus>,
    wait: WaitTime,
    mut shutdown_rx: ShutdownReceiver,
    iterations: Arc<AtomicU64>,
) {
    let ctx = StepContext {
        client: client.as_ref(),
        bus: bus.as_ref(),
    };
    let mut session = SessionState::new();

    tokio::select! {
        _ = shutdown_rx.recv() => return,
        outcome = visit_home(ctx) => {
            debug!("User {} on_start: {:?}", user_id, outcome);
        }
    }

    'run: loop {
        for task in TASK_SEQUENCE {
            tokio::select! {
                _ = shutdown_rx.recv() => break 'run,
                _ = run_task(task, ctx, &mut session) => {}
            }

            let pause = wait.sample(&mut rand::thread_rng());
            tokio::select! {
                _ = shutdown_rx.recv() => break 'run,
                () = sleep(pause) => {}
            }
        }
        iterations.fetch_add(1, Ordering::Relaxed);
    }

    debug!("User {} stopped", user_id);
}
