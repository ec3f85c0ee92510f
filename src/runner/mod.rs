//! Simulated user scheduling: spawn rate, think time and run duration.
mod settings;
mod user;


pub use settings::{RunSettings, WaitTime};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::time::{interval, sleep};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::events::EventBus;
use crate::http::HttpTransport;
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

use user::run_user;

const SPAWN_TICK: Duration = Duration::from_secs(1);

/// What a finished run did, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub users_started: usize,
    pub iterations: u64,
}

/// Runs the load test until `run_time` elapses or a shutdown is broadcast,
/// then fires `test_stopped` once every user has exited.
///
/// # Errors
///
/// Returns an error when a user task panics or is cancelled.
pub async fn run_load(
    settings: &RunSettings,
    client: Arc<dyn HttpTransport>,
    bus: Arc<EventBus>,
    shutdown_tx: &ShutdownSender,
) -> AppResult<RunReport> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    let deadline = spawn_deadline(settings.run_time, shutdown_tx);
    let iterations = Arc::new(AtomicU64::new(0));

    info!(
        "Starting {} users at {} per second for {:?}",
        settings.users, settings.spawn_rate, settings.run_time
    );

    let mut spawn_interval = interval(SPAWN_TICK);
    let per_tick = usize::try_from(settings.spawn_rate).unwrap_or(usize::MAX);
    let mut user_handles = Vec::with_capacity(settings.users);

    let mut stopping = false;
    while user_handles.len() < settings.users {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                stopping = true;
                break;
            }
            _ = spawn_interval.tick() => {
                let remaining = settings.users.saturating_sub(user_handles.len());
                for _ in 0..per_tick.min(remaining) {
                    let user_id = user_handles.len();
                    user_handles.push(tokio::spawn(run_user(
                        user_id,
                        Arc::clone(&client),
                        Arc::clone(&bus),
                        settings.wait,
                        shutdown_tx.subscribe(),
                        Arc::clone(&iterations),
                    )));
                }
                debug!("{} users running", user_handles.len());
            }
        }
    }

    // Users subscribed after the first broadcast would miss it.
    if stopping || shutdown_pending(&mut shutdown_rx) {
        drop(shutdown_tx.send(()));
    }

    let users_started = user_handles.len();
    if users_started == settings.users {
        info!("All {} users spawned", users_started);
    }

    for handle in user_handles {
        handle.await?;
    }
    deadline.abort();

    bus.test_stopped();

    Ok(RunReport {
        users_started,
        iterations: iterations.load(Ordering::Relaxed),
    })
}

/// True when a shutdown reached the spawner without being handled, for
/// example one sent while the final spawn tick was being served.
fn shutdown_pending(shutdown_rx: &mut ShutdownReceiver) -> bool {
    !matches!(shutdown_rx.try_recv(), Err(TryRecvError::Empty))
}

fn spawn_deadline(
    run_time: Duration,
    shutdown_tx: &ShutdownSender,
) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        sleep(run_time).await;
        info!("Run time of {:?} reached, stopping users", run_time);
        drop(shutdown_tx.send(()));
    })
}
