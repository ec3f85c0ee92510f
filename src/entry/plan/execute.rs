use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppResult;
use crate::events::{EventBus, EventListener};
use crate::http::{HttpTransport, build_transport};
use crate::metrics::{EndpointStats, MetricsCollector};
use crate::runner::run_load;
use crate::system::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};

use super::types::RunPlan;

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let client: Arc<dyn HttpTransport> = Arc::new(build_transport(&plan.client)?);

    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(MetricsCollector::new()) as Arc<dyn EventListener>);
    bus.subscribe(Arc::new(EndpointStats::new()) as Arc<dyn EventListener>);
    debug!("{} listeners subscribed", bus.listener_count());
    let bus = Arc::new(bus);

    info!("Target host: {}", plan.client.base_url);

    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let report = run_load(&plan.run, client, bus, &shutdown_tx).await?;
    signal_handle.abort();

    info!(
        "Run finished: {} users, {} iterations",
        report.users_started, report.iterations
    );
    Ok(())
}
