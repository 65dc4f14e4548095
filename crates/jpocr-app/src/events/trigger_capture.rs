use std::sync::Arc;

use jpocr_core::CaptureCycle;
use jpocr_types::{AppEvent, TriggerSource};
use kanal::AsyncSender;
use tokio::task::JoinHandle;

use crate::state::AppState;

/// Start a capture cycle off the event loop. Overlapping triggers are turned
/// away by the cycle tracker and come back as `CycleOutcome::Busy`.
pub fn handle_capture_trigger(
    state: &Arc<AppState>,
    cycle: &CaptureCycle,
    source: TriggerSource,
    app_tx: &AsyncSender<AppEvent>,
) -> JoinHandle<()> {
    let tracker = state.cycles.clone();
    let cycle = cycle.clone();
    let app_tx = app_tx.clone();

    tokio::spawn(async move {
        let outcome = cycle.run(&tracker, source).await;
        if let Err(e) = app_tx.send(AppEvent::CycleFinished(outcome)).await {
            tracing::debug!("Event loop gone before cycle report: {e}");
        }
    })
}
