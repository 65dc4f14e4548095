use std::sync::Arc;

use jpocr_core::CaptureCycle;
use jpocr_types::{AppEvent, CycleOutcome};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod trigger_capture;

use trigger_capture::handle_capture_trigger;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    cycle: CaptureCycle,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::debug!("Event loop started, waiting for events");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        if !handle_events(&state, &cycle, &app_tx, event) {
            break;
        }
    }

    let stats = state.cycles.stats();
    tracing::info!(
        "Event loop stopping ({} copied, {} failed, {} ignored while busy)",
        stats.completed,
        stats.failed,
        stats.rejected
    );
    Ok(())
}

/// Returns false when the loop should stop
fn handle_events(
    state: &Arc<AppState>,
    cycle: &CaptureCycle,
    app_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::CaptureRequested(source) => {
            handle_capture_trigger(state, cycle, source, app_tx);
        }
        AppEvent::CycleFinished(outcome) => match outcome {
            CycleOutcome::Busy => {}
            outcome => tracing::debug!("Cycle finished: {outcome:?}"),
        },
        AppEvent::Shutdown => return false,
    }
    true
}
