use std::sync::Arc;

use jpocr_config::Config;
use jpocr_core::CaptureCycle;
use jpocr_io::SystemClipboard;
use jpocr_ocr::{ScreencaptureTool, VisionRecognizer};
use jpocr_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Capture cycle wired to the real screencapture tool, clipboard and Vision
pub fn system_cycle(config: &Config) -> CaptureCycle {
    CaptureCycle::new(
        Arc::new(ScreencaptureTool::new(&config.capture)),
        Arc::new(SystemClipboard::new()),
        Arc::new(VisionRecognizer::new(&config.ocr)),
    )
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cycle: CaptureCycle,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, cycle: CaptureCycle) -> Self {
        Self {
            channels: ChannelSet::new(state.config.event_queue_capacity),
            state,
            cycle,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender the UI thread uses to hand events to the app
    pub fn sender(&self) -> AsyncSender<AppEvent> {
        self.channels.ui_to_app.0.clone()
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn spawn_tasks(&self, handle: &Handle) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn_on(
            event_loop(
                self.state.clone(),
                self.cycle.clone(),
                self.channels.ui_to_app.1.clone(),
                self.channels.ui_to_app.0.clone(),
                self.cancel_token.child_token(),
            ),
            handle,
        );

        tasks
    }

    /// Ask the event loop to stop, then cancel whatever is still waiting
    pub fn shutdown(&self) {
        match self.channels.ui_to_app.0.try_send(AppEvent::Shutdown) {
            Ok(true) => {}
            Ok(false) => tracing::debug!("Event queue full, relying on cancellation"),
            Err(e) => tracing::debug!("Event loop already gone: {e}"),
        }
        self.cancel_token.cancel();
    }
}
