use std::sync::Arc;

use jpocr_config::Config;
use jpocr_core::CycleTracker;

pub struct AppState {
    pub config: Config,
    pub cycles: Arc<CycleTracker>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cycles: Arc::new(CycleTracker::new()),
        }
    }
}
