pub mod adapters;
pub mod cycle;
pub mod error;
pub mod hotkey;
pub mod state;
pub mod text;

pub use adapters::{CaptureExit, ClipboardAccess, ScreenCapture, TextRecognizer};
pub use cycle::CaptureCycle;
pub use error::{CycleError, OcrError};
pub use hotkey::{HotkeyBackend, HotkeySlot};
pub use state::{CycleGuard, CycleStats, CycleTracker};
pub use text::join_regions;
