mod capture;
#[cfg(target_os = "macos")]
mod hotkey;
mod ocr;
#[cfg(target_os = "macos")]
mod vision;

pub use capture::ScreencaptureTool;
#[cfg(target_os = "macos")]
pub use hotkey::{GlobalHotkeyBackend, to_hotkey};
pub use ocr::{RecognitionOptions, VisionRecognizer, decode_image, encode_png};
