use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Run one capture cycle
    CaptureRequested(TriggerSource),
    /// A cycle reached a terminal state
    CycleFinished(CycleOutcome),
    Shutdown,
}

/// Where a capture request came from. Both sources drive the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    Hotkey,
    Menu,
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerSource::Hotkey => f.write_str("hotkey"),
            TriggerSource::Menu => f.write_str("menu"),
        }
    }
}

/// Non-terminal states of a capture cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    Capturing,
    Recognizing,
}

/// Terminal states of a capture cycle. Every one of them returns the app to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No fresh, decodable image was found on the clipboard
    CaptureFailed,
    /// The recognizer reported an error
    RecognitionFailed,
    /// Recognition succeeded but produced no text
    EmptyResult,
    /// Text was recognized but the clipboard rejected it
    CopyFailed,
    /// Text replaced the clipboard contents
    TextCopied { lines: usize, chars: usize },
    /// Another cycle was already in flight
    Busy,
}

impl CycleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CycleOutcome::TextCopied { .. })
    }
}

/// Bitmap read from the clipboard, tightly packed RGBA8
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CapturedImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Non-empty and the buffer length matches the dimensions
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba.len() as u64 == self.width as u64 * self.height as u64 * 4
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionLevel {
    #[default]
    Accurate,
    Fast,
}

impl FromStr for RecognitionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accurate" => Ok(RecognitionLevel::Accurate),
            "fast" => Ok(RecognitionLevel::Fast),
            other => Err(format!("unknown recognition level '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_image_requires_matching_buffer() {
        assert!(CapturedImage::new(2, 2, vec![0; 16]).is_well_formed());
        assert!(!CapturedImage::new(2, 2, vec![0; 15]).is_well_formed());
        assert!(!CapturedImage::new(0, 2, Vec::new()).is_well_formed());
    }

    #[test]
    fn recognition_level_parses_case_insensitively() {
        assert_eq!("Accurate".parse(), Ok(RecognitionLevel::Accurate));
        assert_eq!(" fast ".parse(), Ok(RecognitionLevel::Fast));
        assert!("best".parse::<RecognitionLevel>().is_err());
    }

    #[test]
    fn only_text_copied_counts_as_success() {
        assert!(CycleOutcome::TextCopied { lines: 1, chars: 2 }.is_success());
        assert!(!CycleOutcome::EmptyResult.is_success());
        assert!(!CycleOutcome::Busy.is_success());
    }
}
