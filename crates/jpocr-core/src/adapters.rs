use async_trait::async_trait;
use jpocr_types::CapturedImage;

use crate::error::OcrError;

/// How the interactive capture tool exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureExit {
    Finished,
    /// Non-zero exit, usually the user pressing Escape
    Aborted { code: Option<i32> },
}

/// Interactive screen capture that leaves its result on the clipboard
#[async_trait]
pub trait ScreenCapture: Send + Sync {
    /// Run the capture tool and wait for it to exit. No timeout.
    async fn capture(&self) -> anyhow::Result<CaptureExit>;
}

/// System clipboard access
pub trait ClipboardAccess: Send + Sync {
    /// Most recent bitmap on the clipboard, `None` when there is none
    fn read_image(&self) -> anyhow::Result<Option<CapturedImage>>;

    /// Clear the clipboard and store `text` as plain text
    fn replace_text(&self, text: &str) -> anyhow::Result<()>;
}

/// On-device text recognition
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Top candidate string of every detected region, in service order
    async fn recognize(&self, image: CapturedImage) -> Result<Vec<String>, OcrError>;
}
