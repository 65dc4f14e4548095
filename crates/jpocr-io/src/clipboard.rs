use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};
use jpocr_core::ClipboardAccess;
use jpocr_types::CapturedImage;

/// The general pasteboard. A handle is opened per operation so nothing is held
/// across a capture.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<Clipboard> {
        Clipboard::new().context("Failed to open clipboard")
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_image(&self) -> Result<Option<CapturedImage>> {
        let mut clipboard = Self::open()?;
        match clipboard.get_image() {
            Ok(data) => image_from_clipboard(data).map(Some),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e).context("Failed to read image from clipboard"),
        }
    }

    fn replace_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Self::open()?;
        clipboard.clear().context("Failed to clear clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to write text to clipboard")?;
        tracing::debug!("Clipboard now holds {} chars of text", text.chars().count());
        Ok(())
    }
}

fn image_from_clipboard(data: ImageData<'_>) -> Result<CapturedImage> {
    let width = u32::try_from(data.width).context("Clipboard image too wide")?;
    let height = u32::try_from(data.height).context("Clipboard image too tall")?;
    Ok(CapturedImage::new(width, height, data.bytes.into_owned()))
}
