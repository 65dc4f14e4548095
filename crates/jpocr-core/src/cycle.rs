use std::sync::Arc;

use jpocr_types::{CapturedImage, CycleOutcome, CycleState, TriggerSource};
use sha2::{Digest, Sha256};

use crate::adapters::{CaptureExit, ClipboardAccess, ScreenCapture, TextRecognizer};
use crate::error::CycleError;
use crate::state::{CycleGuard, CycleTracker};
use crate::text::join_regions;

type Fingerprint = Vec<u8>;

/// capture -> clipboard image -> OCR -> clipboard text
#[derive(Clone)]
pub struct CaptureCycle {
    capture: Arc<dyn ScreenCapture>,
    clipboard: Arc<dyn ClipboardAccess>,
    recognizer: Arc<dyn TextRecognizer>,
}

impl CaptureCycle {
    pub fn new(
        capture: Arc<dyn ScreenCapture>,
        clipboard: Arc<dyn ClipboardAccess>,
        recognizer: Arc<dyn TextRecognizer>,
    ) -> Self {
        Self {
            capture,
            clipboard,
            recognizer,
        }
    }

    /// Run one cycle unless another is in flight. Always ends idle.
    pub async fn run(&self, tracker: &Arc<CycleTracker>, source: TriggerSource) -> CycleOutcome {
        let Some(guard) = tracker.try_begin() else {
            tracing::info!("Capture already in progress, ignoring {source} trigger");
            return CycleOutcome::Busy;
        };

        tracing::info!("Capture triggered from {source}");

        let outcome = match self.execute(&guard).await {
            Ok(outcome) => outcome,
            Err(e) => {
                match &e {
                    CycleError::EmptyText => tracing::info!("No text recognized"),
                    CycleError::Recognition(_) => tracing::error!("Failed to perform OCR: {e}"),
                    _ => tracing::warn!("Failed to process the captured image: {e}"),
                }
                e.outcome()
            }
        };

        guard.record(&outcome);
        outcome
    }

    async fn execute(&self, guard: &CycleGuard) -> Result<CycleOutcome, CycleError> {
        guard.enter(CycleState::Capturing);

        // A cancelled capture leaves the previous image in place
        let before = match self.read_image().await {
            Ok(image) => image.as_ref().map(fingerprint),
            Err(e) => {
                tracing::debug!("Could not snapshot clipboard before capture: {e}");
                None
            }
        };

        match self.capture.capture().await.map_err(CycleError::Capture)? {
            CaptureExit::Finished => tracing::debug!("Capture tool finished"),
            CaptureExit::Aborted { code } => {
                tracing::debug!("Capture tool exited with {code:?}, checking clipboard anyway")
            }
        }

        let image = self.read_image().await?.ok_or(CycleError::NoImage)?;
        if !image.is_well_formed() {
            return Err(CycleError::Undecodable {
                width: image.width,
                height: image.height,
                bytes: image.rgba.len(),
            });
        }
        if before == Some(fingerprint(&image)) {
            return Err(CycleError::StaleImage);
        }

        tracing::info!(
            "Screenshot captured. Image size: {}x{}",
            image.width,
            image.height
        );

        guard.enter(CycleState::Recognizing);
        let regions = self.recognizer.recognize(image).await?;
        let text = join_regions(&regions);
        if text.is_empty() {
            return Err(CycleError::EmptyText);
        }

        tracing::info!("Recognized text:\n{text}");

        let clipboard = Arc::clone(&self.clipboard);
        let copied = text.clone();
        tokio::task::spawn_blocking(move || clipboard.replace_text(&copied))
            .await
            .map_err(|e| CycleError::ClipboardWrite(e.into()))?
            .map_err(CycleError::ClipboardWrite)?;

        tracing::info!("Text copied to clipboard");

        Ok(CycleOutcome::TextCopied {
            lines: regions.len(),
            chars: text.chars().count(),
        })
    }

    async fn read_image(&self) -> Result<Option<CapturedImage>, CycleError> {
        let clipboard = Arc::clone(&self.clipboard);
        tokio::task::spawn_blocking(move || clipboard.read_image())
            .await
            .map_err(|e| CycleError::ClipboardRead(e.into()))?
            .map_err(CycleError::ClipboardRead)
    }
}

fn fingerprint(image: &CapturedImage) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(image.width.to_le_bytes());
    hasher.update(image.height.to_le_bytes());
    hasher.update(&image.rgba);
    hasher.finalize().to_vec()
}
