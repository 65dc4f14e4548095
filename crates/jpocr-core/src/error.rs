use jpocr_types::CycleOutcome;

/// Failures reported by a text recognizer
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("image conversion failed: {0}")]
    ImageConversion(String),

    #[error("recognition service error: {0}")]
    Service(String),

    #[error("recognition task failed: {0}")]
    Task(String),

    #[error("text recognition is not available on this platform")]
    Unsupported,
}

impl From<tokio::task::JoinError> for OcrError {
    fn from(e: tokio::task::JoinError) -> Self {
        OcrError::Task(e.to_string())
    }
}

/// Why a capture cycle stopped before copying text
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("failed to run the capture tool: {0:#}")]
    Capture(anyhow::Error),

    #[error("failed to read the clipboard: {0:#}")]
    ClipboardRead(anyhow::Error),

    #[error("no image on the clipboard")]
    NoImage,

    #[error("clipboard image is not decodable ({width}x{height}, {bytes} bytes)")]
    Undecodable { width: u32, height: u32, bytes: usize },

    #[error("clipboard image did not change, capture was cancelled")]
    StaleImage,

    #[error(transparent)]
    Recognition(#[from] OcrError),

    #[error("no text recognized")]
    EmptyText,

    #[error("failed to write the clipboard: {0:#}")]
    ClipboardWrite(anyhow::Error),
}

impl CycleError {
    /// Terminal state this error leaves the cycle in
    pub fn outcome(&self) -> CycleOutcome {
        match self {
            CycleError::Capture(_)
            | CycleError::ClipboardRead(_)
            | CycleError::NoImage
            | CycleError::Undecodable { .. }
            | CycleError::StaleImage => CycleOutcome::CaptureFailed,
            CycleError::Recognition(_) => CycleOutcome::RecognitionFailed,
            CycleError::ClipboardWrite(_) => CycleOutcome::CopyFailed,
            CycleError::EmptyText => CycleOutcome::EmptyResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_terminal_states() {
        assert_eq!(CycleError::NoImage.outcome(), CycleOutcome::CaptureFailed);
        assert_eq!(CycleError::StaleImage.outcome(), CycleOutcome::CaptureFailed);
        assert_eq!(
            CycleError::Recognition(OcrError::Service("boom".into())).outcome(),
            CycleOutcome::RecognitionFailed
        );
        assert_eq!(CycleError::EmptyText.outcome(), CycleOutcome::EmptyResult);
    }
}
