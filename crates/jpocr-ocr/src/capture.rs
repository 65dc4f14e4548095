use anyhow::{Context, Result};
use async_trait::async_trait;
use jpocr_config::capture::CaptureConfig;
use jpocr_core::{CaptureExit, ScreenCapture};
use tokio::process::Command;

/// Runs the macOS `screencapture` tool in interactive, copy-to-clipboard mode
#[derive(Debug, Clone)]
pub struct ScreencaptureTool {
    program: String,
    args: Vec<&'static str>,
}

impl ScreencaptureTool {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args(),
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl ScreenCapture for ScreencaptureTool {
    async fn capture(&self) -> Result<CaptureExit> {
        tracing::debug!("Running {}", self.command_line());

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .with_context(|| format!("Failed to launch {}", self.program))?;

        if status.success() {
            Ok(CaptureExit::Finished)
        } else {
            Ok(CaptureExit::Aborted {
                code: status.code(),
            })
        }
    }
}
