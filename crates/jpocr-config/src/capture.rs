use serde::{Deserialize, Serialize};

use crate::bool_or;

fn default_program() -> String {
    "/usr/sbin/screencapture".to_string()
}

fn default_no_shadow() -> bool {
    true
}

/// How the interactive screenshot tool is invoked
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Leave the window drop shadow out of window captures
    #[serde(default = "default_no_shadow")]
    pub no_shadow: bool,
    /// Do not play the shutter sound (`-x`). Together with `no_shadow = false` this gives
    /// the classic `screencapture -i -c -x` invocation.
    pub silent: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            no_shadow: default_no_shadow(),
            silent: false,
        }
    }
}

impl CaptureConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let program = lookup("JPOCR_SCREENCAPTURE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_program);

        Self {
            program,
            no_shadow: default_no_shadow(),
            silent: bool_or(lookup, "JPOCR_CAPTURE_SILENT", false),
        }
    }

    /// Arguments for interactive region selection copied to the clipboard
    pub fn args(&self) -> Vec<&'static str> {
        let mut args = vec!["-i", "-c"];
        if self.no_shadow {
            args.push("-o");
        }
        if self.silent {
            args.push("-x");
        }
        args
    }
}
