use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::hotkey::HotkeyConfig;
use self::ocr::OcrConfig;

pub mod capture;
pub mod hotkey;
pub mod ocr;

pub use hotkey::{HotkeyBinding, Key, Modifier};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("empty accelerator")]
    EmptyAccelerator,

    #[error("unknown key '{0}' in accelerator")]
    UnknownKey(String),

    #[error("accelerator '{0}' has no key")]
    MissingKey(String),

    #[error("accelerator '{0}' has more than one key")]
    MultipleKeys(String),

    #[error("hotkey signature must be exactly 4 ASCII bytes, got '{0}'")]
    InvalidSignature(String),
}

fn default_event_queue_capacity() -> usize {
    16
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ocr: OcrConfig,
    pub hotkey: HotkeyConfig,
    pub capture: CaptureConfig,

    /// Capacity of the UI to app event channel
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
}

impl Config {
    /// Defaults overridden by `JPOCR_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config reading overrides through `lookup` instead of the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            ocr: OcrConfig::from_lookup(&lookup),
            hotkey: HotkeyConfig::from_lookup(&lookup),
            capture: CaptureConfig::from_lookup(&lookup),
            event_queue_capacity: parse_or(&lookup, "JPOCR_EVENT_QUEUE", default_event_queue_capacity())
                .max(1),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Parse `key` with `FromStr`, warning and falling back to `default` on garbage
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value '{raw}' for {key}");
            default
        }),
        None => default,
    }
}

pub(crate) fn bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Some(v) => {
            tracing::warn!("Ignoring invalid boolean '{v}' for {key}");
            default
        }
        None => default,
    }
}
