use jpocr_types::RecognitionLevel;
use serde::{Deserialize, Serialize};

use crate::{bool_or, parse_or};

fn default_language() -> String {
    "ja-JP".to_string()
}

fn default_language_correction() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// BCP 47 language hint passed to the recognizer
    #[serde(default = "default_language")]
    pub language: String,
    pub level: RecognitionLevel,
    #[serde(default = "default_language_correction")]
    pub language_correction: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            level: RecognitionLevel::default(),
            language_correction: default_language_correction(),
        }
    }
}

impl OcrConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = lookup("JPOCR_LANGUAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_language);

        Self {
            language,
            level: parse_or(lookup, "JPOCR_RECOGNITION_LEVEL", RecognitionLevel::default()),
            language_correction: bool_or(
                lookup,
                "JPOCR_LANGUAGE_CORRECTION",
                default_language_correction(),
            ),
        }
    }
}
