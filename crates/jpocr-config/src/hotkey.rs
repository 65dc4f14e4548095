use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, bool_or};

fn default_enabled() -> bool {
    true
}

fn default_accelerator() -> String {
    "Control+Command+M".to_string()
}

fn default_signature() -> String {
    "JPOC".to_string()
}

fn default_id() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_accelerator")]
    pub accelerator: String,
    /// Four character application signature the registration is filed under
    #[serde(default = "default_signature")]
    pub signature: String,
    #[serde(default = "default_id")]
    pub id: u32,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            accelerator: default_accelerator(),
            signature: default_signature(),
            id: default_id(),
        }
    }
}

impl HotkeyConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let accelerator = lookup("JPOCR_HOTKEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_accelerator);

        Self {
            enabled: bool_or(lookup, "JPOCR_HOTKEY_ENABLED", default_enabled()),
            accelerator,
            signature: default_signature(),
            id: default_id(),
        }
    }

    pub fn binding(&self) -> Result<HotkeyBinding, ConfigError> {
        self.accelerator.parse()
    }

    /// The signature packed big-endian into an OSType style code
    pub fn signature_code(&self) -> Result<u32, ConfigError> {
        let bytes = self.signature.as_bytes();
        if bytes.len() != 4 || !bytes.is_ascii() {
            return Err(ConfigError::InvalidSignature(self.signature.clone()));
        }
        Ok(bytes.iter().fold(0u32, |acc, b| (acc << 8) + *b as u32))
    }

    /// Human readable signature and id, e.g. `'JPOC' (0x4a504f43) id 1`
    pub fn identity(&self) -> Result<String, ConfigError> {
        let code = self.signature_code()?;
        Ok(format!("'{}' ({code:#010x}) id {}", self.signature, self.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Control,
    Option,
    Shift,
    Command,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "control" | "ctrl" => Some(Modifier::Control),
            "option" | "alt" => Some(Modifier::Option),
            "shift" => Some(Modifier::Shift),
            "command" | "cmd" | "super" | "meta" => Some(Modifier::Command),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Control => "Control",
            Modifier::Option => "Option",
            Modifier::Shift => "Shift",
            Modifier::Command => "Command",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(char),
    Digit(u8),
    Function(u8),
    Space,
}

impl Key {
    fn parse(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        let upper = upper.strip_prefix("KEY").filter(|s| s.len() == 1).unwrap_or(&upper);

        if upper == "SPACE" {
            return Some(Key::Space);
        }

        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => return Some(Key::Letter(c)),
            (Some(c), None) if c.is_ascii_digit() => return Some(Key::Digit(c as u8 - b'0')),
            _ => {}
        }

        upper
            .strip_prefix('F')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(Key::Function)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) => write!(f, "{c}"),
            Key::Digit(d) => write!(f, "{d}"),
            Key::Function(n) => write!(f, "F{n}"),
            Key::Space => f.write_str("Space"),
        }
    }
}

/// A parsed accelerator such as `Control+Command+M`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBinding {
    /// Sorted, without duplicates
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl HotkeyBinding {
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

impl FromStr for HotkeyBinding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ConfigError::EmptyAccelerator);
        }

        let mut modifiers = Vec::new();
        let mut key = None;

        for token in s.split('+').map(str::trim) {
            if let Some(modifier) = Modifier::parse(token) {
                modifiers.push(modifier);
                continue;
            }
            let parsed = Key::parse(token).ok_or_else(|| ConfigError::UnknownKey(token.to_string()))?;
            if key.replace(parsed).is_some() {
                return Err(ConfigError::MultipleKeys(s.to_string()));
            }
        }

        modifiers.sort();
        modifiers.dedup();

        let key = key.ok_or_else(|| ConfigError::MissingKey(s.to_string()))?;
        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accelerator_is_control_command_m() {
        let binding = HotkeyConfig::default().binding().unwrap();
        assert_eq!(binding.modifiers, vec![Modifier::Control, Modifier::Command]);
        assert_eq!(binding.key, Key::Letter('M'));
        assert_eq!(binding.to_string(), "Control+Command+M");
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        let binding: HotkeyBinding = "cmd + ctrl + keym".parse().unwrap();
        assert!(binding.has(Modifier::Control));
        assert!(binding.has(Modifier::Command));
        assert_eq!(binding.key, Key::Letter('M'));

        let binding: HotkeyBinding = "Shift+F9".parse().unwrap();
        assert_eq!(binding.key, Key::Function(9));

        let binding: HotkeyBinding = "Alt+Alt+3".parse().unwrap();
        assert_eq!(binding.modifiers, vec![Modifier::Option]);
        assert_eq!(binding.key, Key::Digit(3));
    }

    #[test]
    fn malformed_accelerators_are_rejected() {
        assert_eq!("".parse::<HotkeyBinding>(), Err(ConfigError::EmptyAccelerator));
        assert!(matches!(
            "Control+Command".parse::<HotkeyBinding>(),
            Err(ConfigError::MissingKey(_))
        ));
        assert!(matches!(
            "Control+M+N".parse::<HotkeyBinding>(),
            Err(ConfigError::MultipleKeys(_))
        ));
        assert!(matches!(
            "Control+F13".parse::<HotkeyBinding>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn signature_packs_four_bytes() {
        let config = HotkeyConfig::default();
        assert_eq!(config.signature_code().unwrap(), u32::from_be_bytes(*b"JPOC"));

        let config = HotkeyConfig {
            signature: "JP".to_string(),
            ..HotkeyConfig::default()
        };
        assert!(config.signature_code().is_err());
    }

    #[test]
    fn identity_names_signature_and_id() {
        let config = HotkeyConfig::default();
        assert_eq!(config.identity().unwrap(), "'JPOC' (0x4a504f43) id 1");

        let config = HotkeyConfig {
            signature: "TOOLONG".to_string(),
            ..HotkeyConfig::default()
        };
        assert_eq!(
            config.identity(),
            Err(ConfigError::InvalidSignature("TOOLONG".to_string()))
        );
    }
}
