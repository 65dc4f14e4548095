use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyManager,
    hotkey::{Code, HotKey, Modifiers},
};
use jpocr_config::{HotkeyBinding, Key, Modifier};
use jpocr_core::HotkeyBackend;

/// Registers hotkeys with the OS through `global-hotkey`
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
}

impl GlobalHotkeyBackend {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;
        Ok(Self { manager })
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    type Handle = HotKey;

    fn register(&mut self, binding: &HotkeyBinding) -> Result<HotKey> {
        let hotkey = to_hotkey(binding)?;
        self.manager
            .register(hotkey)
            .context("Failed to register hotkey")?;
        Ok(hotkey)
    }

    fn unregister(&mut self, hotkey: HotKey) -> Result<()> {
        self.manager
            .unregister(hotkey)
            .context("Failed to unregister hotkey")
    }
}

pub fn to_hotkey(binding: &HotkeyBinding) -> Result<HotKey> {
    let modifiers = binding
        .modifiers
        .iter()
        .fold(Modifiers::empty(), |acc, modifier| {
            acc | match modifier {
                Modifier::Control => Modifiers::CONTROL,
                Modifier::Option => Modifiers::ALT,
                Modifier::Shift => Modifiers::SHIFT,
                Modifier::Command => Modifiers::SUPER,
            }
        });

    let code = key_code(binding.key).with_context(|| format!("Unsupported key in {binding}"))?;
    let modifiers = (!modifiers.is_empty()).then_some(modifiers);

    Ok(HotKey::new(modifiers, code))
}

fn key_code(key: Key) -> Option<Code> {
    let code = match key {
        Key::Letter(c) => match c {
            'A' => Code::KeyA,
            'B' => Code::KeyB,
            'C' => Code::KeyC,
            'D' => Code::KeyD,
            'E' => Code::KeyE,
            'F' => Code::KeyF,
            'G' => Code::KeyG,
            'H' => Code::KeyH,
            'I' => Code::KeyI,
            'J' => Code::KeyJ,
            'K' => Code::KeyK,
            'L' => Code::KeyL,
            'M' => Code::KeyM,
            'N' => Code::KeyN,
            'O' => Code::KeyO,
            'P' => Code::KeyP,
            'Q' => Code::KeyQ,
            'R' => Code::KeyR,
            'S' => Code::KeyS,
            'T' => Code::KeyT,
            'U' => Code::KeyU,
            'V' => Code::KeyV,
            'W' => Code::KeyW,
            'X' => Code::KeyX,
            'Y' => Code::KeyY,
            'Z' => Code::KeyZ,
            _ => return None,
        },
        Key::Digit(d) => match d {
            0 => Code::Digit0,
            1 => Code::Digit1,
            2 => Code::Digit2,
            3 => Code::Digit3,
            4 => Code::Digit4,
            5 => Code::Digit5,
            6 => Code::Digit6,
            7 => Code::Digit7,
            8 => Code::Digit8,
            9 => Code::Digit9,
            _ => return None,
        },
        Key::Function(n) => match n {
            1 => Code::F1,
            2 => Code::F2,
            3 => Code::F3,
            4 => Code::F4,
            5 => Code::F5,
            6 => Code::F6,
            7 => Code::F7,
            8 => Code::F8,
            9 => Code::F9,
            10 => Code::F10,
            11 => Code::F11,
            12 => Code::F12,
            _ => return None,
        },
        Key::Space => Code::Space,
    };
    Some(code)
}
