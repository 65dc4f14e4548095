use jpocr_types::{AppEvent, TriggerSource};

pub const MENU_CAPTURE: &str = "capture";
pub const MENU_QUIT: &str = "quit";

/// What the UI thread should do with an OS event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Dispatch(AppEvent),
    Quit,
    Ignore,
}

pub fn route_menu(id: &str) -> UiCommand {
    match id {
        MENU_CAPTURE => UiCommand::Dispatch(AppEvent::CaptureRequested(TriggerSource::Menu)),
        MENU_QUIT => UiCommand::Quit,
        _ => UiCommand::Ignore,
    }
}

/// Only key-down of the registered hotkey starts a capture
pub fn route_hotkey(event_id: u32, pressed: bool, registered: Option<u32>) -> UiCommand {
    match registered {
        Some(id) if id == event_id && pressed => {
            UiCommand::Dispatch(AppEvent::CaptureRequested(TriggerSource::Hotkey))
        }
        _ => UiCommand::Ignore,
    }
}
