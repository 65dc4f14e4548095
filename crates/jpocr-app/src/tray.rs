use anyhow::{Context, Result};
use jpocr_config::HotkeyBinding;
use tray_icon::menu::accelerator::Accelerator;
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use crate::icon::camera_icon_rgba;
use crate::routing::{MENU_CAPTURE, MENU_QUIT};

const ICON_SIZE: u32 = 32;
const QUIT_ACCELERATOR: &str = "Command+Q";

/// The menu-bar entry. Dropping it removes the icon.
pub struct StatusItem {
    _tray: TrayIcon,
}

impl StatusItem {
    /// Must run on the main thread once the event loop is running
    pub fn build(binding: Option<&HotkeyBinding>) -> Result<Self> {
        let accelerator = binding.and_then(|binding| accelerator(&binding.to_string()));

        let capture = MenuItem::with_id(MENU_CAPTURE, "Capture", true, accelerator);
        let quit = MenuItem::with_id(MENU_QUIT, "Quit", true, accelerator(QUIT_ACCELERATOR));

        let menu = Menu::new();
        menu.append_items(&[&capture, &PredefinedMenuItem::separator(), &quit])
            .context("Failed to build status menu")?;

        let icon = Icon::from_rgba(camera_icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE)
            .context("Failed to build status icon")?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .with_icon_as_template(true)
            .with_tooltip("Capture")
            .build()
            .context("Failed to create status item")?;

        Ok(Self { _tray: tray })
    }
}

fn accelerator(shortcut: &str) -> Option<Accelerator> {
    shortcut
        .parse::<Accelerator>()
        .inspect_err(|e| tracing::debug!("No menu accelerator for {shortcut}: {e}"))
        .ok()
}
