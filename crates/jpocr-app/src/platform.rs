use std::time::Duration;

use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use jpocr_config::Config;
use jpocr_config::hotkey::HotkeyConfig;
use jpocr_core::HotkeySlot;
use jpocr_ocr::GlobalHotkeyBackend;
use jpocr_types::AppEvent;
use kanal::AsyncSender;
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
use tokio::runtime::Runtime;
use tray_icon::menu::MenuEvent;

use crate::controller::AppController;
use crate::routing::{UiCommand, route_hotkey, route_menu};
use crate::tray::StatusItem;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

enum UserEvent {
    Menu(MenuEvent),
    Hotkey(GlobalHotKeyEvent),
}

/// Run the main-thread event loop. Returns only by exiting the process.
pub fn run(runtime: Runtime, controller: AppController, config: &Config) -> ! {
    let mut event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    event_loop.set_activation_policy(ActivationPolicy::Accessory);

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));
    let proxy = event_loop.create_proxy();
    GlobalHotKeyEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Hotkey(event));
    }));

    let binding = match config.hotkey.binding() {
        Ok(binding) => Some(binding),
        Err(e) => {
            tracing::warn!("Invalid hotkey '{}': {e}", config.hotkey.accelerator);
            None
        }
    };
    let hotkey_config = config.hotkey.clone();

    let mut hotkeys = match GlobalHotkeyBackend::new() {
        Ok(backend) => Some(HotkeySlot::new(backend)),
        Err(e) => {
            tracing::warn!("Global hotkey unavailable: {e:#}");
            None
        }
    };

    let tasks = controller.spawn_tasks(runtime.handle());
    let sender = controller.sender();
    let mut runtime = Some(runtime);
    let mut tasks = Some(tasks);
    let mut status_item = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let command = match event {
            Event::NewEvents(StartCause::Init) => {
                match StatusItem::build(binding.as_ref()) {
                    Ok(item) => status_item = Some(item),
                    Err(e) => tracing::error!("{e:#}"),
                }
                if let (Some(slot), Some(binding), true) =
                    (hotkeys.as_mut(), binding.as_ref(), hotkey_config.enabled)
                    && slot.register(binding)
                {
                    log_hotkey_identity(&hotkey_config);
                }
                if !hotkeys.as_ref().is_some_and(HotkeySlot::is_registered) {
                    tracing::info!("No global hotkey, use the Capture menu item");
                }
                tracing::info!("Ready");
                return;
            }
            Event::UserEvent(UserEvent::Menu(event)) => route_menu(event.id.as_ref()),
            Event::UserEvent(UserEvent::Hotkey(event)) => {
                let registered = hotkeys
                    .as_ref()
                    .and_then(|slot| slot.handle())
                    .map(|hotkey| hotkey.id());
                route_hotkey(event.id, event.state == HotKeyState::Pressed, registered)
            }
            _ => return,
        };

        match command {
            UiCommand::Dispatch(event) => dispatch(&sender, event),
            UiCommand::Quit => {
                if let Some(slot) = hotkeys.as_mut() {
                    slot.release();
                }
                drop(status_item.take());
                controller.shutdown();
                if let (Some(runtime), Some(tasks)) = (runtime.take(), tasks.take()) {
                    drain(runtime, tasks);
                }
                tracing::info!("Quit");
                *control_flow = ControlFlow::Exit;
            }
            UiCommand::Ignore => {}
        }
    })
}

fn log_hotkey_identity(config: &HotkeyConfig) {
    match config.identity() {
        Ok(identity) => tracing::info!("Hotkey filed under signature {identity}"),
        Err(e) => tracing::warn!("{e}"),
    }
}

fn dispatch(sender: &AsyncSender<AppEvent>, event: AppEvent) {
    match sender.try_send(event) {
        Ok(true) => {}
        Ok(false) => tracing::warn!("Event queue full, dropping trigger"),
        Err(e) => tracing::error!("Event loop unavailable: {e}"),
    }
}

fn drain(runtime: Runtime, mut tasks: tokio::task::JoinSet<anyhow::Result<()>>) {
    runtime.block_on(async {
        let join_all = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("Task exited with error: {e:#}"),
                    Err(e) => tracing::error!("Task panicked: {e}"),
                }
            }
        };
        if tokio::time::timeout(SHUTDOWN_GRACE, join_all).await.is_err() {
            tracing::warn!("Tasks still running at shutdown");
        }
    });
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}
