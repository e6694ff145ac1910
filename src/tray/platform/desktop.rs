use crate::menu::dispatch::Outcome;
use crate::menu::guard::ClickGuard;
use crate::menu::render;
use crate::tray::{icon, TrayApp};
use anyhow::Result;
use std::time::{Duration, Instant};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::menu::MenuEvent;
use tray_icon::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

/// Run the tray on the calling thread (owns the native message pump).
/// Left click shows the station menu, right click the link menu; the
/// menu is swapped in on button-down, before the OS displays it on
/// button-up.
pub fn run(mut app: TrayApp) -> Result<()> {
    let event_loop = EventLoopBuilder::new().build();

    let primary = render::render_menu(&app.primary)?;
    let secondary = render::render_menu(&app.secondary)?;

    let idle_icon = app.config.idle_icon.clone();
    let mut tray = TrayIconBuilder::new()
        .with_menu(Box::new(primary.clone()))
        .with_tooltip(&app.config.tooltip)
        .with_icon(icon::load_tray_icon(idle_icon.as_deref()))
        .with_show_menu_on_left_click(true)
        .build()?;

    let menu_channel = MenuEvent::receiver();
    let tray_channel = TrayIconEvent::receiver();
    let mut guard = ClickGuard::default();

    event_loop.run(move |_event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(100));

        while let Ok(event) = tray_channel.try_recv() {
            match event {
                TrayIconEvent::Click {
                    button,
                    button_state: MouseButtonState::Down,
                    ..
                } => {
                    if guard.try_open() {
                        let menu = match button {
                            MouseButton::Right => secondary.clone(),
                            _ => primary.clone(),
                        };
                        tray.set_menu(Some(Box::new(menu)));
                    }
                }
                TrayIconEvent::Click {
                    button_state: MouseButtonState::Up,
                    ..
                } => guard.close(),
                _ => {}
            }
        }

        while let Ok(event) = menu_channel.try_recv() {
            log::debug!("Menu event: {}", event.id.0);

            match app.dispatcher.dispatch_event(&event.id.0) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::RefreshIcon(path)) => {
                    let next = path.as_deref().or(idle_icon.as_deref());
                    if let Err(e) = tray.set_icon(Some(icon::load_tray_icon(next))) {
                        log::warn!("Failed to refresh tray icon: {}", e);
                    }
                }
                Ok(Outcome::Quit) => {
                    log::info!("Quitting application");
                    // The tao loop exits the process without unwinding, so
                    // nothing in the closure is dropped. Stop the engine here
                    // or the playback child outlives us.
                    app.shutdown();
                    let _ = tray.set_visible(false);
                    *control_flow = ControlFlow::Exit;
                }
                Err(e) => log::error!("Error handling menu event: {}", e),
            }
        }
    })
}
