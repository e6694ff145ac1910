use crate::menu::dispatch::Outcome;
use crate::menu::render;
use crate::tray::{icon, TrayApp};
use anyhow::Result;
use gtk::glib;
use std::sync::mpsc;
use std::time::Duration;
use tray_icon::menu::MenuEvent;
use tray_icon::TrayIconBuilder;

/// Spawn a GTK thread that owns the tray for the process lifetime; the
/// calling thread blocks until Quit. libappindicator exposes a single
/// context menu and no per-button click events, so the station and link
/// menus render combined.
pub fn run(app: TrayApp) -> Result<()> {
    let (quit_tx, quit_rx) = mpsc::channel::<()>();

    std::thread::spawn(move || {
        let mut app = app;

        if gtk::init().is_err() {
            log::error!("Failed to initialize GTK");
            let _ = quit_tx.send(());
            return;
        }

        let menu = match render::render_combined(&app.primary, &app.secondary) {
            Ok(menu) => menu,
            Err(e) => {
                log::error!("Failed to build menu: {}", e);
                let _ = quit_tx.send(());
                return;
            }
        };

        let idle_icon = app.config.idle_icon.clone();
        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(&app.config.tooltip)
            .with_icon(icon::load_tray_icon(idle_icon.as_deref()))
            .build();

        let tray_icon = match tray_icon {
            Ok(tray_icon) => tray_icon,
            Err(e) => {
                log::error!("Failed to create tray icon: {}", e);
                let _ = quit_tx.send(());
                return;
            }
        };

        let menu_receiver = MenuEvent::receiver();
        glib::timeout_add_local(Duration::from_millis(100), move || {
            while let Ok(event) = menu_receiver.try_recv() {
                log::debug!("Menu event: {}", event.id.0);

                match app.dispatcher.dispatch_event(&event.id.0) {
                    Ok(Outcome::Continue) => {}
                    Ok(Outcome::RefreshIcon(path)) => {
                        let next = path.as_deref().or(idle_icon.as_deref());
                        if let Err(e) = tray_icon.set_icon(Some(icon::load_tray_icon(next))) {
                            log::warn!("Failed to refresh tray icon: {}", e);
                        }
                    }
                    Ok(Outcome::Quit) => {
                        log::info!("Quitting application");
                        app.shutdown();
                        let _ = tray_icon.set_visible(false);
                        gtk::main_quit();
                        let _ = quit_tx.send(());
                        return glib::ControlFlow::Break;
                    }
                    Err(e) => log::error!("Error handling menu event: {}", e),
                }
            }
            glib::ControlFlow::Continue
        });

        gtk::main();
    });

    quit_rx.recv().ok();
    log::info!("Shutdown signal received, exiting...");
    Ok(())
}
