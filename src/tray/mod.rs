pub mod icon;
pub mod platform;

use crate::config::RadioConfig;
use crate::menu::builder::{self, MenuSet};
use crate::menu::dispatch::{Dispatcher, SystemOpener};
use crate::menu::MenuEntry;
use crate::player::Player;
use anyhow::Result;

/// Caller-supplied callback fired once when the user quits.
pub type QuitHook = Box<dyn FnOnce() + Send>;

/// Everything the platform event loop needs to own the tray: the assigned
/// menus, the dispatcher, and the quit hook.
pub struct TrayApp {
    pub config: RadioConfig,
    pub primary: Vec<MenuEntry>,
    pub secondary: Vec<MenuEntry>,
    pub dispatcher: Dispatcher,
    on_quit: Option<QuitHook>,
}

impl TrayApp {
    pub fn new(config: RadioConfig, player: Box<dyn Player>, on_quit: Option<QuitHook>) -> Self {
        let MenuSet {
            primary,
            secondary,
            table,
        } = builder::build_menus(&config.station_menu(), &config.link_menu());

        let dispatcher = Dispatcher::new(table, player, Box::new(SystemOpener));

        Self {
            config,
            primary,
            secondary,
            dispatcher,
            on_quit,
        }
    }

    /// Invoke the quit hook; later calls are no-ops.
    pub fn fire_quit_hook(&mut self) {
        if let Some(hook) = self.on_quit.take() {
            hook();
        }
    }

    /// Teardown for quit paths that never unwind back to main. Stops the
    /// engine so no child process outlives the tray, then fires the hook.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.dispatcher.stop_playback() {
            log::warn!("Failed to stop playback on shutdown: {e:#}");
        }
        self.fire_quit_hook();
    }
}

/// Build the tray and block until the user quits.
pub fn run(config: RadioConfig, player: Box<dyn Player>, on_quit: Option<QuitHook>) -> Result<()> {
    let app = TrayApp::new(config, player, on_quit);
    platform::run(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NullPlayer;

    impl Player for NullPlayer {
        fn set_source(&mut self, _url: &str) {}
        fn play(&mut self) -> Result<()> {
            Ok(())
        }
        fn stop(&mut self) -> Result<()> {
            Ok(())
        }
        fn is_playing(&self) -> bool {
            false
        }
        fn current_source(&self) -> Option<&str> {
            None
        }
    }

    struct SharedPlayer {
        playing: Arc<std::sync::Mutex<bool>>,
        stop_calls: Arc<AtomicUsize>,
    }

    impl Player for SharedPlayer {
        fn set_source(&mut self, _url: &str) {}
        fn play(&mut self) -> Result<()> {
            *self.playing.lock().unwrap() = true;
            Ok(())
        }
        fn stop(&mut self) -> Result<()> {
            self.stop_calls.fetch_add(1, Ordering::SeqCst);
            *self.playing.lock().unwrap() = false;
            Ok(())
        }
        fn is_playing(&self) -> bool {
            *self.playing.lock().unwrap()
        }
        fn current_source(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn shutdown_stops_a_live_engine_and_fires_hook_once() {
        // Arrange
        let playing = Arc::new(std::sync::Mutex::new(true));
        let stop_calls = Arc::new(AtomicUsize::new(0));
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let mut app = TrayApp::new(
            RadioConfig::builtin(),
            Box::new(SharedPlayer {
                playing: playing.clone(),
                stop_calls: stop_calls.clone(),
            }),
            Some(Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );

        // Act
        app.shutdown();
        app.shutdown();

        // Assert
        assert!(!*playing.lock().unwrap());
        assert!(stop_calls.load(Ordering::SeqCst) >= 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn quit_hook_fires_exactly_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let mut app = TrayApp::new(
            RadioConfig::builtin(),
            Box::new(NullPlayer),
            Some(Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );

        app.fire_quit_hook();
        app.fire_quit_hook();
        app.fire_quit_hook();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn app_assigns_menus_from_config() {
        let mut app = TrayApp::new(RadioConfig::builtin(), Box::new(NullPlayer), None);

        assert_eq!(app.primary.last().unwrap().label(), "Stop");
        assert_eq!(app.secondary.last().unwrap().label(), "Quit");

        // No hook installed; must not panic.
        app.fire_quit_hook();
    }
}
