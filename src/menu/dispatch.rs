use super::builder::ActionTable;
use super::ActionKind;
use crate::player::Player;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What the event loop should do after an action has executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep pumping events.
    Continue,
    /// Swap the tray icon to this station image; None reverts to the
    /// idle image.
    RefreshIcon(Option<PathBuf>),
    /// Fire the quit hook, remove the tray icon, and exit.
    Quit,
}

/// Seam for opening link payloads, so tests can observe browser calls.
pub trait LinkOpener: Send {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens links through the platform default browser.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        crate::paths::open_url(url)
    }
}

/// Resolves a selected menu id back to its action and executes it. All
/// calls arrive on the single tray event loop, strictly sequentially.
pub struct Dispatcher {
    table: ActionTable,
    player: Box<dyn Player>,
    opener: Box<dyn LinkOpener>,
}

impl Dispatcher {
    pub fn new(
        table: ActionTable,
        player: Box<dyn Player>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            table,
            player,
            opener,
        }
    }

    /// Route a raw menu event. Menu item ids are the numeric entry ids,
    /// stringified at render time.
    pub fn dispatch_event(&mut self, event_id: &str) -> Result<Outcome> {
        let Ok(id) = event_id.parse::<u32>() else {
            log::warn!("Ignoring non-numeric menu event: {}", event_id);
            return Ok(Outcome::Continue);
        };
        self.dispatch(id)
    }

    pub fn dispatch(&mut self, id: u32) -> Result<Outcome> {
        let Some(action) = self.table.action(id) else {
            log::warn!("No action registered for menu id {}", id);
            return Ok(Outcome::Continue);
        };

        match action {
            ActionKind::Play => self.play(id),
            ActionKind::OpenLink => self.open_link(id),
            ActionKind::Stop => {
                log::info!("Stop requested");
                self.player.stop()?;
                Ok(Outcome::RefreshIcon(None))
            }
            ActionKind::Quit => {
                log::info!("Quit requested");
                Ok(Outcome::Quit)
            }
        }
    }

    fn play(&mut self, id: u32) -> Result<Outcome> {
        let url = self
            .table
            .medium(id)
            .with_context(|| format!("Play entry {} has no stream URL", id))?
            .to_string();

        self.player.set_source(&url);
        self.player.play()?;

        let icon = self.table.icon(id).map(Into::into);
        Ok(Outcome::RefreshIcon(icon))
    }

    /// Stop the engine outside of menu dispatch, for teardown paths
    /// that never return to the event loop.
    pub fn stop_playback(&mut self) -> Result<()> {
        self.player.stop()
    }

    fn open_link(&mut self, id: u32) -> Result<Outcome> {
        let url = self
            .table
            .medium(id)
            .with_context(|| format!("Link entry {} has no URL", id))?
            .to_string();

        log::info!("Opening {}", url);
        self.opener.open(&url)?;
        Ok(Outcome::Continue)
    }
}
