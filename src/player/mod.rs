pub mod mpv;

pub use mpv::MpvPlayer;

use anyhow::Result;

/// Playback engine seam. One engine instance lives for the process
/// lifetime; every call originates from the serialized tray event loop,
/// so implementations need no internal locking.
pub trait Player: Send {
    /// Replace the current source without starting playback.
    fn set_source(&mut self, url: &str);

    /// Begin playback of the current source. Returns once the stream has
    /// been handed to the engine, not when it ends.
    fn play(&mut self) -> Result<()>;

    fn stop(&mut self) -> Result<()>;

    fn is_playing(&self) -> bool;

    fn current_source(&self) -> Option<&str>;
}
