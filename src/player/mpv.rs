use super::Player;
use anyhow::{Context, Result};
use std::process::{Child, Command, Stdio};

/// Streams audio through an external mpv process, one child per station.
/// Starting a new stream kills the previous child first.
pub struct MpvPlayer {
    binary: String,
    source: Option<String>,
    child: Option<Child>,
}

impl MpvPlayer {
    pub fn new() -> Self {
        Self::with_binary("mpv")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            source: None,
            child: None,
        }
    }

    fn kill_child(&mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            log::info!("Stopping playback (pid {})", child.id());
            child.kill().context("Failed to kill player process")?;
            child.wait().context("Failed to reap player process")?;
        }
        Ok(())
    }
}

impl Default for MpvPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for MpvPlayer {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
    }

    fn play(&mut self) -> Result<()> {
        let url = self.source.clone().context("No stream source set")?;
        self.kill_child()?;

        log::info!("Starting stream: {}", url);
        let child = Command::new(&self.binary)
            .arg("--no-video")
            .arg("--really-quiet")
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch player binary '{}'", self.binary))?;

        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.kill_child()
    }

    fn is_playing(&self) -> bool {
        self.child.is_some()
    }

    fn current_source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Drop for MpvPlayer {
    fn drop(&mut self) {
        let _ = self.kill_child();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_without_source_is_an_error() {
        let mut player = MpvPlayer::with_binary("definitely-not-a-real-binary");
        assert!(player.play().is_err());
        assert!(!player.is_playing());
    }

    #[test]
    fn missing_binary_propagates_spawn_error() {
        let mut player = MpvPlayer::with_binary("definitely-not-a-real-binary");
        player.set_source("http://example.com/stream");
        assert!(player.play().is_err());
        assert!(!player.is_playing());
    }

    #[test]
    fn source_round_trips() {
        let mut player = MpvPlayer::new();
        assert_eq!(player.current_source(), None);

        player.set_source("https://kbaq.streamguys1.com/kbaq_mp3_128");
        assert_eq!(
            player.current_source(),
            Some("https://kbaq.streamguys1.com/kbaq_mp3_128")
        );
    }

    #[test]
    fn stop_without_child_is_a_no_op() {
        let mut player = MpvPlayer::new();
        assert!(player.stop().is_ok());
        assert!(!player.is_playing());
    }
}
