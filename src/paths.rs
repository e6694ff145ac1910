use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("radio-tray"))
}

pub fn stations_path() -> Result<PathBuf> {
    config_dir().map(|p| p.join("stations.toml"))
}

/// Open a URL in the platform default browser.
pub fn open_url(url: &str) -> Result<()> {
    open::that(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_have_correct_suffixes() {
        let cases: Vec<(Result<PathBuf>, &str)> = vec![
            (config_dir(), "radio-tray"),
            (stations_path(), "radio-tray/stations.toml"),
        ];

        for (result, expected_suffix) in cases {
            let path = result.unwrap();
            assert!(
                path.ends_with(expected_suffix),
                "path {:?} should end with {}",
                path,
                expected_suffix
            );
        }
    }
}
