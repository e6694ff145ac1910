use crate::menu::MenuOption;
use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in station list, used when no config file exists.
const BUILTIN_STATIONS: &str = include_str!("builtin_stations.toml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RadioConfig {
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
    /// Tray icon shown while nothing is playing. None falls back to the
    /// generated default icon.
    #[serde(default)]
    pub idle_icon: Option<PathBuf>,
    #[serde(default)]
    pub stations: Vec<StationEntry>,
    #[serde(default)]
    pub links: Vec<Link>,
}

fn default_tooltip() -> String {
    "radio-tray".to_string()
}

/// A station or a named group of stations (rendered as a submenu).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StationEntry {
    Group {
        label: String,
        #[serde(default)]
        icon: Option<PathBuf>,
        stations: Vec<Station>,
    },
    Station(Station),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Station {
    pub label: String,
    pub stream_url: String,
    /// "Now playing" tray image and menu bitmap for this station.
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

impl RadioConfig {
    /// Read `stations.toml` from the config directory, or fall back to
    /// the built-in station list when none exists.
    pub fn load_or_default() -> Result<Self> {
        let path = paths::stations_path()?;
        if !path.exists() {
            log::info!("No station config at {:?}, using built-in stations", path);
            return Ok(Self::builtin());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read station config {:?}", path))?;
        let mut config: RadioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse station config {:?}", path))?;

        if config.stations.is_empty() {
            anyhow::bail!("Station config {:?} lists no stations", path);
        }

        if let Some(base) = path.parent() {
            config.anchor_icons(base);
        }
        Ok(config)
    }

    pub fn builtin() -> Self {
        toml::from_str(BUILTIN_STATIONS).expect("built-in station list parses")
    }

    /// Resolve relative icon paths against the config file's directory.
    fn anchor_icons(&mut self, base: &Path) {
        anchor(base, &mut self.idle_icon);
        for entry in &mut self.stations {
            match entry {
                StationEntry::Station(station) => anchor(base, &mut station.icon),
                StationEntry::Group { icon, stations, .. } => {
                    anchor(base, icon);
                    for station in stations {
                        anchor(base, &mut station.icon);
                    }
                }
            }
        }
        for link in &mut self.links {
            anchor(base, &mut link.icon);
        }
    }

    pub fn station_count(&self) -> usize {
        self.stations
            .iter()
            .map(|entry| match entry {
                StationEntry::Station(_) => 1,
                StationEntry::Group { stations, .. } => stations.len(),
            })
            .sum()
    }

    /// Primary (left-click) menu description.
    pub fn station_menu(&self) -> Vec<MenuOption> {
        self.stations
            .iter()
            .map(|entry| match entry {
                StationEntry::Station(station) => station_option(station),
                StationEntry::Group {
                    label,
                    icon,
                    stations,
                } => MenuOption::submenu(
                    label,
                    icon.clone(),
                    stations.iter().map(station_option).collect(),
                ),
            })
            .collect()
    }

    /// Secondary (right-click) menu description.
    pub fn link_menu(&self) -> Vec<MenuOption> {
        self.links
            .iter()
            .map(|link| MenuOption::open_link(&link.label, link.icon.clone(), &link.url))
            .collect()
    }
}

fn station_option(station: &Station) -> MenuOption {
    MenuOption::play(&station.label, station.icon.clone(), &station.stream_url)
}

fn anchor(base: &Path, icon: &mut Option<PathBuf>) {
    if let Some(path) = icon {
        if path.is_relative() {
            *path = base.join(&path);
        }
    }
}
