pub mod builder;
pub mod dispatch;
pub mod guard;
pub mod render;

use std::path::PathBuf;

/// First menu id handed out by the builder. Ids below this are left to
/// reserved system commands.
pub const FIRST_ID: u32 = 1023;

/// Author-supplied menu description, immutable once built.
#[derive(Debug, Clone)]
pub struct MenuOption {
    pub label: String,
    pub icon: Option<PathBuf>,
    pub action: MenuAction,
}

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Start streaming the given URL.
    Play { stream_url: String },
    /// Open the given URL in the default browser.
    OpenLink { url: String },
    Stop,
    Quit,
    Submenu(Vec<MenuOption>),
}

impl MenuOption {
    pub fn play(
        label: impl Into<String>,
        icon: Option<PathBuf>,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            icon,
            action: MenuAction::Play {
                stream_url: stream_url.into(),
            },
        }
    }

    pub fn open_link(
        label: impl Into<String>,
        icon: Option<PathBuf>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            icon,
            action: MenuAction::OpenLink { url: url.into() },
        }
    }

    pub fn stop() -> Self {
        Self {
            label: "Stop".to_string(),
            icon: None,
            action: MenuAction::Stop,
        }
    }

    pub fn quit() -> Self {
        Self {
            label: "Quit".to_string(),
            icon: None,
            action: MenuAction::Quit,
        }
    }

    pub fn submenu(
        label: impl Into<String>,
        icon: Option<PathBuf>,
        children: Vec<MenuOption>,
    ) -> Self {
        Self {
            label: label.into(),
            icon,
            action: MenuAction::Submenu(children),
        }
    }
}

/// A menu entry after id assignment. Leaves carry a dispatchable action
/// token; submenus keep their id for nested structure only.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Leaf {
        id: u32,
        label: String,
        icon: Option<PathBuf>,
        action: ActionKind,
    },
    Submenu {
        id: u32,
        label: String,
        icon: Option<PathBuf>,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn id(&self) -> u32 {
        match self {
            MenuEntry::Leaf { id, .. } | MenuEntry::Submenu { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Leaf { label, .. } | MenuEntry::Submenu { label, .. } => label,
        }
    }
}

/// Action token stored in the action table. Payloads (stream and web URLs)
/// live in the media registry, keyed by the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Play,
    OpenLink,
    Stop,
    Quit,
}
