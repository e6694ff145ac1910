use super::{ActionKind, MenuAction, MenuEntry, MenuOption, FIRST_ID};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Flat id-keyed lookup tables, built once at startup and read-only
/// afterwards. Submenu ids are never registered here.
#[derive(Debug, Default)]
pub struct ActionTable {
    actions: HashMap<u32, ActionKind>,
    media: HashMap<u32, String>,
    icons: HashMap<u32, PathBuf>,
}

impl ActionTable {
    pub fn action(&self, id: u32) -> Option<ActionKind> {
        self.actions.get(&id).copied()
    }

    /// Payload URL for a leaf: the stream URL of a station or the web URL
    /// of a link. Absent for Stop/Quit.
    pub fn medium(&self, id: u32) -> Option<&str> {
        self.media.get(&id).map(String::as_str)
    }

    pub fn icon(&self, id: u32) -> Option<&Path> {
        self.icons.get(&id).map(PathBuf::as_path)
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.actions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Both popup menus plus the shared action table.
#[derive(Debug)]
pub struct MenuSet {
    pub primary: Vec<MenuEntry>,
    pub secondary: Vec<MenuEntry>,
    pub table: ActionTable,
}

/// Assigns ids to menu descriptions. The counter and registries are
/// explicit builder state threaded through the recursion.
pub struct MenuBuilder {
    next_id: u32,
    table: ActionTable,
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::with_first_id(FIRST_ID)
    }

    pub fn with_first_id(first_id: u32) -> Self {
        Self {
            next_id: first_id,
            table: ActionTable::default(),
        }
    }

    /// Depth-first traversal; every visited entry, leaf or submenu,
    /// consumes exactly one id.
    pub fn assign(&mut self, options: &[MenuOption]) -> Vec<MenuEntry> {
        options.iter().map(|opt| self.assign_one(opt)).collect()
    }

    fn assign_one(&mut self, option: &MenuOption) -> MenuEntry {
        let id = self.next_id;
        self.next_id += 1;

        match &option.action {
            MenuAction::Submenu(children) => MenuEntry::Submenu {
                id,
                label: option.label.clone(),
                icon: option.icon.clone(),
                children: self.assign(children),
            },
            leaf => {
                let kind = match leaf {
                    MenuAction::Play { stream_url } => {
                        self.table.media.insert(id, stream_url.clone());
                        ActionKind::Play
                    }
                    MenuAction::OpenLink { url } => {
                        self.table.media.insert(id, url.clone());
                        ActionKind::OpenLink
                    }
                    MenuAction::Stop => ActionKind::Stop,
                    MenuAction::Quit => ActionKind::Quit,
                    MenuAction::Submenu(_) => unreachable!(),
                };
                if let Some(icon) = &option.icon {
                    self.table.icons.insert(id, icon.clone());
                }
                self.table.actions.insert(id, kind);
                MenuEntry::Leaf {
                    id,
                    label: option.label.clone(),
                    icon: option.icon.clone(),
                    action: kind,
                }
            }
        }
    }

    pub fn finish(self) -> ActionTable {
        self.table
    }
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the station and link menus. The primary list gets an implicit
/// trailing Stop entry, the secondary an implicit Quit; ids are assigned
/// from one counter so they are unique across both menus.
pub fn build_menus(stations: &[MenuOption], links: &[MenuOption]) -> MenuSet {
    let mut stations = stations.to_vec();
    stations.push(MenuOption::stop());

    let mut links = links.to_vec();
    links.push(MenuOption::quit());

    let mut builder = MenuBuilder::new();
    let primary = builder.assign(&stations);
    let secondary = builder.assign(&links);

    MenuSet {
        primary,
        secondary,
        table: builder.finish(),
    }
}
