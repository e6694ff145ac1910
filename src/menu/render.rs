use super::MenuEntry;
use crate::tray::icon::load_menu_icon;
use anyhow::Result;
use tray_icon::menu::{IconMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};

/// Render assigned entries into a native popup menu. Items are appended
/// in authoring order; nested entries become attached submenus.
pub fn render_menu(entries: &[MenuEntry]) -> Result<Menu> {
    let menu = Menu::new();
    for entry in entries {
        append_entry(&menu, entry)?;
    }
    Ok(menu)
}

/// Render both menus into a single context menu separated by a native
/// separator, for platforms whose tray exposes only one menu.
pub fn render_combined(primary: &[MenuEntry], secondary: &[MenuEntry]) -> Result<Menu> {
    let menu = Menu::new();
    for entry in primary {
        append_entry(&menu, entry)?;
    }
    menu.append(&PredefinedMenuItem::separator())?;
    for entry in secondary {
        append_entry(&menu, entry)?;
    }
    Ok(menu)
}

/// Common surface of `Menu` and `Submenu` so one recursion serves both
/// the top level and nested levels.
trait AppendTarget {
    fn add(&self, item: &dyn IsMenuItem) -> Result<()>;
}

impl AppendTarget for Menu {
    fn add(&self, item: &dyn IsMenuItem) -> Result<()> {
        self.append(item)?;
        Ok(())
    }
}

impl AppendTarget for Submenu {
    fn add(&self, item: &dyn IsMenuItem) -> Result<()> {
        self.append(item)?;
        Ok(())
    }
}

fn append_entry(target: &impl AppendTarget, entry: &MenuEntry) -> Result<()> {
    match entry {
        MenuEntry::Leaf {
            id, label, icon, ..
        } => match icon.as_deref().and_then(load_menu_icon) {
            Some(bitmap) => {
                target.add(&IconMenuItem::with_id(
                    id.to_string(),
                    label,
                    true,
                    Some(bitmap),
                    None,
                ))?;
            }
            None => {
                target.add(&MenuItem::with_id(id.to_string(), label, true, None))?;
            }
        },
        MenuEntry::Submenu {
            id, label, children, ..
        } => {
            let submenu = Submenu::with_id(id.to_string(), label, true);
            for child in children {
                append_entry(&submenu, child)?;
            }
            target.add(&submenu)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::builder::build_menus;
    use crate::menu::MenuOption;
    use tray_icon::menu::MenuItemKind;

    fn nested_stations() -> Vec<MenuOption> {
        vec![
            MenuOption::play(
                "Deephouse Radio",
                None,
                "https://deephouseradio.radioca.st/;",
            ),
            MenuOption::submenu(
                "More",
                None,
                vec![
                    MenuOption::play("KBAQ", None, "https://kbaq.streamguys1.com/kbaq_mp3_128"),
                    MenuOption::play(
                        "KJAZZ",
                        None,
                        "http://1.ice1.firststreaming.com/kkjz_fm.mp3",
                    ),
                ],
            ),
        ]
    }

    #[test]
    fn rendered_menu_matches_assigned_ids_in_order() {
        // Arrange
        let set = build_menus(&nested_stations(), &[]);

        // Act
        let menu = render_menu(&set.primary).unwrap();

        // Assert
        let rendered: Vec<String> = menu.items().iter().map(|i| i.id().0.clone()).collect();
        let assigned: Vec<String> = set.primary.iter().map(|e| e.id().to_string()).collect();
        assert_eq!(rendered, assigned);

        match &menu.items()[1] {
            MenuItemKind::Submenu(submenu) => {
                assert_eq!(submenu.items().len(), 2);
            }
            other => panic!("expected a submenu, got {:?}", other.id()),
        }
    }

    #[test]
    fn combined_menu_separates_both_halves() {
        // Arrange
        let set = build_menus(
            &nested_stations(),
            &[MenuOption::open_link(
                "visit kbaq.org",
                None,
                "https://kbaq.org",
            )],
        );

        // Act
        let menu = render_combined(&set.primary, &set.secondary).unwrap();

        // Assert: primary entries, one separator, secondary entries.
        assert_eq!(
            menu.items().len(),
            set.primary.len() + 1 + set.secondary.len()
        );
    }
}
