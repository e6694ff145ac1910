use std::path::Path;
use tray_icon::Icon;

const DEFAULT_SIZE: u32 = 32;
/// Native menus want small-icon sized bitmaps.
const MENU_ICON_SIZE: u32 = 16;

/// Generated stand-in used when an icon file is missing or unreadable:
/// a filled disc on a transparent background.
pub fn default_icon() -> Icon {
    let size = DEFAULT_SIZE as i32;
    let center = size / 2;
    let radius = size / 2 - 2;

    let mut data = vec![0u8; (DEFAULT_SIZE * DEFAULT_SIZE * 4) as usize];
    for y in 0..size {
        for x in 0..size {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy <= radius * radius {
                let idx = ((y as u32 * DEFAULT_SIZE + x as u32) * 4) as usize;
                data[idx] = 30;
                data[idx + 1] = 90;
                data[idx + 2] = 160;
                data[idx + 3] = 255;
            }
        }
    }
    Icon::from_rgba(data, DEFAULT_SIZE, DEFAULT_SIZE).unwrap()
}

/// Load a tray icon from disk. Missing or undecodable files degrade to
/// the default icon with a warning, never an error.
pub fn load_tray_icon(path: Option<&Path>) -> Icon {
    let Some(path) = path else {
        return default_icon();
    };

    if !path.is_file() {
        log::warn!("Can't find icon file {:?} - using default", path);
        return default_icon();
    }

    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("Can't decode icon file {:?}: {} - using default", path, e);
            return default_icon();
        }
    };

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    match Icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => icon,
        Err(e) => {
            log::warn!("Invalid icon data in {:?}: {} - using default", path, e);
            default_icon()
        }
    }
}

/// Convert an icon file into the small bitmap a native menu item wants.
/// Returns None (icon-less item) when the file can't be used.
pub fn load_menu_icon(path: &Path) -> Option<tray_icon::menu::Icon> {
    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("Can't load menu icon {:?}: {}", path, e);
            return None;
        }
    };

    let resized = image
        .resize_exact(
            MENU_ICON_SIZE,
            MENU_ICON_SIZE,
            image::imageops::FilterType::Triangle,
        )
        .to_rgba8();

    match tray_icon::menu::Icon::from_rgba(resized.into_raw(), MENU_ICON_SIZE, MENU_ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Invalid menu icon data in {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_icon_builds() {
        let _ = default_icon();
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let _ = load_tray_icon(Some(Path::new("/no/such/icon.ico")));
        let _ = load_tray_icon(None);
    }

    #[test]
    fn garbage_file_falls_back_without_panicking() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.ico");
        std::fs::write(&path, b"not an icon").unwrap();

        let _ = load_tray_icon(Some(&path));
        assert!(load_menu_icon(&path).is_none());
    }
}
