#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod desktop;

use super::TrayApp;
use anyhow::Result;

#[cfg(target_os = "linux")]
pub fn run(app: TrayApp) -> Result<()> {
    linux::run(app)
}

#[cfg(not(target_os = "linux"))]
pub fn run(app: TrayApp) -> Result<()> {
    desktop::run(app)
}
