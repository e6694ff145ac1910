pub mod config;
pub mod menu;
pub mod paths;
pub mod player;
pub mod tray;
