use anyhow::Result;
use radio_tray::config::RadioConfig;
use radio_tray::player::MpvPlayer;
use radio_tray::tray;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting radio-tray...");

    let config = RadioConfig::load_or_default()?;
    log::info!(
        "Loaded {} station(s), {} link(s)",
        config.station_count(),
        config.links.len()
    );

    let player = MpvPlayer::new();
    tray::run(
        config,
        Box::new(player),
        Some(Box::new(|| log::info!("Bye, then."))),
    )
}
