//! PIPS desktop entry point.
//!
//! Opens the dice roller window: pick how many dice and how many sides from
//! the two selectors at the top, click "Roll Dice" to roll, and "Quit" or the
//! window close button to exit.

use anyhow::Result;

use pips_app::config::RollerConfig;
use pips_app::roller::Roller;
use pips_backend_sdl::SdlBackend;
use pips_ui::Window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RollerConfig::default();
    config.validate()?;
    log::info!(
        "Starting PIPS ({}x{})",
        config.window_width,
        config.window_height,
    );

    let backend = SdlBackend::new(
        &config.window_title,
        config.window_width,
        config.window_height,
    )?;
    let window = Window::new(backend, config.coord_map()?, config.theme.background)?;
    let mut roller = Roller::new(window, &config)?;

    roller.run(&mut rand::thread_rng())?;
    log::info!("last total: {}", roller.total());

    let mut window = roller.into_window();
    window.close()?;
    log::info!("PIPS shut down");
    Ok(())
}
