use env_logger::Env;
use gravity::{AppConfig, GravityApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    log::info!(
        "Starting {} at {}x{}, {} fps target",
        config.window.title,
        config.window.width,
        config.window.height,
        config.target_fps
    );

    GravityApp::new(config)?.run()?;
    Ok(())
}
