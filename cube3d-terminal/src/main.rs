/// cube3d Terminal Demo - Rotating Wireframe Cube
/// 
/// Controls:
///   - Mouse wheel: Field of view
///   - Left/Right arrows: View distance
///   - + / -: Rotation speed
///   - Q/ESC/Ctrl-C: Quit

use anyhow::Context;
use cube3d_core::Config;
use cube3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().unwrap_or_else(|err| {
        log::warn!("Failed to load config: {err}, falling back to default");
        Config::default()
    });
    log::info!("Starting with {:?}", config);

    let mut app = TerminalApp::new(&config).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    std::process::exit(0);
}
