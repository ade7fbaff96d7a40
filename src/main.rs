use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wrapsnake::game::Game;

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the alternate screen;
    // enable with RUST_LOG (off by default).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Game::new()?.run()
}
