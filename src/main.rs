use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use odb::app::App;
use odb::config::Config;

fn main() -> Result<()> {
    // Logs go to stderr and stay silent unless RUST_LOG is set; stdout
    // belongs to the screen engine.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let mut app = App::new(&config)?;
    app.run()
}
