use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_manager::{config::Config, console};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(
        "Starting Cinema Room Manager ({})",
        config.app.environment
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&config, &mut stdin.lock(), &mut stdout.lock())?;

    info!("Session finished");
    Ok(())
}
