//! `halftone` binary: render an image as a line-screen halftone.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use halftone_lib::config::{Args, HalftoneConfig};
use halftone_lib::run::run;

fn main() -> anyhow::Result<()> {
    // .env first so HALFTONE_* and RUST_LOG from it are visible below.
    let dotenv = halftone_lib::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Some(path) = dotenv {
        tracing::debug!("Loaded .env from: {path}");
    }

    let config = HalftoneConfig::from_args(Args::parse())?;
    halftone_lib::init_thread_pool(config.jobs)?;

    let summary = run(&config)?;
    tracing::info!(
        width = summary.size.width,
        height = summary.size.height,
        coverage = summary.coverage,
        "Done"
    );
    Ok(())
}
