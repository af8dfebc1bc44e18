//! Reel Player shell entrypoint

use clap::Parser;
use reel_cli::{Shell, ShellConfig};
use reel_library::VideoLibrary;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Interactive video catalog and playback shell", long_about = None)]
struct Cli {
    /// Catalog file to load instead of the built-in sample catalog
    #[arg(short, long, env = "REEL_CATALOG_PATH")]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_cli=info,reel_library=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ShellConfig::load()?;

    let library = match cli.catalog.or(config.catalog.path) {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            VideoLibrary::load(&path)?
        }
        None => {
            tracing::debug!("No catalog configured, using the built-in sample");
            VideoLibrary::from_videos(reel_cli::sample_catalog()?)
        }
    };
    tracing::info!("Catalog ready with {} videos", library.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::with_prompt(
        library,
        config.display.prompt,
        stdin.lock(),
        stdout.lock(),
    );
    shell.run()?;

    Ok(())
}
