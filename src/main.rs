mod cli;
mod config;
mod domain;
mod infra;
mod messages;
mod workflows;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Settings;
use infra::addic7ed::Addic7edClient;
use infra::host::TerminalHost;
use workflows::router::{self, Context};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("addic7ed_subs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load()?;
    debug!("Using config path: {}", config::get_config_path().display());
    if cli.use_filename {
        settings.use_filename = true;
    }

    let provider = Addic7edClient::new(&settings.site_url)?;
    let mut host = TerminalHost::new(cli.now_playing()?);

    let mut ctx = Context::new(&mut host, &provider, &settings);
    router::route(&mut ctx, &cli.params);

    Ok(())
}
