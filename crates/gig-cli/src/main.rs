use anyhow::Context;
use clap::Parser;
use gig_core::errors::MarketError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", report(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config()?;
    context::warn_unconfigured(&config);

    let flags = cli.global_flags(&config)?;
    let ctx = context::AppContext::init(&flags)
        .await
        .context("failed to initialize gigboard application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// One-line error report; marketplace errors lead with their kind tag.
fn report(error: &anyhow::Error) -> String {
    match error.downcast_ref::<MarketError>() {
        Some(market) => format!("gig error ({}): {}", market.kind(), market.message()),
        None => format!("gig error: {error:#}"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GIGBOARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
