//! Pulsegen daemon - periodic synthetic fitness telemetry
//!
//! Connects to Postgres (retrying until the database accepts a connection),
//! then writes one fabricated fitness reading per interval, forever. The
//! process only exits on a termination signal or a steady-state database
//! failure; an external supervisor is expected to restart it in the latter
//! case.

use anyhow::Result;
use clap::Parser;
use pulsegen::{logging, EventSink, Generator, GeneratorConfig, PULSEGEN_VERSION};
use tracing::{error, info};

/// Pulsegen - synthetic physiological telemetry generator
#[derive(Parser)]
#[command(name = "pulsegen")]
#[command(version = PULSEGEN_VERSION)]
#[command(about = "Generate synthetic fitness events into PostgreSQL", long_about = None)]
struct Cli {
    /// Override the tick interval from GEN_INTERVAL_SECONDS
    #[arg(long)]
    interval_seconds: Option<u64>,

    /// Enable verbose logging (overridden by RUST_LOG)
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(if cli.verbose { "debug" } else { "info" });

    let mut config = GeneratorConfig::from_env()?;
    if let Some(interval) = cli.interval_seconds {
        config.interval_seconds = interval;
    }

    info!(
        version = PULSEGEN_VERSION,
        interval_seconds = config.interval_seconds,
        "starting pulsegen"
    );

    let sink = EventSink::connect_with_retry(&config).await;
    sink.ensure_schema().await?;

    let generator = Generator::new(&config);
    let mut rng = rand::thread_rng();

    let outcome = tokio::select! {
        result = generator.run(&sink, &mut rng) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("termination signal received, shutting down");
            Ok(())
        }
    };

    sink.close().await;

    if let Err(e) = &outcome {
        error!(error = %e, "generator stopped on fatal error");
    }
    outcome?;
    Ok(())
}
