//! Bounded Cache - line-oriented demo driver
//!
//! Reads `put`/`get` commands from stdin and applies them to a cache built
//! from environment configuration, printing `DISCARD: <key>` on eviction.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::command::Command;
use bounded_cache::{Cache, Config};

/// Main entry point for the demo driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache with a listener that prints discards
/// 4. Execute stdin commands until `quit`, end of input or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let mut cache: Cache<String, String> = config
        .build_cache()
        .context("failed to create cache from configuration")?;
    cache.set_eviction_listener(|event| println!("{event}"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&mut cache, command)?,
            Ok(None) => {}
            Err(err) => warn!("{}", err),
        }
    }

    info!(stats = ?cache.stats(), "Shutdown complete");
    Ok(())
}

/// Applies one command to the cache and prints its result to stdout.
fn execute(cache: &mut Cache<String, String>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Put { key, value } => cache.put(key, value),
        Command::Get { key } => match cache.get(key.as_str()) {
            Some(value) => println!("{value}"),
            None => println!("None"),
        },
        Command::Stats => println!("{}", serde_json::to_string(&cache.stats())?),
        Command::Print => {
            let mut entries: Vec<_> = cache.iter().collect();
            entries.sort();
            println!("Current cache:");
            for (key, value) in entries {
                println!("{key}: {value}");
            }
        }
        Command::Quit => {}
    }
    Ok(())
}
