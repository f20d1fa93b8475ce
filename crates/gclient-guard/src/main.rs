mod cli;
mod settings;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use username_filter::{ConfigStore, UsernameFilter};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // 1. Parse CLI args.
    let cli = Cli::parse();

    // 2. Init tracing.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // 3. Resolve the configuration store.
    let store = match cli.config_dir {
        Some(ref dir) => ConfigStore::with_root(dir),
        None => ConfigStore::from_host_config()
            .context("could not locate the host configuration directory")?,
    };
    debug!(config_dir = %store.root().display(), "using configuration directory");

    // 4. Dispatch.
    match cli.command {
        Command::Check { username } => {
            let mut filter = UsernameFilter::new(store);
            filter.initialize().await;

            if filter.test_username(&username) {
                println!("blocked");
                Ok(ExitCode::from(1))
            } else {
                println!("allowed");
                Ok(ExitCode::SUCCESS)
            }
        }

        Command::Patterns => {
            let mut filter = UsernameFilter::new(store);
            filter.initialize().await;

            for pattern in filter.loaded_patterns() {
                println!("{pattern}");
            }
            for diag in filter.diagnostics() {
                eprintln!("invalid pattern '{}': {}", diag.pattern, diag.error);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Source => {
            let filter = UsernameFilter::new(store);
            println!("{}", filter.raw_source().await);
            Ok(ExitCode::SUCCESS)
        }

        Command::Mode { mode } => {
            match mode {
                Some(mode) => {
                    let mut current = settings::load(&store)
                        .await
                        .context("failed to load settings")?;
                    current.anti_spam_mode = mode;
                    settings::save(&store, &current)
                        .await
                        .context("failed to save settings")?;
                    println!("{}", current.anti_spam_mode);
                }
                None => {
                    let current = settings::load(&store)
                        .await
                        .context("failed to load settings")?;
                    println!("{}", current.anti_spam_mode);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
