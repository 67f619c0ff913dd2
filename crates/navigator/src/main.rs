// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project Navigator - an AI project mentor service.
//!
//! This is the binary entry point for the Navigator server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod serve;

/// Project Navigator - an AI project mentor service.
#[derive(Parser, Debug)]
#[command(name = "navigator", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Navigator HTTP server.
    Serve,
    /// Check configuration and adapter health, then exit.
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match navigator_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            for e in &errors {
                eprintln!("navigator: {e}");
            }
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Some(Commands::Serve) => serve::run(config).await,
        Some(Commands::Check) => check::run(config).await,
        None => {
            println!("navigator: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("navigator: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = navigator_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "navigator");
    }
}
