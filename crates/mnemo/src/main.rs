// SPDX-FileCopyrightText: 2026 Mnemo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! mnemo - a memory-augmented chat CLI.
//!
//! Binary entry point: loads and validates configuration, initializes
//! tracing, constructs the two remote-service clients, and hands control to
//! the chat loop. Interruption exits 0; any remote failure exits non-zero.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use mnemo_config::MnemoConfig;
use mnemo_mem0::Mem0Client;
use mnemo_openai::OpenAiClient;

mod chat;

/// mnemo - a memory-augmented chat CLI.
#[derive(Parser, Debug)]
#[command(name = "mnemo", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            mnemo_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.agent.log_level);

    let memory = match Mem0Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            return ExitCode::FAILURE;
        }
    };

    let provider = match OpenAiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            return ExitCode::FAILURE;
        }
    };

    match chat::run_chat(&config, &memory, &provider).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            ExitCode::FAILURE
        }
    }
}

/// Loads config from an explicit path when given, otherwise from the XDG
/// hierarchy with env overrides.
fn load_config(
    path: Option<&std::path::Path>,
) -> Result<MnemoConfig, Vec<mnemo_config::ConfigError>> {
    match path {
        Some(path) => mnemo_config::load_and_validate_path(path),
        None => mnemo_config::load_and_validate(),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mnemo={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
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
        // Verify config loads with defaults (no config file needed)
        let config = mnemo_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "mnemo");
        assert_eq!(config.agent.user_id, "local");
    }
}
