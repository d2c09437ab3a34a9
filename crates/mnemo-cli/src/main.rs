//! mnemo: BIP-39 mnemonic and seed generator
//!
//! # Usage
//!
//! ```bash
//! mnemo -e 256 -l eng                      # new 24-word mnemonic
//! mnemo -x 7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f  # encode known entropy
//! mnemo -k "abandon ... about" -p TREZOR   # 64-byte seed as hex
//! ```

mod args;
mod commands;
mod config;
mod wordlists;

use anyhow::{Context, Result};
use args::Action;
use std::path::PathBuf;

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.is_empty() {
        args::print_help();
        std::process::exit(1);
    }

    let invocation = match args::parse_args(raw)? {
        Action::Help => {
            args::print_help();
            return Ok(());
        }
        Action::Version => {
            println!("mnemo {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Action::Run(invocation) => invocation,
    };

    // Load config
    let config_path = invocation
        .config
        .clone()
        .or_else(|| std::env::var("MNEMO_CONFIG").ok().map(PathBuf::from));
    let mut cli_config = config::CliConfig::load(config_path.as_deref()).with_context(|| {
        match config_path {
            Some(ref p) => format!("Failed to load config from {}", p.display()),
            None => "Failed to build default config".to_string(),
        }
    })?;

    // Apply env overrides
    cli_config.apply_env_overrides()?;

    // Validate
    cli_config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    env_logger::Builder::new()
        .parse_filters(&cli_config.general.log_level)
        .init();

    // Security hardening: keep mnemonic and seed material out of core dumps
    mnemo_core::memory::disable_core_dumps();

    let output = commands::execute(&invocation, &cli_config)?;
    println!("{}", output.as_str());

    Ok(())
}
