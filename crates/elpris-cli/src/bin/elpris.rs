// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! CLI entry point for elpris

use anyhow::{Result, bail};
use chrono::Utc;
use clap::Parser;
use elpris_cli::{Cli, RunOptions, config::load_config, logging::init_tracing, run};
use elpris_client::ElprisetClient;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.log_level);
    match &cli.config {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file given, using defaults"),
    }
    debug!("Configuration: {:?}", config);

    let validation = config.validate();
    for issue in &validation.warnings {
        warn!("Config {issue}");
    }
    if !validation.is_valid() {
        bail!("Invalid configuration:\n{}", validation.error_summary());
    }

    let timezone = config.timezone()?;
    let client = ElprisetClient::new(&config.client_config())?;
    let options = RunOptions::from_cli(&cli, config.schedule.tomorrow_cutoff_hour);

    let now = Utc::now().with_timezone(&timezone).naive_local();
    let output = run(&client, &options, now).await?;

    print!("{output}");
    Ok(())
}
