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

//! Command line front end for elpris: argument parsing, configuration,
//! fetch policy and the Swedish-language report output.

pub mod args;
pub mod config;
pub mod fetch_policy;
pub mod formatters;
pub mod logging;
pub mod run;

pub use args::Cli;
pub use config::{ElprisConfig, ValidationResult, load_config};
pub use fetch_policy::should_fetch_tomorrow;
pub use formatters::ReportFormatter;
pub use run::{RunOptions, run};
