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

//! Numeric post-processing of spot price series
//!
//! Everything here is pure and synchronous: series go in, fresh series and
//! report structures come out. Fetching and presentation live in the
//! `elpris-client` and `elpris-cli` crates.

pub mod error;
pub mod normalize;
pub mod ranking;
pub mod report;
pub mod statistics;
pub mod window;

pub use error::{CoreError, Result};
pub use normalize::to_hourly;
pub use ranking::rank_descending;
pub use report::{AnalysisRequest, ChargingOutcome, PriceReport, analyze, combine};
pub use statistics::summarize;
pub use window::{cheapest_run, find_cheapest_window};
