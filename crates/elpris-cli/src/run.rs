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

//! One reporting run: fetch, analyze, format

use crate::args::Cli;
use crate::fetch_policy::should_fetch_tomorrow;
use crate::formatters::ReportFormatter;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use elpris_client::PriceSource;
use elpris_core::{AnalysisRequest, CoreError, analyze};
use elpris_types::{ChargingDuration, PriceSeries, TypeError, Zone};
use tracing::{debug, info, warn};

/// What to report, taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub zone: Zone,
    /// Day to report, `None` for today
    pub date: Option<NaiveDate>,
    pub sorted: bool,
    /// Raw `--charging` value, validated during the run
    pub charging: Option<String>,
    pub tomorrow_cutoff_hour: u32,
}

impl RunOptions {
    pub fn from_cli(cli: &Cli, tomorrow_cutoff_hour: u32) -> Self {
        Self {
            zone: cli.zone,
            date: cli.date,
            sorted: cli.sorted,
            charging: cli.charging.clone(),
            tomorrow_cutoff_hour,
        }
    }
}

/// Fetch prices, analyze them and render the report
///
/// `now` is the local wall-clock time. Missing prices for both days is not an
/// error; the report then only says that no prices are available.
pub async fn run(
    source: &dyn PriceSource,
    options: &RunOptions,
    now: NaiveDateTime,
) -> Result<String> {
    let date = options.date.unwrap_or_else(|| now.date());

    info!(
        "Fetching prices for {} in {} ({}) from {}",
        date,
        options.zone,
        options.zone.display_name(),
        source.name()
    );
    let today = source
        .fetch_prices(date, options.zone)
        .await
        .with_context(|| format!("Failed to fetch prices for {date} in {}", options.zone))?;

    let tomorrow = match date.succ_opt() {
        Some(next) if should_fetch_tomorrow(date, now, options.tomorrow_cutoff_hour) => {
            fetch_tomorrow(source, next, options.zone).await
        }
        _ => {
            debug!("Not fetching prices for the day after {}", date);
            PriceSeries::empty()
        }
    };

    let (charging, invalid_charging) = match options.charging.as_deref() {
        Some(value) => match parse_charging(value) {
            Ok(duration) => (Some(duration), None),
            Err(e) => {
                warn!("{e}");
                (None, Some(value))
            }
        },
        None => (None, None),
    };

    let request = AnalysisRequest {
        charging,
        sorted: options.sorted,
    };

    match analyze(&today, &tomorrow, &request) {
        Ok(report) => Ok(ReportFormatter::format_report(&report, invalid_charging)),
        Err(CoreError::NoDataAvailable) => {
            warn!("No prices available for {} or the day after", date);
            Ok(ReportFormatter::format_no_data())
        }
    }
}

/// Tomorrow's prices are optional, so a failed fetch is logged and treated
/// as not yet published
async fn fetch_tomorrow(source: &dyn PriceSource, date: NaiveDate, zone: Zone) -> PriceSeries {
    match source.fetch_prices(date, zone).await {
        Ok(series) => series,
        Err(e) => {
            warn!("Failed to fetch prices for {}: {}", date, e);
            PriceSeries::empty()
        }
    }
}

fn parse_charging(value: &str) -> Result<ChargingDuration, TypeError> {
    value.parse::<ChargingDuration>()
}
