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

//! Combining today's and tomorrow's prices and producing the reports

use crate::error::{CoreError, Result};
use crate::normalize::to_hourly;
use crate::ranking::rank_descending;
use crate::statistics::summarize;
use crate::window::find_cheapest_window;
use elpris_types::{ChargingDuration, ChargingWindow, PriceRecord, PriceSeries, PriceSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Which optional reports to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Search for the cheapest charging window of this length
    pub charging: Option<ChargingDuration>,
    /// Produce the descending price ranking
    pub sorted: bool,
}

/// Result of the charging window search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChargingOutcome {
    Found(ChargingWindow),
    /// Fewer hours available than the requested window
    NotFound { duration: ChargingDuration },
}

/// All reports for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    /// Hourly prices for today, followed by tomorrow when available
    pub series: PriceSeries,
    pub summary: PriceSummary,
    pub charging: Option<ChargingOutcome>,
    pub ranking: Option<Vec<PriceRecord>>,
}

/// Normalize both days and append tomorrow to today
///
/// Tomorrow is only appended when the provider actually returned prices.
pub fn combine(today: &PriceSeries, tomorrow: &PriceSeries) -> PriceSeries {
    let today = to_hourly(today);
    if tomorrow.is_empty() {
        return today;
    }

    let tomorrow = to_hourly(tomorrow);
    debug!(
        "Combining {} prices for today with {} for tomorrow",
        today.len(),
        tomorrow.len()
    );
    today.append(&tomorrow)
}

/// Run statistics, charging window search and ranking on the combined series
///
/// # Errors
///
/// Returns `CoreError::NoDataAvailable` when both days are empty; nothing is
/// computed in that case.
pub fn analyze(
    today: &PriceSeries,
    tomorrow: &PriceSeries,
    request: &AnalysisRequest,
) -> Result<PriceReport> {
    if today.is_empty() && tomorrow.is_empty() {
        return Err(CoreError::NoDataAvailable);
    }

    let series = combine(today, tomorrow);
    let summary = summarize(&series)?;

    let charging = request.charging.map(|duration| {
        match find_cheapest_window(&series, duration) {
            Some(window) => ChargingOutcome::Found(window),
            None => ChargingOutcome::NotFound { duration },
        }
    });

    let ranking = request.sorted.then(|| rank_descending(&series));

    info!(
        "Analyzed {} hourly prices (charging: {}, sorted: {})",
        series.len(),
        request
            .charging
            .map_or_else(|| "off".to_owned(), |d| d.to_string()),
        request.sorted
    );

    Ok(PriceReport {
        series,
        summary,
        charging,
        ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, TimeZone};

    fn hourly_from(start: DateTime<FixedOffset>, prices: &[f64]) -> PriceSeries {
        prices
            .iter()
            .enumerate()
            .map(|(idx, &sek)| PriceRecord {
                sek_per_kwh: sek,
                eur_per_kwh: sek / 11.5,
                exchange_rate: 11.5,
                time_start: start + Duration::hours(idx as i64),
                time_end: start + Duration::hours(idx as i64 + 1),
            })
            .collect()
    }

    fn midnight(day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, day, 0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_both_days_empty_is_terminal() {
        let request = AnalysisRequest {
            charging: Some(ChargingDuration::TwoHours),
            sorted: true,
        };

        let result = analyze(&PriceSeries::empty(), &PriceSeries::empty(), &request);

        assert_eq!(result.unwrap_err(), CoreError::NoDataAvailable);
    }

    #[test]
    fn test_only_tomorrow_available() {
        let tomorrow = hourly_from(midnight(11), &[0.3, 0.2, 0.1]);

        let report = analyze(
            &PriceSeries::empty(),
            &tomorrow,
            &AnalysisRequest::default(),
        )
        .unwrap();

        assert_eq!(report.series, tomorrow);
        assert_eq!(report.summary.cheapest, tomorrow.records()[2]);
    }

    #[test]
    fn test_optional_reports_follow_request() {
        let today = hourly_from(midnight(10), &[0.5, 0.4, 0.6]);

        let report = analyze(&today, &PriceSeries::empty(), &AnalysisRequest::default()).unwrap();
        assert!(report.charging.is_none());
        assert!(report.ranking.is_none());

        let request = AnalysisRequest {
            charging: Some(ChargingDuration::EightHours),
            sorted: true,
        };
        let report = analyze(&today, &PriceSeries::empty(), &request).unwrap();
        assert_eq!(
            report.charging,
            Some(ChargingOutcome::NotFound {
                duration: ChargingDuration::EightHours
            })
        );
        assert_eq!(report.ranking.map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_combine_skips_empty_tomorrow() {
        let today = hourly_from(midnight(10), &[0.5; 24]);

        assert_eq!(combine(&today, &PriceSeries::empty()), today);
    }
}
