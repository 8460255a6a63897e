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

//! Cheapest contiguous charging window search

use elpris_types::{ChargingDuration, ChargingWindow, PriceSeries};
use tracing::debug;

/// Find the charging window of the given duration with the lowest average price
///
/// The series is expected to be hourly, so the duration in hours equals the
/// number of records in the window. Returns `None` when the series is
/// shorter than the window.
pub fn find_cheapest_window(
    series: &PriceSeries,
    duration: ChargingDuration,
) -> Option<ChargingWindow> {
    cheapest_run(series, duration.hours())
}

/// Find the run of `length` consecutive records with the lowest average price
///
/// Every start position is evaluated by summing its records left to right.
/// A later window only replaces the best one when its average is strictly
/// lower, so the earliest window wins a tie.
///
/// # Returns
/// `None` when no window fits: `length` is zero or larger than the series.
pub fn cheapest_run(series: &PriceSeries, length: usize) -> Option<ChargingWindow> {
    if length == 0 || series.len() < length {
        debug!(
            "No {}-record window fits in a series of {} records",
            length,
            series.len()
        );
        return None;
    }

    let records = series.records();
    let mut best: Option<(usize, f64)> = None;

    for start_idx in 0..=(records.len() - length) {
        let total_price: f64 = records[start_idx..start_idx + length]
            .iter()
            .map(|r| r.sek_per_kwh)
            .sum();
        let avg_price = total_price / length as f64;

        if best.is_none_or(|(_, best_avg)| avg_price < best_avg) {
            best = Some((start_idx, avg_price));
        }
    }

    let (start_index, average) = best?;
    let first = &records[start_index];
    let last = &records[start_index + length - 1];

    debug!(
        "Cheapest {}-record window: records {}-{} (avg price: {:.4} SEK/kWh)",
        length,
        start_index,
        start_index + length - 1,
        average
    );

    Some(ChargingWindow {
        start_index,
        length,
        average_sek_per_kwh: average,
        window_start: first.time_start,
        window_end: last.time_end,
    })
}
