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

//! Mean, minimum and maximum over a price series

use crate::error::{CoreError, Result};
use elpris_types::{PriceSeries, PriceSummary};
use tracing::debug;

/// Compute mean, cheapest and priciest record of a series
///
/// Extremes are found in a single left-to-right scan and only replaced on a
/// strictly lower (or higher) price, so the earliest record wins a tie.
///
/// # Errors
///
/// Returns `CoreError::NoDataAvailable` for an empty series.
pub fn summarize(series: &PriceSeries) -> Result<PriceSummary> {
    let first = series.records().first().ok_or(CoreError::NoDataAvailable)?;

    let mut sum = 0.0;
    let mut cheapest = first;
    let mut priciest = first;

    for record in series {
        let price = record.sek_per_kwh;
        sum += price;
        if price < cheapest.sek_per_kwh {
            cheapest = record;
        }
        if price > priciest.sek_per_kwh {
            priciest = record;
        }
    }

    // Rounding in the sum can push a flat series' mean just past its extremes
    let mean = sum / series.len() as f64;
    let mean = mean.clamp(cheapest.sek_per_kwh, priciest.sek_per_kwh);

    debug!(
        "Price summary over {} records: mean {:.4}, min {:.4}, max {:.4} SEK/kWh",
        series.len(),
        mean,
        cheapest.sek_per_kwh,
        priciest.sek_per_kwh
    );

    Ok(PriceSummary {
        mean_sek_per_kwh: mean,
        cheapest: cheapest.clone(),
        priciest: priciest.clone(),
    })
}
