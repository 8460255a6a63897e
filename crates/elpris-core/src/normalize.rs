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

//! Conversion of 15-minute price series to hourly resolution

use elpris_types::{Granularity, PriceRecord, PriceSeries};
use tracing::{debug, warn};

const QUARTERS_PER_HOUR: usize = 4;

/// Convert a 15-minute series into an hourly one by averaging blocks of four
///
/// Only a full day of quarter-hour prices (96 records) is converted. Hourly
/// series (24 records) are returned as-is, and any other length is passed
/// through unchanged so the caller can decide what to make of it.
pub fn to_hourly(series: &PriceSeries) -> PriceSeries {
    let quarter_day = Granularity::QuarterHour.records_per_day();
    let hourly_day = Granularity::Hourly.records_per_day();

    if series.len() != quarter_day {
        if !series.is_empty() && series.len() != hourly_day {
            warn!(
                "Unexpected price record count {}, keeping series unchanged",
                series.len()
            );
        }
        return series.clone();
    }

    if series.granularity() != Some(Granularity::QuarterHour) {
        warn!(
            "A day of {} records without 15-minute spans, averaging anyway",
            quarter_day
        );
    }

    let hourly: PriceSeries = series
        .records()
        .chunks_exact(QUARTERS_PER_HOUR)
        .map(merge_block)
        .collect();

    debug!(
        "Converted {} quarter-hour prices to {} hourly prices",
        series.len(),
        hourly.len()
    );

    hourly
}

/// Average one block of quarter-hour records into a single record spanning
/// from the first start to the last end
fn merge_block(block: &[PriceRecord]) -> PriceRecord {
    let count = block.len() as f64;

    let mut sek_sum = 0.0;
    let mut eur_sum = 0.0;
    let mut exr_sum = 0.0;
    for record in block {
        sek_sum += record.sek_per_kwh;
        eur_sum += record.eur_per_kwh;
        exr_sum += record.exchange_rate;
    }

    let first = &block[0];
    let last = &block[block.len() - 1];

    PriceRecord {
        sek_per_kwh: sek_sum / count,
        eur_per_kwh: eur_sum / count,
        exchange_rate: exr_sum / count,
        time_start: first.time_start,
        time_end: last.time_end,
    }
}
