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

//! Swedish-language report output
//!
//! Prices are shown in öre (SEK × 100) with two decimals and a decimal comma.

use chrono::{DateTime, FixedOffset, Timelike};
use elpris_core::{ChargingOutcome, PriceReport};
use elpris_types::{ChargingWindow, PriceRecord, PriceSummary};
use std::fmt::Write;

/// Formatter for the plain-text console report
#[derive(Debug)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format every report section in order: summary, charging window, ranking
    ///
    /// `invalid_charging` holds a rejected `--charging` value; it is reported
    /// in place of the charging section.
    pub fn format_report(report: &PriceReport, invalid_charging: Option<&str>) -> String {
        let mut output = Self::format_summary(&report.summary);

        if let Some(value) = invalid_charging {
            let _ = writeln!(output, "Invalid charging argument {value}");
        } else if let Some(outcome) = &report.charging {
            output.push_str(&Self::format_charging(outcome));
        }

        if let Some(ranking) = &report.ranking {
            output.push_str(&Self::format_ranking(ranking));
        }

        output
    }

    pub fn format_no_data() -> String {
        "Inga priser tillgängliga.\n".to_owned()
    }

    pub fn format_summary(summary: &PriceSummary) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Medelpris: {} öre",
            format_ore(summary.mean_sek_per_kwh)
        );
        let _ = writeln!(
            output,
            "Lägsta Pris: {} ({} öre)",
            hour_range(&summary.cheapest),
            format_ore(summary.cheapest.sek_per_kwh)
        );
        let _ = writeln!(
            output,
            "Högsta Pris: {} ({} öre)",
            hour_range(&summary.priciest),
            format_ore(summary.priciest.sek_per_kwh)
        );
        output
    }

    pub fn format_charging(outcome: &ChargingOutcome) -> String {
        match outcome {
            ChargingOutcome::Found(window) => Self::format_window(window),
            ChargingOutcome::NotFound { .. } => {
                "Kunde inte hitta ett optimalt laddningsfönster.\n".to_owned()
            }
        }
    }

    fn format_window(window: &ChargingWindow) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "\nOptimalt laddningsfönster ({}h):", window.length);
        let _ = writeln!(
            output,
            "Påbörja laddning kl {}",
            clock_time(&window.window_start)
        );
        let _ = writeln!(output, "Sluta ladda kl {}", clock_time(&window.window_end));
        let _ = writeln!(
            output,
            "Medelpris för fönster: {} öre",
            format_ore(window.average_sek_per_kwh)
        );
        output
    }

    pub fn format_ranking(ranking: &[PriceRecord]) -> String {
        let mut output = String::from("\nPriser sorterade efter pris (fallande):\n");
        for record in ranking {
            let _ = writeln!(
                output,
                "{} {} öre",
                hour_range(record),
                format_ore(record.sek_per_kwh)
            );
        }
        output
    }
}

/// SEK/kWh as öre with two decimals and a decimal comma, e.g. 0.4237 -> "42,37"
pub fn format_ore(sek_per_kwh: f64) -> String {
    format!("{:.2}", sek_per_kwh * 100.0).replace('.', ",")
}

/// Start and end hour of a record, e.g. "07-08"
pub fn hour_range(record: &PriceRecord) -> String {
    format!(
        "{:02}-{:02}",
        record.time_start.hour(),
        record.time_end.hour()
    )
}

/// Local clock time, e.g. "22:00"
pub fn clock_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M").to_string()
}
