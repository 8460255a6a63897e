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

// End-to-end runs of the reporting flow against an in-memory price source

use async_trait::async_trait;
use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use elpris_cli::{RunOptions, run};
use elpris_client::{ClientError, PriceSource};
use elpris_types::{PriceRecord, PriceSeries, Zone};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed series per date and records which dates were requested
struct FakeSource {
    days: HashMap<NaiveDate, PriceSeries>,
    failing: Option<NaiveDate>,
    requested: Mutex<Vec<NaiveDate>>,
}

impl FakeSource {
    fn new(days: Vec<(NaiveDate, PriceSeries)>) -> Self {
        Self {
            days: days.into_iter().collect(),
            failing: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<NaiveDate> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceSource for FakeSource {
    async fn fetch_prices(
        &self,
        date: NaiveDate,
        _zone: Zone,
    ) -> Result<PriceSeries, ClientError> {
        self.requested.lock().unwrap().push(date);
        if self.failing == Some(date) {
            return Err(ClientError::Decode("broken".to_owned()));
        }
        Ok(self.days.get(&date).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "fake"
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

fn local(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, minute, 0).unwrap()
}

fn day_series(day: u32, minutes: i64, prices: &[f64]) -> PriceSeries {
    let start = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 10, day, 0, 0, 0)
        .unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(idx, &sek)| {
            let time_start = start + Duration::minutes(minutes * idx as i64);
            PriceRecord {
                sek_per_kwh: sek,
                eur_per_kwh: sek / 11.0,
                exchange_rate: 11.0,
                time_start,
                time_end: time_start + Duration::minutes(minutes),
            }
        })
        .collect()
}

fn flat_day(day: u32, price: f64) -> PriceSeries {
    day_series(day, 60, &[price; 24])
}

fn options(charging: Option<&str>, sorted: bool) -> RunOptions {
    RunOptions {
        zone: Zone::Se3,
        date: None,
        sorted,
        charging: charging.map(str::to_owned),
        tomorrow_cutoff_hour: 13,
    }
}

#[tokio::test]
async fn test_morning_run_only_fetches_today() {
    let mut prices = vec![0.5; 24];
    prices[3] = 0.1;
    prices[18] = 0.9;
    let source = FakeSource::new(vec![(date(16), day_series(16, 60, &prices))]);

    let output = run(&source, &options(None, false), local(16, 9, 0))
        .await
        .unwrap();

    assert_eq!(source.requested(), vec![date(16)]);
    assert_eq!(
        output,
        "Medelpris: 50,00 öre\n\
         Lägsta Pris: 03-04 (10,00 öre)\n\
         Högsta Pris: 18-19 (90,00 öre)\n"
    );
}

#[tokio::test]
async fn test_afternoon_run_includes_tomorrow() {
    let mut tomorrow_prices = vec![0.9; 24];
    tomorrow_prices[2] = 0.05;
    tomorrow_prices[3] = 0.05;
    let source = FakeSource::new(vec![
        (date(16), flat_day(16, 0.6)),
        (date(17), day_series(17, 60, &tomorrow_prices)),
    ]);

    let output = run(&source, &options(Some("2h"), true), local(16, 14, 30))
        .await
        .unwrap();

    assert_eq!(source.requested(), vec![date(16), date(17)]);
    assert!(output.contains("Lägsta Pris: 02-03 (5,00 öre)"));
    assert!(output.contains(
        "\nOptimalt laddningsfönster (2h):\n\
         Påbörja laddning kl 02:00\n\
         Sluta ladda kl 04:00\n\
         Medelpris för fönster: 5,00 öre\n"
    ));
    let sorted_lines = output
        .split("Priser sorterade efter pris (fallande):\n")
        .nth(1)
        .unwrap()
        .lines()
        .count();
    assert_eq!(sorted_lines, 48);
}

#[tokio::test]
async fn test_quarter_hour_prices_are_reported_hourly() {
    let quarters: Vec<f64> = (0..96_i32).map(|q| if q < 4 { 0.2 } else { 0.6 }).collect();
    let source = FakeSource::new(vec![(date(16), day_series(16, 15, &quarters))]);

    let output = run(&source, &options(None, true), local(16, 8, 0))
        .await
        .unwrap();

    assert!(output.contains("Lägsta Pris: 00-01 (20,00 öre)"));
    let sorted_lines = output
        .split("Priser sorterade efter pris (fallande):\n")
        .nth(1)
        .unwrap()
        .lines()
        .count();
    assert_eq!(sorted_lines, 24);
}

#[tokio::test]
async fn test_no_prices_for_either_day() {
    let source = FakeSource::new(Vec::new());

    let output = run(&source, &options(Some("4h"), true), local(16, 20, 0))
        .await
        .unwrap();

    assert_eq!(output, "Inga priser tillgängliga.\n");
}

#[tokio::test]
async fn test_window_longer_than_available_hours() {
    let source = FakeSource::new(vec![(date(16), day_series(16, 60, &[0.3; 6]))]);

    let output = run(&source, &options(Some("8h"), false), local(16, 10, 0))
        .await
        .unwrap();

    assert!(output.ends_with("Kunde inte hitta ett optimalt laddningsfönster.\n"));
}

#[tokio::test]
async fn test_invalid_charging_keeps_other_reports() {
    let source = FakeSource::new(vec![(date(16), flat_day(16, 0.4))]);

    let output = run(&source, &options(Some("3h"), true), local(16, 10, 0))
        .await
        .unwrap();

    assert!(output.starts_with("Medelpris: 40,00 öre\n"));
    assert!(output.contains("Invalid charging argument 3h\n"));
    assert!(!output.contains("Optimalt laddningsfönster"));
    assert!(output.contains("Priser sorterade efter pris (fallande):"));
}

#[tokio::test]
async fn test_past_date_fetches_following_day() {
    let source = FakeSource::new(vec![
        (date(10), flat_day(10, 0.3)),
        (date(11), flat_day(11, 0.3)),
    ]);
    let run_options = RunOptions {
        date: Some(date(10)),
        ..options(None, false)
    };

    run(&source, &run_options, local(16, 8, 0)).await.unwrap();

    assert_eq!(source.requested(), vec![date(10), date(11)]);
}

#[tokio::test]
async fn test_failed_tomorrow_fetch_is_not_fatal() {
    let mut source = FakeSource::new(vec![(date(16), flat_day(16, 0.7))]);
    source.failing = Some(date(17));

    let output = run(&source, &options(None, false), local(16, 15, 0))
        .await
        .unwrap();

    assert!(output.starts_with("Medelpris: 70,00 öre\n"));
}

#[tokio::test]
async fn test_failed_today_fetch_is_an_error() {
    let mut source = FakeSource::new(Vec::new());
    source.failing = Some(date(16));

    let result = run(&source, &options(None, false), local(16, 8, 0)).await;

    assert!(result.is_err());
}
