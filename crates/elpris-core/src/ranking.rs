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

//! Descending price ranking

use elpris_types::{PriceRecord, PriceSeries};

/// Records ordered from most to least expensive
///
/// Uses a stable sort, so records with equal prices keep their original
/// relative order. The input series is left untouched.
pub fn rank_descending(series: &PriceSeries) -> Vec<PriceRecord> {
    let mut ranked = series.records().to_vec();
    ranked.sort_by(|a, b| b.sek_per_kwh.total_cmp(&a.sek_per_kwh));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, TimeZone};

    fn hourly(prices: &[f64]) -> PriceSeries {
        let start: DateTime<FixedOffset> = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 10, 0, 0, 0)
            .unwrap();
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

    #[test]
    fn test_sorted_most_expensive_first() {
        let series = hourly(&[0.4, 1.2, -0.1, 0.9, 0.0]);

        let ranked = rank_descending(&series);

        let prices: Vec<f64> = ranked.iter().map(|r| r.sek_per_kwh).collect();
        assert_eq!(prices, vec![1.2, 0.9, 0.4, 0.0, -0.1]);
    }

    #[test]
    fn test_ranking_is_a_permutation() {
        let series = hourly(&[0.7, 0.3, 0.7, 0.1, 0.5, 0.3]);

        let ranked = rank_descending(&series);

        assert_eq!(ranked.len(), series.len());
        for record in &series {
            let expected = series.iter().filter(|r| *r == record).count();
            let actual = ranked.iter().filter(|r| *r == record).count();
            assert_eq!(expected, actual);
        }
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].sek_per_kwh >= pair[1].sek_per_kwh)
        );
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let series = hourly(&[0.3, 0.7, 0.3, 0.7]);

        let ranked = rank_descending(&series);

        assert_eq!(ranked[0].time_start, series.records()[1].time_start);
        assert_eq!(ranked[1].time_start, series.records()[3].time_start);
        assert_eq!(ranked[2].time_start, series.records()[0].time_start);
        assert_eq!(ranked[3].time_start, series.records()[2].time_start);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let series = hourly(&[0.1, 0.9, 0.5]);
        let before = series.clone();

        let _ = rank_descending(&series);

        assert_eq!(series, before);
    }
}
