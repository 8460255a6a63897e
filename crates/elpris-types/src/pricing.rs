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

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

// ============= Pricing Data =============

/// Spot price for one interval as published by the price provider
///
/// Field names on the wire follow the provider's JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Price in SEK/kWh
    #[serde(rename = "SEK_per_kWh")]
    pub sek_per_kwh: f64,

    /// Price in EUR/kWh
    #[serde(rename = "EUR_per_kWh")]
    pub eur_per_kwh: f64,

    /// EUR to SEK exchange rate used for this interval
    #[serde(rename = "EXR")]
    pub exchange_rate: f64,

    /// Start of the interval (inclusive)
    pub time_start: DateTime<FixedOffset>,

    /// End of the interval (exclusive)
    pub time_end: DateTime<FixedOffset>,
}

impl PriceRecord {
    pub fn duration(&self) -> Duration {
        self.time_end - self.time_start
    }
}

/// Time span represented by each record of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// 15-minute blocks, 96 per day
    QuarterHour,
    /// Hourly blocks, 24 per day
    Hourly,
}

impl Granularity {
    /// Number of records a regular (non-DST) day has at this granularity
    pub fn records_per_day(&self) -> usize {
        match self {
            Self::QuarterHour => 96,
            Self::Hourly => 24,
        }
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        match minutes {
            15 => Some(Self::QuarterHour),
            60 => Some(Self::Hourly),
            _ => None,
        }
    }
}

/// Ordered, contiguous sequence of price records for one or more days
///
/// A series is never mixed-granularity and may be empty when the provider
/// had no data for the requested day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }

    /// Concatenate two series into a new one, `self` first
    #[must_use]
    pub fn append(&self, other: &PriceSeries) -> PriceSeries {
        let mut records = Vec::with_capacity(self.len() + other.len());
        records.extend_from_slice(&self.records);
        records.extend_from_slice(&other.records);
        PriceSeries { records }
    }

    /// Granularity inferred from the first record's span, `None` when the
    /// series is empty or the span is neither 15 nor 60 minutes
    pub fn granularity(&self) -> Option<Granularity> {
        self.records
            .first()
            .and_then(|r| Granularity::from_minutes(r.duration().num_minutes()))
    }
}

impl From<Vec<PriceRecord>> for PriceSeries {
    fn from(records: Vec<PriceRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<PriceRecord> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceRecord;
    type IntoIter = std::slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Price statistics over a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Arithmetic mean of all SEK/kWh prices
    pub mean_sek_per_kwh: f64,
    /// First record holding the lowest price
    pub cheapest: PriceRecord,
    /// First record holding the highest price
    pub priciest: PriceRecord,
}
