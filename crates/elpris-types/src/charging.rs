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

use crate::error::TypeError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported charging window lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargingDuration {
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "8h")]
    EightHours,
}

impl ChargingDuration {
    pub const ALL: [ChargingDuration; 3] = [
        ChargingDuration::TwoHours,
        ChargingDuration::FourHours,
        ChargingDuration::EightHours,
    ];

    #[must_use]
    pub fn hours(&self) -> usize {
        match self {
            Self::TwoHours => 2,
            Self::FourHours => 4,
            Self::EightHours => 8,
        }
    }
}

impl fmt::Display for ChargingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl FromStr for ChargingDuration {
    type Err = TypeError;

    /// Accepts "2h", "4h", "8h" as well as the bare hour count
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix(['h', 'H']).unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .ok()
            .and_then(|hours| Self::try_from(hours).ok())
            .ok_or_else(|| TypeError::InvalidWindowLength(s.to_owned()))
    }
}

impl TryFrom<usize> for ChargingDuration {
    type Error = TypeError;

    fn try_from(hours: usize) -> Result<Self, Self::Error> {
        match hours {
            2 => Ok(Self::TwoHours),
            4 => Ok(Self::FourHours),
            8 => Ok(Self::EightHours),
            other => Err(TypeError::InvalidWindowLength(other.to_string())),
        }
    }
}

/// Contiguous run of records with the lowest average price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingWindow {
    /// Index of the first record in the analysed series
    pub start_index: usize,
    /// Number of records in the window
    pub length: usize,
    /// Mean SEK/kWh over the window
    pub average_sek_per_kwh: f64,
    /// Start of the first record
    pub window_start: DateTime<FixedOffset>,
    /// End of the last record
    pub window_end: DateTime<FixedOffset>,
}
