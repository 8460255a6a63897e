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

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use elpris_types::{PriceSeries, Zone};

/// Price data source abstraction
///
/// Implementations return an empty series when the provider has no prices
/// for the requested day; that is not an error.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch all published prices for one day in one zone
    async fn fetch_prices(&self, date: NaiveDate, zone: Zone) -> Result<PriceSeries>;

    /// Get source name for logging
    fn name(&self) -> &str;
}
