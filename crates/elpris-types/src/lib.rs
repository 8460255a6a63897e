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

//! Shared data model for the elpris workspace: price records, zones and the
//! derived structures produced by the analysis in `elpris-core`.

pub mod charging;
pub mod error;
pub mod pricing;
pub mod zone;

// Re-export common types for convenience
pub use charging::{ChargingDuration, ChargingWindow};
pub use error::TypeError;
pub use pricing::{Granularity, PriceRecord, PriceSeries, PriceSummary};
pub use zone::Zone;
