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

//! Price retrieval for elpris
//!
//! `PriceSource` is the seam the binary fetches through; `ElprisetClient`
//! implements it against the public elprisetjustnu.se API.

pub mod elpriset;
pub mod error;
pub mod source;

pub use elpriset::{ClientConfig, ElprisetClient};
pub use error::{ClientError, Result};
pub use source::PriceSource;
