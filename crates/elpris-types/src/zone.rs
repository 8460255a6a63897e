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
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Swedish electricity price zones (elområden)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    /// Northern Sweden
    Se1,
    /// Northern central Sweden
    Se2,
    /// Southern central Sweden
    Se3,
    /// Southern Sweden
    Se4,
}

impl Zone {
    /// All zones in north to south order
    pub const ALL: [Zone; 4] = [Zone::Se1, Zone::Se2, Zone::Se3, Zone::Se4];

    /// Zone code as used by the price provider (e.g., "SE3")
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }

    /// Human-readable zone name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Se1 => "Luleå",
            Self::Se2 => "Sundsvall",
            Self::Se3 => "Stockholm",
            Self::Se4 => "Malmö",
        }
    }

    /// Parse a zone code, case-insensitive and ignoring surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `TypeError::UnknownZone` for anything outside SE1-SE4.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        match code.trim().to_uppercase().as_str() {
            "SE1" => Ok(Self::Se1),
            "SE2" => Ok(Self::Se2),
            "SE3" => Ok(Self::Se3),
            "SE4" => Ok(Self::Se4),
            _ => Err(TypeError::UnknownZone(code.to_owned())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Zone {
    type Err = TypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
