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

//! Decides whether tomorrow's prices are worth fetching
//!
//! Day-ahead prices are published early in the afternoon, so for the current
//! day tomorrow is only requested once the local time is past the cutoff
//! hour. For any day in the past the following day is always published.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// `now` is the local wall-clock time in the configured timezone
pub fn should_fetch_tomorrow(requested: NaiveDate, now: NaiveDateTime, cutoff_hour: u32) -> bool {
    let today = now.date();

    if requested < today {
        return true;
    }

    let Some(cutoff) = NaiveTime::from_hms_opt(cutoff_hour, 0, 0) else {
        return false;
    };

    requested == today && now.time() > cutoff
}
