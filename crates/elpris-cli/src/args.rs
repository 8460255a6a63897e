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

//! CLI argument definitions using clap.

use chrono::NaiveDate;
use clap::Parser;
use elpris_types::Zone;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "elpris")]
#[command(author, version, about = "Swedish electricity spot prices")]
#[command(
    long_about = "Shows today's spot prices for a Swedish price zone, and tomorrow's once they\n\
    are published. Prints mean, lowest and highest price, optionally the cheapest\n\
    charging window and a list sorted by price.\n\
    \nExamples:\n  \
    elpris --zone SE3\n  \
    elpris --zone SE4 --date 2025-10-16 --sorted\n  \
    elpris --zone SE1 --charging 4h"
)]
pub struct Cli {
    /// Price zone (SE1, SE2, SE3, SE4)
    #[arg(
        long,
        value_name = "SE1|SE2|SE3|SE4",
        help = "Price zone to report on",
        long_help = "Swedish price zones:\n  \
          - SE1: Luleå\n  \
          - SE2: Sundsvall\n  \
          - SE3: Stockholm\n  \
          - SE4: Malmö"
    )]
    pub zone: Zone,

    /// Date to report (YYYY-MM-DD, defaults to today)
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Date to show prices for (defaults to today)"
    )]
    pub date: Option<NaiveDate>,

    /// List all prices sorted from most to least expensive
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Charging window length (2h, 4h or 8h)
    #[arg(
        long,
        value_name = "2h|4h|8h",
        help = "Find the cheapest charging window of this length",
        long_help = "Find the contiguous block of hours with the lowest average price.\n\
          Supported lengths: 2h, 4h, 8h.\n\
          \nWindows may span midnight once tomorrow's prices are published."
    )]
    pub charging: Option<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH", help = "Path to elpris.toml")]
    pub config: Option<PathBuf>,
}
