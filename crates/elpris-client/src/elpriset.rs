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

//! Client for the elprisetjustnu.se price API
//!
//! Prices are published per day and zone at
//! `{base}/api/v1/prices/{YYYY}/{MM}-{DD}_{ZONE}.json` as a JSON array of
//! records. A day that is not yet published answers with 404.

use crate::error::{ClientError, Result};
use crate::source::PriceSource;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use elpris_types::{PriceRecord, PriceSeries, Zone};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se";

const USER_AGENT: &str = concat!("elpris/", env!("CARGO_PKG_VERSION"));

/// Connection settings for `ElprisetClient`
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without trailing path (overridable for testing)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElprisetClient {
    client: reqwest::Client,
    base_url: String,
}

impl ElprisetClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// URL of the price file for one day and zone
    pub fn prices_url(&self, date: NaiveDate, zone: Zone) -> String {
        format!(
            "{}/api/v1/prices/{}/{:02}-{:02}_{}.json",
            self.base_url,
            date.year(),
            date.month(),
            date.day(),
            zone.code()
        )
    }
}

#[async_trait]
impl PriceSource for ElprisetClient {
    async fn fetch_prices(&self, date: NaiveDate, zone: Zone) -> Result<PriceSeries> {
        let url = self.prices_url(date, zone);
        debug!("Fetching prices from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!("No prices published for {} in {}", date, zone);
            return Ok(PriceSeries::empty());
        }

        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }

        let body = response.text().await?;
        let records: Vec<PriceRecord> =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

        info!("Fetched {} prices for {} in {}", records.len(), date, zone);

        Ok(PriceSeries::new(records))
    }

    fn name(&self) -> &str {
        "elprisetjustnu.se"
    }
}
