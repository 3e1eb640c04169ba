//
// Copyright (c) batteryd contributors
// See License.txt for details
use eyre::{eyre, Context, Result};
use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};

use crate::{
    battery::{BatteryReading, BATTERY_STATS_URL},
    config::Config,
    http_server::ErrorBody,
};

/// Client to the batteryd localhost HTTP API
pub struct BatterydClient {
    base_url: String,
    client: Client,
}

impl BatterydClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(BatterydClient {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            base_url: format!("http://{}", config.config_file.http_server.bind_address),
        })
    }

    /// One battery reading from the daemon. A 500 carries the platform's
    /// failure message, which is surfaced verbatim.
    pub fn get_battery_stats(&self) -> Result<BatteryReading> {
        let r = self
            .client
            .get(format!("{}{}", self.base_url, BATTERY_STATS_URL))
            .send()
            .wrap_err_with(|| {
                eyre!(format!(
                    "Error fetching {}{}. Is batteryd running?",
                    self.base_url, BATTERY_STATS_URL
                ))
            })?;
        match r.status() {
            StatusCode::OK => Ok(r.json()?),
            StatusCode::INTERNAL_SERVER_ERROR => {
                let body: ErrorBody = r.json().wrap_err("Unexpected error body from batteryd")?;
                Err(eyre!(body.message))
            }
            _ => Err(eyre!("Unexpected status code {}", r.status().as_u16())),
        }
    }
}
