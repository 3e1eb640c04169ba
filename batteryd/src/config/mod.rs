//
// Copyright (c) batteryd contributors
// See License.txt for details
//! Daemon configuration.
//!
//! Modules with their own settings should implement `From<&Config>` for
//! their config type (see PowerSupplyBatterySource) rather than reach into
//! the raw file.

use std::path::Path;

use eyre::Result;

mod config_file;
pub use config_file::{BatteryConfig, BatterydConfig, HttpServerConfig};

pub struct Config {
    pub config_file: BatterydConfig,
}

impl Config {
    pub const DEFAULT_CONFIG_PATH: &'static str = BatterydConfig::DEFAULT_CONFIG_PATH;

    pub fn read_from_system(user_config: Option<&Path>) -> Result<Self> {
        let config = BatterydConfig::load(user_config)?;
        Ok(Self {
            config_file: config,
        })
    }

    #[cfg(test)]
    pub fn test_fixture() -> Self {
        Self {
            config_file: BatterydConfig {
                http_server: HttpServerConfig {
                    bind_address: "127.0.0.1:8791".parse().unwrap(),
                },
                battery: BatteryConfig {
                    power_supply_dir: "/sys/class/power_supply".into(),
                    supply_name: None,
                },
            },
        }
    }
}
