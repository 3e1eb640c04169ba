//
// Copyright (c) batteryd contributors
// See License.txt for details
mod power_supply;
mod provider;
mod reading;
mod stats_handler;

pub use power_supply::PowerSupplyBatterySource;
pub use provider::{
    BatterySnapshot, BatterySource, BatteryStatsProvider, PlatformQueryError,
    VOLTAGE_UNAVAILABLE_MILLIVOLTS,
};
pub use reading::BatteryReading;
pub use stats_handler::{BatteryStatsHandler, BATTERY_STATS_URL};
