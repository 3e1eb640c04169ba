//
// Copyright (c) batteryd contributors
// See License.txt for details
//! The battery stats bridge: one synchronous query combining the platform's
//! battery status snapshot with an independent current-sensor read.

use thiserror::Error;

use super::reading::BatteryReading;

/// Raw millivolt value standing in for "the platform did not report a
/// voltage". It flows through the unit conversion unchanged, so clients see
/// a voltage of -0.001 rather than an error.
pub const VOLTAGE_UNAVAILABLE_MILLIVOLTS: i64 = -1;

/// Failure of either underlying platform query. The display form is the
/// platform's own message, passed through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PlatformQueryError {
    message: String,
}

impl PlatformQueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The device's last-known battery status, delivered by the platform in one
/// shot. Nothing is subscribed to and nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterySnapshot {
    /// Battery voltage in millivolts, when the platform reported one.
    pub voltage_millivolts: Option<i64>,
}

/// The two platform services the bridge depends on: the status snapshot
/// source and the current-sensor query. Implementations are stateless;
/// every call re-queries the platform.
#[cfg_attr(test, mockall::automock)]
pub trait BatterySource {
    /// Fetch the last-known battery status, synchronously.
    fn status_snapshot(&self) -> Result<BatterySnapshot, PlatformQueryError>;

    /// Query the instantaneous current draw in microamps. Independent from
    /// the snapshot.
    fn current_now_microamps(&self) -> Result<i64, PlatformQueryError>;
}

/// Serves the one bridge operation: fetch voltage and current once and
/// convert the raw integers to volts and milliamps.
pub struct BatteryStatsProvider<S: BatterySource> {
    source: S,
}

impl<S: BatterySource> BatteryStatsProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One-shot battery read. Either both values come back or the first
    /// platform failure aborts the whole operation; there is no retry and
    /// no partial result.
    pub fn get_battery_stats(&self) -> Result<BatteryReading, PlatformQueryError> {
        let snapshot = self.source.status_snapshot()?;
        let voltage_millivolts = snapshot
            .voltage_millivolts
            .unwrap_or(VOLTAGE_UNAVAILABLE_MILLIVOLTS);

        let current_microamps = self.source.current_now_microamps()?;

        Ok(BatteryReading::from_raw(
            voltage_millivolts,
            current_microamps,
        ))
    }
}
