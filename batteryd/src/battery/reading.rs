//
// Copyright (c) batteryd contributors
// See License.txt for details
use serde::{Deserialize, Serialize};

/// An instantaneous battery measurement in the units local clients expect:
/// volts and milliamps.
///
/// Readings are built fresh for every query and never cached. Both fields
/// are always populated together; a failed query produces an error instead
/// of a partial reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// Battery voltage in volts. -0.001 is the converted form of the
    /// "voltage unavailable" sentinel, not a measurement.
    pub voltage: f64,
    /// Instantaneous current in milliamps. The sign follows the platform's
    /// convention and is not interpreted here.
    pub current: f64,
}

impl BatteryReading {
    /// Convert raw platform integers (millivolts, microamps) to the
    /// conventional units. A raw voltage of -1 divides through to -0.001
    /// and is deliberately kept as a success value.
    pub fn from_raw(voltage_millivolts: i64, current_microamps: i64) -> Self {
        Self {
            voltage: voltage_millivolts as f64 / 1000.0,
            current: current_microamps as f64 / 1000.0,
        }
    }
}
