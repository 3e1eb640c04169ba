//
// Copyright (c) batteryd contributors
// See License.txt for details
//! Battery source backed by the kernel power-supply class.
//!
//! The supply's `uevent` pseudo-file plays the role of the status snapshot:
//! a single read returns the last-known property set, no subscription
//! involved. `current_now` is the independent current-sensor query. The
//! kernel publishes microvolts; voltage is narrowed to millivolts here
//! because that is the unit battery status consumers expect.

use std::{
    fs::{read_dir, read_to_string},
    path::PathBuf,
};

use crate::config::Config;

use super::provider::{BatterySnapshot, BatterySource, PlatformQueryError};

const VOLTAGE_NOW_KEY: &str = "POWER_SUPPLY_VOLTAGE_NOW";
const MICROVOLTS_PER_MILLIVOLT: i64 = 1000;

/// Reads battery properties from `/sys/class/power_supply` (or the
/// configured equivalent). Stateless: the battery supply is resolved again
/// on every query, so a supply appearing later needs no daemon restart.
pub struct PowerSupplyBatterySource {
    power_supply_dir: PathBuf,
    supply_name: Option<String>,
}

impl PowerSupplyBatterySource {
    pub fn new(power_supply_dir: impl Into<PathBuf>, supply_name: Option<String>) -> Self {
        Self {
            power_supply_dir: power_supply_dir.into(),
            supply_name,
        }
    }

    fn supply_dir(&self) -> Result<PathBuf, PlatformQueryError> {
        match &self.supply_name {
            Some(name) => Ok(self.power_supply_dir.join(name)),
            None => self.detect_battery_supply(),
        }
    }

    /// First supply (in name order) whose `type` reads `Battery`. Name
    /// order keeps the pick deterministic on devices with several
    /// batteries.
    fn detect_battery_supply(&self) -> Result<PathBuf, PlatformQueryError> {
        let entries = read_dir(&self.power_supply_dir).map_err(|e| {
            PlatformQueryError::new(format!(
                "unable to list {}: {}",
                self.power_supply_dir.display(),
                e
            ))
        })?;

        let mut supplies = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .collect::<Vec<_>>();
        supplies.sort();

        supplies
            .into_iter()
            .find(|supply| {
                read_to_string(supply.join("type"))
                    .map(|supply_type| supply_type.trim() == "Battery")
                    .unwrap_or(false)
            })
            .ok_or_else(|| {
                PlatformQueryError::new(format!(
                    "no battery found under {}",
                    self.power_supply_dir.display()
                ))
            })
    }

    fn read_supply_file(&self, filename: &str) -> Result<String, PlatformQueryError> {
        let path = self.supply_dir()?.join(filename);
        read_to_string(&path).map_err(|e| {
            PlatformQueryError::new(format!("unable to read {}: {}", path.display(), e))
        })
    }
}

impl BatterySource for PowerSupplyBatterySource {
    fn status_snapshot(&self) -> Result<BatterySnapshot, PlatformQueryError> {
        parse_uevent(&self.read_supply_file("uevent")?)
    }

    fn current_now_microamps(&self) -> Result<i64, PlatformQueryError> {
        let raw = self.read_supply_file("current_now")?;
        raw.trim().parse().map_err(|e| {
            PlatformQueryError::new(format!("invalid current reading '{}': {}", raw.trim(), e))
        })
    }
}

impl From<&Config> for PowerSupplyBatterySource {
    fn from(config: &Config) -> Self {
        Self::new(
            config.config_file.battery.power_supply_dir.clone(),
            config.config_file.battery.supply_name.clone(),
        )
    }
}

fn parse_uevent(contents: &str) -> Result<BatterySnapshot, PlatformQueryError> {
    let raw_voltage = contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .find_map(|(key, value)| (key == VOLTAGE_NOW_KEY).then(|| value.trim()));

    // A snapshot without a voltage is not an error: the provider substitutes
    // the unavailable sentinel.
    let voltage_millivolts = match raw_voltage {
        None => None,
        Some(raw) => Some(
            raw.parse::<i64>().map_err(|e| {
                PlatformQueryError::new(format!(
                    "invalid {} value '{}': {}",
                    VOLTAGE_NOW_KEY, raw, e
                ))
            })? / MICROVOLTS_PER_MILLIVOLT,
        ),
    };

    Ok(BatterySnapshot { voltage_millivolts })
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};
    use std::path::Path;

    use rstest::rstest;
    use tempfile::tempdir;

    use super::*;

    #[rstest]
    fn reads_voltage_and_current_from_supply() {
        let root = tempdir().unwrap();
        create_supply(
            root.path(),
            "BAT0",
            "Battery",
            Some("12079000"),
            Some("1536000"),
        );

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let snapshot = source.status_snapshot().unwrap();
        assert_eq!(snapshot.voltage_millivolts, Some(12_079));
        assert_eq!(source.current_now_microamps().unwrap(), 1_536_000);
    }

    #[rstest]
    fn skips_non_battery_supplies() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "AC", "Mains", None, None);
        create_supply(root.path(), "BAT1", "Battery", Some("4200000"), Some("500000"));

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let snapshot = source.status_snapshot().unwrap();
        assert_eq!(snapshot.voltage_millivolts, Some(4200));
    }

    #[rstest]
    fn no_battery_is_a_platform_error() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "AC", "Mains", None, None);

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let err = source.status_snapshot().unwrap_err();
        assert!(err.to_string().starts_with("no battery found under "));
    }

    #[rstest]
    fn missing_voltage_key_yields_no_voltage() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "BAT0", "Battery", None, Some("500000"));

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let snapshot = source.status_snapshot().unwrap();
        assert_eq!(snapshot.voltage_millivolts, None);
    }

    #[rstest]
    fn malformed_voltage_is_a_platform_error() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "BAT0", "Battery", Some("4.2V"), None);

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let err = source.status_snapshot().unwrap_err();
        assert!(err
            .to_string()
            .starts_with("invalid POWER_SUPPLY_VOLTAGE_NOW value '4.2V'"));
    }

    #[rstest]
    fn missing_current_file_is_a_platform_error() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "BAT0", "Battery", Some("4200000"), None);

        let source = PowerSupplyBatterySource::new(root.path(), None);

        let err = source.current_now_microamps().unwrap_err();
        assert!(err.to_string().starts_with("unable to read "));
    }

    #[rstest]
    fn negative_current_passes_through() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "BAT0", "Battery", Some("4200000"), Some("-230000"));

        let source = PowerSupplyBatterySource::new(root.path(), None);

        assert_eq!(source.current_now_microamps().unwrap(), -230_000);
    }

    #[rstest]
    fn configured_supply_name_overrides_detection() {
        let root = tempdir().unwrap();
        create_supply(root.path(), "BAT0", "Battery", Some("4200000"), None);
        create_supply(root.path(), "BAT1", "Battery", Some("3900000"), None);

        let source = PowerSupplyBatterySource::new(root.path(), Some("BAT1".to_string()));

        let snapshot = source.status_snapshot().unwrap();
        assert_eq!(snapshot.voltage_millivolts, Some(3900));
    }

    fn create_supply(
        root: &Path,
        name: &str,
        supply_type: &str,
        voltage_microvolts: Option<&str>,
        current_microamps: Option<&str>,
    ) {
        let supply = root.join(name);
        create_dir(&supply).unwrap();
        write(supply.join("type"), format!("{}\n", supply_type)).unwrap();

        let mut uevent = format!(
            "POWER_SUPPLY_NAME={}\nPOWER_SUPPLY_TYPE={}\nPOWER_SUPPLY_STATUS=Discharging\n",
            name, supply_type
        );
        if let Some(voltage) = voltage_microvolts {
            uevent.push_str(&format!("POWER_SUPPLY_VOLTAGE_NOW={}\n", voltage));
        }
        write(supply.join("uevent"), uevent).unwrap();

        if let Some(current) = current_microamps {
            write(supply.join("current_now"), format!("{}\n", current)).unwrap();
        }
    }
}
