//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use eyre::{eyre, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::string::remove_comments;

const BUILTIN_CONFIG: &str = include_str!("../../builtin.conf");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BatterydConfig {
    pub http_server: HttpServerConfig,
    pub battery: BatteryConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub bind_address: SocketAddr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BatteryConfig {
    pub power_supply_dir: PathBuf,
    /// Power supply to read. Autodetected (first supply of type Battery)
    /// when unset.
    #[serde(default)]
    pub supply_name: Option<String>,
}

impl BatterydConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "/etc/batteryd.conf";

    /// Load the built-in defaults and merge the user configuration over
    /// them. An explicitly passed path must exist; the default path is
    /// optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(serde_json::from_value(Self::parse_config(config_path)?)?)
    }

    /// The merged configuration as a JSON document (what `load` reads and
    /// what show-settings prints).
    pub fn parse_config(config_path: Option<&Path>) -> Result<Value> {
        let mut config =
            Self::parse(BUILTIN_CONFIG).wrap_err("Error parsing built-in configuration")?;

        let (path, required) = match config_path {
            Some(path) => (path, true),
            None => (Path::new(Self::DEFAULT_CONFIG_PATH), false),
        };

        // Running without a config file at the default path is fine, the
        // builtin defaults apply.
        if required || path.exists() {
            let user_string = std::fs::read_to_string(path)
                .wrap_err(eyre!("Unable to read config file {}", path.display()))?;
            let user = Self::parse(&user_string)
                .wrap_err(eyre!("Error parsing {}", path.display()))?;
            Self::merge_into(&mut config, user);
        }

        Ok(config)
    }

    fn parse(config_string: &str) -> Result<Value> {
        let config = serde_json::from_str(&remove_comments(config_string))?;
        match config {
            Value::Object(_) => Ok(config),
            _ => Err(eyre!("Configuration must be a JSON object")),
        }
    }

    /// Recursively merge `overlay` into `dest`. Objects merge key by key,
    /// anything else replaces the destination value.
    fn merge_into(dest: &mut Value, overlay: Value) {
        match (dest, overlay) {
            (Value::Object(dest_map), Value::Object(overlay_map)) => {
                for (key, value) in overlay_map.into_iter() {
                    match dest_map.get_mut(&key) {
                        Some(dest_value) => Self::merge_into(dest_value, value),
                        None => {
                            dest_map.insert(key, value);
                        }
                    }
                }
            }
            (dest, overlay) => *dest = overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use rstest::rstest;
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn builtin_config_is_complete() {
        let config: BatterydConfig =
            serde_json::from_value(BatterydConfig::parse(BUILTIN_CONFIG).unwrap()).unwrap();

        assert_eq!(config.http_server.bind_address.port(), 8791);
        assert_eq!(
            config.battery.power_supply_dir,
            PathBuf::from("/sys/class/power_supply")
        );
        assert_eq!(config.battery.supply_name, None);
    }

    #[rstest]
    fn user_config_overrides_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batteryd.conf");
        write(
            &path,
            r#"{ /* pinned for this device */ "battery": { "supply_name": "BAT1" } }"#,
        )
        .unwrap();

        let config = BatterydConfig::load(Some(&path)).unwrap();

        assert_eq!(config.battery.supply_name, Some("BAT1".to_string()));
        // Keys the user did not touch keep their builtin values.
        assert_eq!(config.http_server.bind_address.port(), 8791);
    }

    #[rstest]
    fn explicit_config_path_must_exist() {
        let dir = tempdir().unwrap();
        assert!(BatterydConfig::load(Some(&dir.path().join("missing.conf"))).is_err());
    }

    #[rstest]
    fn non_object_config_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batteryd.conf");
        write(&path, "[1, 2, 3]").unwrap();

        assert!(BatterydConfig::load(Some(&path)).is_err());
    }

    #[rstest]
    #[case(json!({}), json!({"a": 1}), json!({"a": 1}))]
    #[case(json!({"a": 0}), json!({"a": 1}), json!({"a": 1}))]
    #[case(json!({"a": {"b": 1}}), json!({"a": {"c": 2}}), json!({"a": {"b": 1, "c": 2}}))]
    #[case(json!({"a": {"b": 1}}), json!({"a": 7}), json!({"a": 7}))]
    #[case(json!({"a": 1}), json!({}), json!({"a": 1}))]
    fn merge(#[case] mut dest: Value, #[case] overlay: Value, #[case] expected: Value) {
        BatterydConfig::merge_into(&mut dest, overlay);
        assert_eq!(dest, expected);
    }
}
