//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::io::{stdout, Write};
use std::path::Path;

use eyre::Result;
use serde_json::Value;

use crate::build_info::VERSION;
use crate::config::{BatterydConfig, Config};

fn dump_settings(
    writer: &mut impl Write,
    config: &Value,
    config_source: &str,
    version: &str,
) -> Result<()> {
    writeln!(writer, "Settings ({}):", config_source)?;
    writeln!(writer, "{}", serde_json::to_string_pretty(config)?)?;
    writeln!(writer)?;
    writeln!(writer, "batteryd version {}", version)?;
    Ok(())
}

pub fn show_settings(config_path: Option<&Path>) -> Result<()> {
    let config = BatterydConfig::parse_config(config_path)?;
    let config_source = match config_path {
        Some(path) => path.display().to_string(),
        None => format!(
            "builtin defaults, {} if present",
            Config::DEFAULT_CONFIG_PATH
        ),
    };

    dump_settings(&mut stdout(), &config, &config_source, VERSION)
}
