//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{path::Path, time::Duration};

use argh::FromArgs;
use eyre::{eyre, Result};
use log::LevelFilter;

mod read_stats;

use crate::cli::batteryctl::read_stats::{read_stats, watch_stats};
use crate::cli::show_settings::show_settings;
use crate::cli::{from_env, init_logger};
use crate::config::Config;

#[derive(FromArgs)]
/// A command line utility to query batteryd
struct BatteryctlArgs {
    #[argh(subcommand)]
    command: BatteryctlCommand,

    /// use configuration file
    #[argh(option, short = 'c')]
    config_file: Option<String>,

    /// show version information
    #[argh(switch, short = 'v')]
    #[allow(dead_code)]
    version: bool,

    /// verbose output
    #[argh(switch, short = 'V')]
    verbose: bool,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum BatteryctlCommand {
    Read(ReadArgs),
    Watch(WatchArgs),
    ShowSettings(ShowSettingsArgs),
}

#[derive(FromArgs)]
/// print one battery reading
#[argh(subcommand, name = "read")]
struct ReadArgs {
    /// print the raw JSON response instead of the formatted reading
    #[argh(switch)]
    json: bool,
}

#[derive(FromArgs)]
/// print battery readings continuously
#[argh(subcommand, name = "watch")]
struct WatchArgs {
    /// seconds between readings (default 1)
    #[argh(option, default = "1")]
    interval_seconds: u64,
}

#[derive(FromArgs)]
/// show batteryd settings
#[argh(subcommand, name = "show-settings")]
struct ShowSettingsArgs {}

pub fn main() -> Result<()> {
    let args: BatteryctlArgs = from_env();

    init_logger(if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    })?;

    let config_path = args.config_file.as_ref().map(Path::new);
    let config = Config::read_from_system(config_path)?;

    match args.command {
        BatteryctlCommand::Read(ReadArgs { json }) => read_stats(&config, json),
        BatteryctlCommand::Watch(WatchArgs { interval_seconds }) => {
            if interval_seconds == 0 {
                return Err(eyre!("--interval-seconds must be at least 1"));
            }
            watch_stats(&config, Duration::from_secs(interval_seconds))
        }
        BatteryctlCommand::ShowSettings(_) => show_settings(config_path),
    }
}
