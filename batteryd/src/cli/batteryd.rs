//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{env, os::unix::process::CommandExt, path::Path, process::Command};

use argh::FromArgs;
use eyre::{eyre, Result};
use log::{info, LevelFilter};

use crate::batteryd::{batteryd_loop, BatterydLoopResult};
use crate::cli::{from_env, init_logger};
use crate::config::Config;

#[derive(FromArgs)]
/// Daemon serving live battery statistics to local clients.
struct BatterydArgs {
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

pub fn main() -> Result<()> {
    let args: BatterydArgs = from_env();

    init_logger(if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    })?;

    let config_path = args.config_file.as_ref().map(Path::new);
    let config = Config::read_from_system(config_path)?;

    match batteryd_loop(config)? {
        BatterydLoopResult::Terminate => Ok(()),
        BatterydLoopResult::Relaunch => {
            // The HTTP listener cannot be rebound in-process; re-exec to
            // reload with a clean slate.
            info!("Restarting batteryd");
            let err = Command::new(env::current_exe()?)
                .args(env::args_os().skip(1))
                .exec();
            Err(eyre!("Unable to restart batteryd: {}", err))
        }
    }
}
