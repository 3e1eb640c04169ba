#![allow(clippy::print_stdout, clippy::print_stderr)]
//
// Copyright (c) batteryd contributors
// See License.txt for details

use argh::{FromArgs, TopLevelCommand};
use eyre::{eyre, Result};
use log::LevelFilter;
use std::env::args;
use std::path::Path;
use stderrlog::{LogLevelNum, StdErrLog};

mod batteryctl;
mod batteryd;
mod batteryd_client;
mod show_settings;
mod version;

pub use batteryd_client::*;

use crate::cli::version::format_version;

fn build_logger(level: LevelFilter) -> StdErrLog {
    let mut log = stderrlog::new();

    log.module("batteryd");
    log.verbosity(LogLevelNum::from(level));

    log
}

fn init_logger(level: LevelFilter) -> Result<()> {
    build_logger(level)
        .init()
        .map_err(|e| eyre!("Failed to initialize logger: {}", e))
}

/// Wrapper around argh to support flags acting as subcommands, like --version.
/// Inspired by https://gist.github.com/suluke/e0c672492126be0a4f3b4f0e1115d77c
pub struct WrappedArgs<T: FromArgs>(pub T);
impl<T: FromArgs> TopLevelCommand for WrappedArgs<T> {}
impl<T: FromArgs> FromArgs for WrappedArgs<T> {
    fn from_args(command_name: &[&str], args: &[&str]) -> Result<Self, argh::EarlyExit> {
        /// Pseudo subcommands that look like flags.
        #[derive(FromArgs)]
        struct CommandlikeFlags {
            /// show version information
            #[argh(switch, short = 'v')]
            version: bool,
        }

        match CommandlikeFlags::from_args(command_name, args) {
            Ok(CommandlikeFlags { version: true }) => Err(argh::EarlyExit {
                output: format_version(),
                status: Ok(()),
            }),
            _ => T::from_args(command_name, args).map(Self),
        }
    }
}

pub fn from_env<T: TopLevelCommand>() -> T {
    argh::from_env::<WrappedArgs<T>>().0
}

pub fn main() {
    let cmd_name = args().next().and_then(|arg0| {
        Path::new(&arg0)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
    });

    let result = match cmd_name.as_deref() {
        Some("batteryctl") => batteryctl::main(),
        Some("batteryd") => batteryd::main(),
        Some(cmd_name) => Err(eyre!(
            "Unknown command: {}. Should be batteryd/batteryctl.",
            cmd_name
        )),
        None => Err(eyre!("No command name found")),
    };

    match result {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(-1);
        }
    }
}
