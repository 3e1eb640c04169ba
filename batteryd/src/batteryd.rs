//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eyre::Result;
use log::info;

use crate::battery::{
    BatteryStatsHandler, BatteryStatsProvider, PowerSupplyBatterySource, BATTERY_STATS_URL,
};
use crate::config::Config;
use crate::http_server::{HttpHandler, HttpServer};

#[derive(PartialEq, Eq)]
pub enum BatterydLoopResult {
    Terminate,
    Relaunch,
}

/// Run the daemon until it is told to stop: build the battery provider,
/// serve it over localhost HTTP and wait for signals.
pub fn batteryd_loop(config: Config) -> Result<BatterydLoopResult> {
    // Termination signals only set a flag; the wait loop below reacts.
    let term_signals = [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];
    let term = Arc::new(AtomicBool::new(false));
    for signal in term_signals {
        signal_hook::flag::register(signal, Arc::clone(&term))?;
    }

    // SIGHUP asks for a configuration reload, served as a restart.
    let reload = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&reload))?;

    let provider = BatteryStatsProvider::new(PowerSupplyBatterySource::from(&config));

    let http_handlers: Vec<Box<dyn HttpHandler>> =
        vec![Box::new(BatteryStatsHandler::new(provider))];

    let http_server = HttpServer::new(http_handlers);
    http_server.start(config.config_file.http_server.bind_address)?;

    info!(
        "Serving battery stats on http://{}{}",
        config.config_file.http_server.bind_address, BATTERY_STATS_URL
    );

    // All the work happens on the server threads. shuteye::sleep returns
    // early when a signal lands, so shutdown stays prompt.
    while !term.load(Ordering::Relaxed) && !reload.load(Ordering::Relaxed) {
        shuteye::sleep(Duration::from_secs(60));
    }

    if reload.load(Ordering::Relaxed) {
        info!("Received SIGHUP - reloading configuration.");
        Ok(BatterydLoopResult::Relaunch)
    } else {
        info!("batteryd shutting down...");
        Ok(BatterydLoopResult::Terminate)
    }
}
