//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{
    io::{stdout, Write},
    sync::atomic::{AtomicBool, Ordering},
    sync::Arc,
    time::Duration,
};

use eyre::{Context, Result};

use crate::battery::BatteryReading;
use crate::cli::batteryd_client::BatterydClient;
use crate::config::Config;
use crate::util::task::{loop_with_interval, LoopContinuation};

/// One-shot read, printed for humans (or as the raw wire body with --json).
pub fn read_stats(config: &Config, json: bool) -> Result<()> {
    let client = BatterydClient::from_config(config)?;
    let reading = client
        .get_battery_stats()
        .wrap_err("Unable to read battery stats")?;

    write_reading(&mut stdout(), &reading, json)
}

/// Read at a fixed cadence until SIGINT/SIGTERM. A failed read is logged
/// and does not stop the loop.
pub fn watch_stats(config: &Config, interval: Duration) -> Result<()> {
    let client = BatterydClient::from_config(config)?;

    let term = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&term))?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&term))?;

    loop_with_interval(
        || {
            let reading = client
                .get_battery_stats()
                .wrap_err("Unable to read battery stats")?;
            write_sample(&mut stdout(), &reading)
        },
        || {
            if term.load(Ordering::Relaxed) {
                LoopContinuation::Stop
            } else {
                LoopContinuation::KeepRunning
            }
        },
        interval,
    );

    Ok(())
}

// Power is derived for display only, it never travels over the wire. The
// current's sign depends on the platform so the magnitude is used.
fn power_watts(reading: &BatteryReading) -> f64 {
    reading.voltage * (reading.current.abs() / 1000.0)
}

fn write_reading(writer: &mut impl Write, reading: &BatteryReading, json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string(reading)?)?;
        return Ok(());
    }
    writeln!(writer, "Voltage: {:.2} V", reading.voltage)?;
    writeln!(writer, "Current: {:.0} mA", reading.current)?;
    writeln!(writer, "Power:   {:.2} W", power_watts(reading))?;
    Ok(())
}

fn write_sample(writer: &mut impl Write, reading: &BatteryReading) -> Result<()> {
    writeln!(
        writer,
        "{:.2} V  {:.0} mA  {:.2} W",
        reading.voltage,
        reading.current,
        power_watts(reading)
    )?;
    Ok(())
}
