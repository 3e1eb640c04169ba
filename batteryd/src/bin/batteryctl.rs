//
// Copyright (c) batteryd contributors
// See License.txt for details
use batteryd::cli;

/// batteryctl is an alias to the main function in cli.rs
///
/// See bin/batteryd.rs for why multiple binaries share one entry point.
fn main() {
    cli::main()
}
