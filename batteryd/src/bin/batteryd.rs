//
// Copyright (c) batteryd contributors
// See License.txt for details
use batteryd::cli;

/// batteryd is an alias to the main function in cli.rs
///
/// On target devices only the batteryd binary is installed and batteryctl is
/// symlinked to it; the entry point dispatches on the invoked name. Building
/// both binaries here mimics that setup during development without a
/// post-build symlinking step.
fn main() {
    cli::main()
}
