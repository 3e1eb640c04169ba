//
// Copyright (c) batteryd contributors
// See License.txt for details
pub mod battery;
mod batteryd;
mod build_info;
pub mod cli;
mod config;
pub mod http_server;
#[cfg(test)]
mod test_utils;
mod util;
