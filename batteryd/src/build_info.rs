//
// Copyright (c) batteryd contributors
// See License.txt for details
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
