//
// Copyright (c) batteryd contributors
// See License.txt for details
use crate::build_info::VERSION;

pub fn format_version() -> String {
    format!("VERSION={}", VERSION)
}
