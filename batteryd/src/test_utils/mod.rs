//
// Copyright (c) batteryd contributors
// See License.txt for details
mod test_instant;

pub use test_instant::TestInstant;
