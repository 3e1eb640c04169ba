//
// Copyright (c) batteryd contributors
// See License.txt for details
pub mod string;
pub mod task;
pub mod time_measure;
