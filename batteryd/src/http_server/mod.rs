//
// Copyright (c) batteryd contributors
// See License.txt for details
mod handler;
mod response;
mod server;

pub use handler::{HttpHandler, HttpHandlerResult};
pub use response::{error_response, json_response, ErrorBody, ERROR_CATEGORY};
pub use server::HttpServer;
