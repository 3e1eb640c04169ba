//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{net::SocketAddr, sync::Arc, thread::spawn};

use eyre::{eyre, Result};
use log::{debug, trace, warn};
use threadpool::ThreadPool;
use tiny_http::{Request, Response, Server};

use crate::http_server::{HttpHandler, HttpHandlerResult};

/// Localhost boundary between the daemon and its clients. Requests go to
/// the first handler that claims them.
#[derive(Clone)]
pub struct HttpServer {
    handlers: Arc<Vec<Box<dyn HttpHandler>>>,
}

impl HttpServer {
    pub fn new(handlers: Vec<Box<dyn HttpHandler>>) -> Self {
        HttpServer {
            handlers: Arc::new(handlers),
        }
    }

    /// Bind and serve on a background thread. Does not block; the caller
    /// owns process lifetime.
    pub fn start(&self, listening_address: SocketAddr) -> Result<()> {
        let server = Server::http(listening_address).map_err(|e| {
            eyre!("Error starting server: could not bind to {listening_address}: {e}")
        })?;
        let handlers = self.handlers.clone();

        spawn(move || {
            debug!("HTTP server listening on {listening_address}");

            let pool = ThreadPool::new(4);
            for request in server.incoming_requests() {
                let handlers = handlers.clone();
                pool.execute(move || Self::handle_request(&handlers, request));
            }
        });

        Ok(())
    }

    fn handle_request(handlers: &[Box<dyn HttpHandler>], mut request: Request) {
        trace!("HTTP {} {}", request.method(), request.url());

        let method = request.method().to_owned();
        let url = request.url().to_owned();

        for handler in handlers.iter() {
            match handler.handle_request(&mut request) {
                HttpHandlerResult::NotHandled => continue,
                HttpHandlerResult::Response(response) => {
                    if let Err(e) = request.respond(response) {
                        warn!("HTTP: error sending response {} {}: {:?}", method, url, e);
                    }
                    return;
                }
                HttpHandlerResult::Error(e) => {
                    warn!("HTTP: error processing {} {}: {}", method, url, e);
                    let _r = request.respond(Response::empty(500));
                    return;
                }
            }
        }

        debug!("HTTP[404] {} {}", method, url);
        let _r = request.respond(Response::empty(404));
    }
}
