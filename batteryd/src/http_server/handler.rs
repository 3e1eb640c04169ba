//
// Copyright (c) batteryd contributors
// See License.txt for details
use eyre::Result;
use tiny_http::{Request, ResponseBox};

/// What a handler did with a request.
pub enum HttpHandlerResult {
    /// Handled; respond with this response.
    Response(ResponseBox),
    /// Handler failed unexpectedly (answered with an empty 500).
    Error(String),
    /// Not this handler's request. Try the next one.
    NotHandled,
}

/// This little helper makes it possible to use the ? operator in handlers
/// when you have already checked method and path and know that they should
/// handle the request, possibly failing while doing so.
///
/// ```
/// # use eyre::Result;
/// use tiny_http::{Request, Response, ResponseBox};
/// use batteryd::http_server::{HttpHandler, HttpHandlerResult};
///
/// struct PingHandler;
///
/// impl PingHandler {
///   fn handle_read(&self) -> Result<ResponseBox> {
///     Ok(Response::from_string("pong").boxed())
///   }
/// }
///
/// impl HttpHandler for PingHandler {
///   fn handle_request(&self, r: &mut Request) -> HttpHandlerResult {
///     if r.url() == "/ping" {
///       self.handle_read().into()
///     }
///     else {
///       HttpHandlerResult::NotHandled
///     }
///   }
/// }
/// ```
impl From<Result<ResponseBox>> for HttpHandlerResult {
    fn from(r: Result<ResponseBox>) -> Self {
        match r {
            Ok(response) => HttpHandlerResult::Response(response),
            Err(e) => HttpHandlerResult::Error(e.to_string()),
        }
    }
}

/// A route served by the HTTP boundary. Handlers are shared across the
/// server's worker threads.
pub trait HttpHandler: Send + Sync {
    /// Handle a request and prepare the response.
    fn handle_request(&self, request: &mut Request) -> HttpHandlerResult;
}
