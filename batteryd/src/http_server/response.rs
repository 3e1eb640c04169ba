//
// Copyright (c) batteryd contributors
// See License.txt for details
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tiny_http::{Header, Response, ResponseBox};

/// Category label carried by every failure response. It never varies;
/// clients key off the message.
pub const ERROR_CATEGORY: &str = "Error";

/// Wire form of a failed operation: the fixed category and the underlying
/// platform message, verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ERROR_CATEGORY.to_string(),
            message: message.into(),
        }
    }

    /// Serialized form. Built with `json!` so callers are not forced to
    /// handle an error that two strings cannot produce.
    pub fn to_json(&self) -> String {
        json!({ "error": self.error, "message": self.message }).to_string()
    }
}

fn json_content_type() -> Result<Header> {
    Header::from_bytes("Content-Type", "application/json").map_err(|_| eyre!("Invalid header"))
}

/// 200 response around an already serialized JSON body.
pub fn json_response(body: String) -> Result<ResponseBox> {
    Ok(Response::from_string(body)
        .with_header(json_content_type()?)
        .boxed())
}

/// 500 response carrying an [ErrorBody] for a failed operation.
pub fn error_response(message: &str) -> Result<ResponseBox> {
    Ok(Response::from_string(ErrorBody::new(message).to_json())
        .with_status_code(500)
        .with_header(json_content_type()?)
        .boxed())
}

#[cfg(test)]
mod tests {
    use tiny_http::StatusCode;

    use super::*;

    #[test]
    fn error_body_wire_format() {
        assert_eq!(
            ErrorBody::new("service unreachable").to_json(),
            "{\"error\":\"Error\",\"message\":\"service unreachable\"}"
        );
    }

    #[test]
    fn error_response_is_a_500() {
        let response = error_response("boom").unwrap();
        assert_eq!(response.status_code(), StatusCode(500));
    }

    #[test]
    fn json_response_is_a_200() {
        let response = json_response("{}".to_string()).unwrap();
        assert_eq!(response.status_code(), StatusCode(200));
    }
}
