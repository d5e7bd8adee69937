use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode,
};
use derive_more::Display;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Display, PartialEq)]
pub enum PayrollError {
    #[display(fmt = "invalid {}: {}", field, reason)]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    #[display(fmt = "malformed request body: {}", _0)]
    MalformedBody(String),
}

impl std::error::Error for PayrollError {}

impl ResponseError for PayrollError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

/// Turns extractor failures into the JSON error body used everywhere else.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "Rejected request body");
    PayrollError::MalformedBody(err.to_string()).into()
}
