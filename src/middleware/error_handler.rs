use actix_web::{
    error::{JsonPayloadError, PathError},
    Error, HttpRequest,
};

use crate::core::AppError;

/// Turn malformed JSON bodies into the standard 400 error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Turn unparsable path ids into the standard 400 error body
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid path parameter: {}", err)).into()
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request"
    );
}
