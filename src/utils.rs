use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::domain::{FieldError, ValidationErrors};

#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a [FieldError]>,
}

pub fn build_error_response(status_code: StatusCode, message: String) -> HttpResponse {
    let error_response = ErrorResponse {
        code: status_code.as_u16(),
        message,
        errors: None,
    };
    HttpResponse::build(status_code).json(error_response)
}

pub fn build_validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let status_code = StatusCode::BAD_REQUEST;
    let error_response = ErrorResponse {
        code: status_code.as_u16(),
        message: errors.to_string(),
        errors: Some(errors.as_slice()),
    };
    HttpResponse::build(status_code).json(error_response)
}

pub fn error_chain_fmt(
    e: &dyn std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;

    let mut current = e.source();
    while let Some(cause) = current {
        // `{:#?}` prints each cause with Debug, `{:?}` with Display
        if f.alternate() {
            writeln!(f, "Caused by:\n\t{cause:?}")?;
        } else {
            writeln!(f, "Caused by:\n\t{cause}")?;
        }
        current = cause.source();
    }
    Ok(())
}

/// Malformed or non-JSON bodies get the same error envelope as validation failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        build_error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON payload: {err}"));
    InternalError::from_response(err, response).into()
}

/// An identifier that does not parse cannot resolve to a record.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = build_error_response(StatusCode::NOT_FOUND, "resource not found".to_string());
    InternalError::from_response(err, response).into()
}
