use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// The only layer allowed to turn failures into status codes.
///
/// Messages carried here are already user-facing: internal failure
/// detail never crosses this boundary.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    BadClientData(String),
    #[error("{0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
