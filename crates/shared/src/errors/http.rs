use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{domain::responses::ErrorResponse, errors::service::ServiceError};

/// Boundary conversion: every service failure becomes a well-formed
/// `{success: false, ...}` body. The transport status stays 200 so callers
/// only ever branch on the `success` flag.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = match self {
            ServiceError::Validation(errors) => ErrorResponse::validation(errors),
            ServiceError::Repo(err) => ErrorResponse::message(err.to_string()),
            ServiceError::Internal(msg) | ServiceError::Custom(msg) => ErrorResponse::message(msg),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}
