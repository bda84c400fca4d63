use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::list::errors::ListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ListError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "list.name_empty"),
            ListError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "list.not_found"),
            ListError::AccessDenied => {
                (StatusCode::FORBIDDEN, "AccessDenied", "list.access_denied")
            }
            ListError::InvalidShareEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "list.invalid_share_email",
            ),
            ListError::AlreadyShared => (StatusCode::CONFLICT, "Conflict", "list.already_shared"),
            ListError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
