use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::profile::errors::ProfileError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProfileError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProfileError::DisplayNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "profile.display_name_empty",
            ),
            ProfileError::InvalidPhotoUrl => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "profile.invalid_photo_url",
            ),
            ProfileError::Repository(_) => (
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
