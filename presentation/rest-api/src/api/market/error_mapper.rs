use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::market::errors::MarketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MarketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MarketError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "market.name_empty",
            ),
            MarketError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "market.not_found"),
            MarketError::Repository(_) => (
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
