use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ItemError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "item.name_empty"),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "item.not_found"),
            ItemError::AccessDenied => {
                (StatusCode::FORBIDDEN, "AccessDenied", "item.access_denied")
            }
            ItemError::NonPositivePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.price_not_positive",
            ),
            ItemError::NonPositiveQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.quantity_not_positive",
            ),
            ItemError::MarketNotLinked => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.market_not_linked",
            ),
            ItemError::MissingPurchaseData => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.purchase_data_missing",
            ),
            ItemError::NotPurchased => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.not_purchased",
            ),
            ItemError::Repository(_) => (
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
