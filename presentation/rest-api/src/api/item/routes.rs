use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::mark_purchased::{
    MarkItemPurchasedParams, MarkItemPurchasedUseCase,
};
use business::domain::item::use_cases::unmark_purchased::{
    UnmarkItemPurchasedParams, UnmarkItemPurchasedUseCase,
};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{
    CreateItemRequest, ItemResponse, MarkItemPurchasedRequest, UpdateItemRequest,
};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    mark_purchased_use_case: Arc<dyn MarkItemPurchasedUseCase>,
    unmark_purchased_use_case: Arc<dyn UnmarkItemPurchasedUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        mark_purchased_use_case: Arc<dyn MarkItemPurchasedUseCase>,
        unmark_purchased_use_case: Arc<dyn UnmarkItemPurchasedUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            mark_purchased_use_case,
            unmark_purchased_use_case,
            delete_use_case,
        }
    }
}

fn invalid_id(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

/// List item API
///
/// Item access is resolved through the item's parent list: anyone the
/// list is shared with can create, edit, purchase and delete items.
#[OpenApi]
impl ItemApi {
    /// Add an item to a list
    #[oai(path = "/lists/:list_id/items", method = "post", tag = "ApiTags::Items")]
    async fn create(
        &self,
        auth: FirebaseBearer,
        list_id: Path<String>,
        body: Json<CreateItemRequest>,
    ) -> CreateItemResponse {
        let list_uuid = match Uuid::parse_str(&list_id.0) {
            Ok(uuid) => uuid,
            Err(_) => return CreateItemResponse::BadRequest(invalid_id("list.invalid_id")),
        };

        let params = CreateItemParams {
            list_id: list_uuid,
            identity: auth.0.identity(),
            name: body.0.name,
            category: body.0.category,
            notes: body.0.notes,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    403 => CreateItemResponse::Forbidden(json),
                    404 => CreateItemResponse::NotFound(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Partial update: only supplied fields change.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> UpdateItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateItemResponse::BadRequest(invalid_id("item.invalid_id")),
        };
        let market_id = match &body.0.market_id {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return UpdateItemResponse::BadRequest(invalid_id("item.invalid_market_id"));
                }
            },
            None => None,
        };

        let params = UpdateItemParams {
            id: uuid,
            identity: auth.0.identity(),
            name: body.0.name,
            category: body.0.category,
            notes: body.0.notes,
            is_purchased: body.0.is_purchased,
            price: body.0.price,
            quantity: body.0.quantity,
            market_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    403 => UpdateItemResponse::Forbidden(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark an item purchased
    ///
    /// Records the purchase with price, quantity and an optional market
    /// linked to the item's list.
    #[oai(
        path = "/items/:id/mark-purchased",
        method = "post",
        tag = "ApiTags::Items"
    )]
    async fn mark_purchased(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<MarkItemPurchasedRequest>,
    ) -> MarkPurchasedResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return MarkPurchasedResponse::BadRequest(invalid_id("item.invalid_id")),
        };
        let market_id = match &body.0.market_id {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(uuid) => Some(uuid),
                Err(_) => {
                    return MarkPurchasedResponse::BadRequest(invalid_id("item.invalid_market_id"));
                }
            },
            None => None,
        };

        let params = MarkItemPurchasedParams {
            id: uuid,
            identity: auth.0.identity(),
            price: body.0.price,
            quantity: body.0.quantity,
            market_id,
        };

        match self.mark_purchased_use_case.execute(params).await {
            Ok(item) => MarkPurchasedResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => MarkPurchasedResponse::BadRequest(json),
                    403 => MarkPurchasedResponse::Forbidden(json),
                    404 => MarkPurchasedResponse::NotFound(json),
                    _ => MarkPurchasedResponse::InternalError(json),
                }
            }
        }
    }

    /// Unmark an item purchased
    ///
    /// Clears the purchase flag together with price, quantity and market.
    #[oai(
        path = "/items/:id/unmark-purchased",
        method = "post",
        tag = "ApiTags::Items"
    )]
    async fn unmark_purchased(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
    ) -> MarkPurchasedResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return MarkPurchasedResponse::BadRequest(invalid_id("item.invalid_id")),
        };

        let params = UnmarkItemPurchasedParams {
            id: uuid,
            identity: auth.0.identity(),
        };

        match self.unmark_purchased_use_case.execute(params).await {
            Ok(item) => MarkPurchasedResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => MarkPurchasedResponse::BadRequest(json),
                    403 => MarkPurchasedResponse::Forbidden(json),
                    404 => MarkPurchasedResponse::NotFound(json),
                    _ => MarkPurchasedResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, auth: FirebaseBearer, id: Path<String>) -> DeleteItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteItemResponse::BadRequest(invalid_id("item.invalid_id")),
        };

        let params = DeleteItemParams {
            id: uuid,
            identity: auth.0.identity(),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteItemResponse::Forbidden(json),
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MarkPurchasedResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
