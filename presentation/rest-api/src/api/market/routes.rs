use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::market::use_cases::create::{CreateMarketParams, CreateMarketUseCase};
use business::domain::market::use_cases::delete::{DeleteMarketParams, DeleteMarketUseCase};
use business::domain::market::use_cases::get_all::{GetAllMarketsParams, GetAllMarketsUseCase};
use business::domain::market::use_cases::update::{UpdateMarketParams, UpdateMarketUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::market::dto::{CreateMarketRequest, MarketResponse, UpdateMarketRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct MarketApi {
    create_use_case: Arc<dyn CreateMarketUseCase>,
    get_all_use_case: Arc<dyn GetAllMarketsUseCase>,
    update_use_case: Arc<dyn UpdateMarketUseCase>,
    delete_use_case: Arc<dyn DeleteMarketUseCase>,
}

impl MarketApi {
    pub fn new(
        create_use_case: Arc<dyn CreateMarketUseCase>,
        get_all_use_case: Arc<dyn GetAllMarketsUseCase>,
        update_use_case: Arc<dyn UpdateMarketUseCase>,
        delete_use_case: Arc<dyn DeleteMarketUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Market management API
///
/// Endpoints for managing the caller's markets.
#[OpenApi]
impl MarketApi {
    /// List markets
    ///
    /// Returns the caller's markets ordered by name.
    #[oai(path = "/markets", method = "get", tag = "ApiTags::Markets")]
    async fn get_all(&self, auth: FirebaseBearer) -> GetAllMarketsResponse {
        let params = GetAllMarketsParams {
            user_id: auth.0.user_id.clone(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(markets) => {
                let responses: Vec<MarketResponse> =
                    markets.into_iter().map(|m| m.into()).collect();
                GetAllMarketsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllMarketsResponse::InternalError(json)
            }
        }
    }

    /// Create a market
    #[oai(path = "/markets", method = "post", tag = "ApiTags::Markets")]
    async fn create(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateMarketRequest>,
    ) -> CreateMarketResponse {
        let params = CreateMarketParams {
            user_id: auth.0.user_id.clone(),
            name: body.0.name,
        };

        match self.create_use_case.execute(params).await {
            Ok(market) => CreateMarketResponse::Created(Json(market.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateMarketResponse::BadRequest(json),
                    _ => CreateMarketResponse::InternalError(json),
                }
            }
        }
    }

    /// Rename a market
    #[oai(path = "/markets/:id", method = "put", tag = "ApiTags::Markets")]
    async fn update(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateMarketRequest>,
    ) -> UpdateMarketResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateMarketResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "market.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateMarketParams {
            id: uuid,
            user_id: auth.0.user_id.clone(),
            name: body.0.name,
        };

        match self.update_use_case.execute(params).await {
            Ok(market) => UpdateMarketResponse::Ok(Json(market.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateMarketResponse::BadRequest(json),
                    404 => UpdateMarketResponse::NotFound(json),
                    _ => UpdateMarketResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a market
    ///
    /// Removes the market, detaching it from lists and items first.
    #[oai(path = "/markets/:id", method = "delete", tag = "ApiTags::Markets")]
    async fn delete(&self, auth: FirebaseBearer, id: Path<String>) -> DeleteMarketResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteMarketResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "market.invalid_id".to_string(),
                }));
            }
        };

        let params = DeleteMarketParams {
            id: uuid,
            user_id: auth.0.user_id.clone(),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteMarketResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteMarketResponse::NotFound(json),
                    _ => DeleteMarketResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllMarketsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MarketResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateMarketResponse {
    #[oai(status = 201)]
    Created(Json<MarketResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateMarketResponse {
    #[oai(status = 200)]
    Ok(Json<MarketResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteMarketResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
