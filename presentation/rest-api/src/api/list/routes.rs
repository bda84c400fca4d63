use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use business::domain::list::use_cases::delete::{DeleteListParams, DeleteListUseCase};
use business::domain::list::use_cases::duplicate::{DuplicateListParams, DuplicateListUseCase};
use business::domain::list::use_cases::get_all::{GetAllListsParams, GetAllListsUseCase};
use business::domain::list::use_cases::get_by_id::{GetListByIdParams, GetListByIdUseCase};
use business::domain::list::use_cases::share::{ShareListParams, ShareListUseCase};
use business::domain::list::use_cases::unshare::{UnshareListParams, UnshareListUseCase};
use business::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::list::dto::{
    CreateListRequest, ListDetailResponse, ListResponse, ShareListRequest, ShareResponse,
    UpdateListRequest,
};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ListApi {
    get_all_use_case: Arc<dyn GetAllListsUseCase>,
    get_by_id_use_case: Arc<dyn GetListByIdUseCase>,
    create_use_case: Arc<dyn CreateListUseCase>,
    update_use_case: Arc<dyn UpdateListUseCase>,
    delete_use_case: Arc<dyn DeleteListUseCase>,
    duplicate_use_case: Arc<dyn DuplicateListUseCase>,
    share_use_case: Arc<dyn ShareListUseCase>,
    unshare_use_case: Arc<dyn UnshareListUseCase>,
}

impl ListApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_all_use_case: Arc<dyn GetAllListsUseCase>,
        get_by_id_use_case: Arc<dyn GetListByIdUseCase>,
        create_use_case: Arc<dyn CreateListUseCase>,
        update_use_case: Arc<dyn UpdateListUseCase>,
        delete_use_case: Arc<dyn DeleteListUseCase>,
        duplicate_use_case: Arc<dyn DuplicateListUseCase>,
        share_use_case: Arc<dyn ShareListUseCase>,
        unshare_use_case: Arc<dyn UnshareListUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            duplicate_use_case,
            share_use_case,
            unshare_use_case,
        }
    }
}

fn bad_request(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

fn parse_market_ids(raw: Option<Vec<String>>) -> Result<Option<Vec<Uuid>>, ()> {
    match raw {
        None => Ok(None),
        Some(ids) => ids
            .iter()
            .map(|id| Uuid::parse_str(id).map_err(|_| ()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
    }
}

/// Shopping list API
///
/// Lists are visible to their owner and to anyone the list is shared
/// with. Delete, share and unshare are owner-only; everything else is
/// open to shared users too.
#[OpenApi]
impl ListApi {
    /// List all accessible lists
    ///
    /// Returns lists owned by or shared with the caller, annotated with
    /// their markets and an `is_shared` flag.
    #[oai(path = "/lists", method = "get", tag = "ApiTags::Lists")]
    async fn get_all(&self, auth: FirebaseBearer) -> GetAllListsResponse {
        let params = GetAllListsParams {
            identity: auth.0.identity(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(lists) => {
                let responses: Vec<ListResponse> = lists.into_iter().map(|l| l.into()).collect();
                GetAllListsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllListsResponse::InternalError(json)
            }
        }
    }

    /// Get a list with its items
    ///
    /// Returns `403` for lists the caller cannot access, `404` for lists
    /// that do not exist. Share principals appear only for the owner.
    #[oai(path = "/lists/:id", method = "get", tag = "ApiTags::Lists")]
    async fn get_by_id(&self, auth: FirebaseBearer, id: Path<String>) -> GetListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetListResponse::BadRequest(bad_request("list.invalid_id")),
        };

        let params = GetListByIdParams {
            id: uuid,
            identity: auth.0.identity(),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(detail) => GetListResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetListResponse::Forbidden(json),
                    404 => GetListResponse::NotFound(json),
                    _ => GetListResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a list
    #[oai(path = "/lists", method = "post", tag = "ApiTags::Lists")]
    async fn create(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateListRequest>,
    ) -> CreateListResponse {
        let market_ids = match parse_market_ids(body.0.market_ids) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(()) => return CreateListResponse::BadRequest(bad_request("list.invalid_market_id")),
        };

        let params = CreateListParams {
            identity: auth.0.identity(),
            name: body.0.name,
            market_ids,
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListResponse::BadRequest(json),
                    _ => CreateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a list
    ///
    /// Renames the list and/or replaces its market associations.
    /// Available to shared users as well as the owner.
    #[oai(path = "/lists/:id", method = "put", tag = "ApiTags::Lists")]
    async fn update(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateListRequest>,
    ) -> UpdateListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UpdateListResponse::BadRequest(bad_request("list.invalid_id")),
        };
        let market_ids = match parse_market_ids(body.0.market_ids) {
            Ok(ids) => ids,
            Err(()) => return UpdateListResponse::BadRequest(bad_request("list.invalid_market_id")),
        };

        let params = UpdateListParams {
            id: uuid,
            identity: auth.0.identity(),
            name: body.0.name,
            market_ids,
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateListResponse::BadRequest(json),
                    403 => UpdateListResponse::Forbidden(json),
                    404 => UpdateListResponse::NotFound(json),
                    _ => UpdateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a list
    ///
    /// Owner only. Removes the list with its items, market associations
    /// and shares.
    #[oai(path = "/lists/:id", method = "delete", tag = "ApiTags::Lists")]
    async fn delete(&self, auth: FirebaseBearer, id: Path<String>) -> DeleteListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteListResponse::BadRequest(bad_request("list.invalid_id")),
        };

        let params = DeleteListParams {
            id: uuid,
            identity: auth.0.identity(),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteListResponse::Forbidden(json),
                    404 => DeleteListResponse::NotFound(json),
                    _ => DeleteListResponse::InternalError(json),
                }
            }
        }
    }

    /// Duplicate a list
    ///
    /// Creates a copy owned by the caller with the same markets and
    /// items, all unpurchased.
    #[oai(path = "/lists/:id/duplicate", method = "post", tag = "ApiTags::Lists")]
    async fn duplicate(&self, auth: FirebaseBearer, id: Path<String>) -> DuplicateListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DuplicateListResponse::BadRequest(bad_request("list.invalid_id")),
        };

        let params = DuplicateListParams {
            id: uuid,
            identity: auth.0.identity(),
        };

        match self.duplicate_use_case.execute(params).await {
            Ok(list) => DuplicateListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DuplicateListResponse::Forbidden(json),
                    404 => DuplicateListResponse::NotFound(json),
                    _ => DuplicateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Share a list
    ///
    /// Owner only. Invites an email address; sharing twice with the
    /// same address is a conflict.
    #[oai(path = "/lists/:id/share", method = "post", tag = "ApiTags::Lists")]
    async fn share(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<ShareListRequest>,
    ) -> ShareListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return ShareListResponse::BadRequest(bad_request("list.invalid_id")),
        };

        let params = ShareListParams {
            id: uuid,
            identity: auth.0.identity(),
            email: body.0.email,
        };

        match self.share_use_case.execute(params).await {
            Ok(share) => ShareListResponse::Created(Json(ShareResponse {
                list_id: share.list_id.to_string(),
                shared_principal: share.shared_principal,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ShareListResponse::BadRequest(json),
                    403 => ShareListResponse::Forbidden(json),
                    404 => ShareListResponse::NotFound(json),
                    409 => ShareListResponse::Conflict(json),
                    _ => ShareListResponse::InternalError(json),
                }
            }
        }
    }

    /// Revoke a share
    ///
    /// Owner only. Removes the principal's access to the list.
    #[oai(
        path = "/lists/:id/share/:principal",
        method = "delete",
        tag = "ApiTags::Lists"
    )]
    async fn unshare(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        principal: Path<String>,
    ) -> UnshareListResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return UnshareListResponse::BadRequest(bad_request("list.invalid_id")),
        };

        let params = UnshareListParams {
            id: uuid,
            identity: auth.0.identity(),
            principal: principal.0,
        };

        match self.unshare_use_case.execute(params).await {
            Ok(()) => UnshareListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => UnshareListResponse::Forbidden(json),
                    404 => UnshareListResponse::NotFound(json),
                    _ => UnshareListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ListResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListResponse {
    #[oai(status = 200)]
    Ok(Json<ListDetailResponse>),
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
pub enum CreateListResponse {
    #[oai(status = 201)]
    Created(Json<ListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateListResponse {
    #[oai(status = 200)]
    Ok(Json<ListResponse>),
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
pub enum DeleteListResponse {
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

#[derive(poem_openapi::ApiResponse)]
pub enum DuplicateListResponse {
    #[oai(status = 201)]
    Created(Json<ListResponse>),
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
pub enum ShareListResponse {
    #[oai(status = 201)]
    Created(Json<ShareResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UnshareListResponse {
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
