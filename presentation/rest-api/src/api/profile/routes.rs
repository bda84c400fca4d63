use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase};
use business::domain::profile::use_cases::update::{UpdateProfileParams, UpdateProfileUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{ProfileResponse, UpdateProfileRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    get_use_case: Arc<dyn GetProfileUseCase>,
    update_use_case: Arc<dyn UpdateProfileUseCase>,
}

impl ProfileApi {
    pub fn new(
        get_use_case: Arc<dyn GetProfileUseCase>,
        update_use_case: Arc<dyn UpdateProfileUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }
}

/// User profile API
#[OpenApi]
impl ProfileApi {
    /// Get the caller's profile
    ///
    /// Creates the profile on first access, seeded from the identity
    /// provider's display name and picture.
    #[oai(path = "/profile", method = "get", tag = "ApiTags::Profile")]
    async fn get(&self, auth: FirebaseBearer) -> GetProfileResponse {
        let params = GetProfileParams {
            user_id: auth.0.user_id.clone(),
            seed_display_name: auth.0.display_name.clone(),
            seed_photo_url: auth.0.photo_url.clone(),
        };

        match self.get_use_case.execute(params).await {
            Ok(profile) => GetProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProfileResponse::InternalError(json)
            }
        }
    }

    /// Update the caller's profile
    #[oai(path = "/profile", method = "put", tag = "ApiTags::Profile")]
    async fn update(
        &self,
        auth: FirebaseBearer,
        body: Json<UpdateProfileRequest>,
    ) -> UpdateProfileResponse {
        let params = UpdateProfileParams {
            user_id: auth.0.user_id.clone(),
            display_name: body.0.display_name,
            photo_url: body.0.photo_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(profile) => UpdateProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProfileResponse::BadRequest(json),
                    _ => UpdateProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
