//! Profile handlers.
//!
//! Create and update share one contract: the profile is replaced wholesale.

use actix_web::{HttpResponse, web};

use postboard_core::domain::ProfileDraft;
use postboard_shared::EmptyObject;
use postboard_shared::dto::ProfileRequest;

use super::found_or_empty;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /profile
pub async fn get_profile(state: web::Data<AppState>) -> HttpResponse {
    tracing::info!(route = "get_profile", "Reading profile");
    found_or_empty(state.profile.get().await)
}

/// POST /profile
pub async fn create_profile(
    state: web::Data<AppState>,
    body: web::Json<ProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(route = "create_profile", name = %req.name);

    let profile = state.profile.set(ProfileDraft::new(req.name)).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /profile
pub async fn update_profile(
    state: web::Data<AppState>,
    body: web::Json<ProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(route = "update_profile", name = %req.name);

    let profile = state.profile.set(ProfileDraft::new(req.name)).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /profile
pub async fn delete_profile(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!(route = "delete_profile", "Clearing profile");

    state.profile.clear().await?;
    Ok(HttpResponse::Ok().json(EmptyObject {}))
}
