//! Comment handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::CommentDraft;
use postboard_shared::dto::CommentRequest;

use super::found_or_empty;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /comments
pub async fn list_comments(state: web::Data<AppState>) -> HttpResponse {
    tracing::info!(route = "get_comments", "Listing comments");
    HttpResponse::Ok().json(state.comments.list().await)
}

/// POST /comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(route = "create_comment", post_id = req.post_id, body = %req.body);

    let comment = state
        .comments
        .create(CommentDraft::new(req.body, req.post_id))
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// GET /comments/{id}
pub async fn get_comment(state: web::Data<AppState>, path: web::Path<u64>) -> HttpResponse {
    let id = path.into_inner();
    tracing::info!(route = "get_comment", id);

    found_or_empty(state.comments.find_by_id(id).await)
}

/// PUT /comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    tracing::info!(route = "update_comment", id, post_id = req.post_id, body = %req.body);

    let comment = state
        .comments
        .update(id, CommentDraft::new(req.body, req.post_id))
        .await?;

    Ok(found_or_empty(comment))
}

/// DELETE /comments/{id} - answers with the comments that remain.
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(route = "delete_comment", id);

    let remaining = state.comments.delete(id).await?;
    Ok(HttpResponse::Ok().json(remaining))
}

/// GET /comments/post/{post_id}
pub async fn comments_by_post(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let post_id = path.into_inner();
    tracing::info!(route = "get_comments_post", post_id);

    HttpResponse::Ok().json(state.comments.find_by_post_id(post_id).await)
}
