//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::PostDraft;
use postboard_shared::dto::PostRequest;

use super::found_or_empty;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    tracing::info!(route = "get_posts", "Listing posts");
    HttpResponse::Ok().json(state.posts.list().await)
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(route = "create_post", title = %req.title, author = %req.author);

    let post = state
        .posts
        .create(PostDraft::new(req.title, req.author))
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<u64>) -> HttpResponse {
    let id = path.into_inner();
    tracing::info!(route = "get_post", id);

    found_or_empty(state.posts.find_by_id(id).await)
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    tracing::info!(route = "update_post", id, title = %req.title, author = %req.author);

    let post = state
        .posts
        .update(id, PostDraft::new(req.title, req.author))
        .await?;

    Ok(found_or_empty(post))
}

/// DELETE /posts/{id} - answers with the posts that remain.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(route = "delete_post", id);

    let remaining = state.posts.delete(id).await?;
    Ok(HttpResponse::Ok().json(remaining))
}

/// GET /posts/author/{author}
pub async fn author_posts(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let author = path.into_inner();
    tracing::info!(route = "get_author_posts", author = %author);

    HttpResponse::Ok().json(state.posts.find_by_author(&author).await)
}

/// GET /posts/{id}/comments
///
/// Served from the comment collection; the post itself need not exist.
/// Comments may reference any integer, so negative ids are matched too.
pub async fn post_comments(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    tracing::info!(route = "get_post_comments", id);

    HttpResponse::Ok().json(state.comments.find_by_post_id(id).await)
}
