//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod profile;

#[cfg(test)]
mod tests;

use actix_web::{HttpRequest, HttpResponse, Resource, web};
use postboard_shared::EmptyObject;
use serde::Serialize;

use crate::middleware::error::{AppError, AppResult, json_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        // Posts
        .service(
            resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .service(resource("/posts/author/{author}").route(web::get().to(posts::author_posts)))
        .service(resource("/posts/{id}/comments").route(web::get().to(posts::post_comments)))
        .service(
            resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        // Comments
        .service(
            resource("/comments")
                .route(web::get().to(comments::list_comments))
                .route(web::post().to(comments::create_comment)),
        )
        // GET only: DELETE answers 405
        .service(
            resource("/comments/post/{post_id}").route(web::get().to(comments::comments_by_post)),
        )
        .service(
            resource("/comments/{id}")
                .route(web::get().to(comments::get_comment))
                .route(web::put().to(comments::update_comment))
                .route(web::delete().to(comments::delete_comment)),
        )
        // Profile
        .service(
            resource("/profile")
                .route(web::get().to(profile::get_profile))
                .route(web::post().to(profile::create_profile))
                .route(web::put().to(profile::update_profile))
                .route(web::delete().to(profile::delete_profile)),
        );
}

/// A resource that answers unsupported verbs with a 405 problem body.
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(method_not_allowed))
}

async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    tracing::warn!(method = %req.method(), path = %req.path(), "Method not allowed");
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

/// 200 with the record, or 200 with `{}` when there is none.
fn found_or_empty<T: Serialize>(record: Option<T>) -> HttpResponse {
    match record {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::Ok().json(EmptyObject {}),
    }
}
