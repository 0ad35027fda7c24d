//! HTTP handlers and route configuration.

mod health;
mod index;
mod posts;

use actix_web::{HttpResponse, http::Method, web};

use crate::middleware::error::{AppError, AppResult, json_config, path_config};

/// Configure all application routes, extractor settings and the fallback service.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(index::index))
        .route("/health", web::get().to(health::health_check))
        .route("/health/ready", web::get().to(health::readiness))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post))
                        .route(web::method(Method::OPTIONS).to(posts::preflight))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/posts/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::delete().to(posts::delete_post))
                        .route(web::method(Method::OPTIONS).to(posts::preflight))
                        .default_service(web::to(method_not_allowed)),
                ),
        )
        .default_service(web::to(not_found));
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("No route matches this path".to_string()))
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
