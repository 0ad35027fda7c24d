//! Root endpoint - describes the API.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [Endpoint],
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/posts",
        description: "List all posts, newest first",
    },
    Endpoint {
        method: "POST",
        path: "/api/posts",
        description: "Create a post from {title, content}",
    },
    Endpoint {
        method: "GET",
        path: "/api/posts/{id}",
        description: "Fetch one post",
    },
    Endpoint {
        method: "DELETE",
        path: "/api/posts/{id}",
        description: "Delete one post",
    },
    Endpoint {
        method: "GET",
        path: "/health",
        description: "Liveness probe",
    },
    Endpoint {
        method: "GET",
        path: "/health/ready",
        description: "Readiness probe (pings the store)",
    },
];

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(IndexResponse {
        name: "Quill Blog API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}
