//! Cross-origin middleware - attaches CORS headers to every response.
//!
//! The allow-list comes from `FRONTEND_URL` and is resolved once at startup.
//! Pre-flight `OPTIONS` requests are answered by the routes themselves; this
//! layer only decorates responses, so errors and 404s carry the same headers.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderValue},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

/// Headers a browser may send on cross-origin requests.
const ALLOWED_HEADERS: &str = "Content-Type";

/// Resolved allow-list of front-end origins.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: Vec<HeaderValue>,
    any_origin: bool,
}

impl CorsPolicy {
    pub fn new(origins: &[String]) -> Self {
        let any_origin = origins.iter().any(|o| o == "*");
        let origins = origins
            .iter()
            .filter(|o| o.as_str() != "*")
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        Self {
            origins,
            any_origin,
        }
    }

    /// Value for `Access-Control-Allow-Origin`.
    ///
    /// An allowed request origin is echoed back; otherwise the first
    /// configured origin is advertised and the browser enforces the mismatch.
    pub fn allow_origin(&self, request_origin: Option<&HeaderValue>) -> Option<HeaderValue> {
        match request_origin {
            Some(origin) if self.any_origin || self.origins.contains(origin) => {
                Some(origin.clone())
            }
            _ if self.any_origin => Some(HeaderValue::from_static("*")),
            _ => self.origins.first().cloned(),
        }
    }
}

/// Methods served by a matched route pattern.
fn allowed_methods(pattern: Option<&str>) -> &'static str {
    match pattern {
        Some("/api/posts") => "GET, POST, OPTIONS",
        Some("/api/posts/{id}") => "GET, DELETE, OPTIONS",
        _ => "GET, OPTIONS",
    }
}

/// CORS middleware factory.
pub struct Cors {
    policy: Arc<CorsPolicy>,
}

impl Cors {
    pub fn new(policy: Arc<CorsPolicy>) -> Self {
        Self { policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CorsService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsService {
            service,
            policy: self.policy.clone(),
        }))
    }
}

pub struct CorsService<S> {
    service: S,
    policy: Arc<CorsPolicy>,
}

impl<S, B> Service<ServiceRequest> for CorsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let allow_origin = self.policy.allow_origin(req.headers().get(header::ORIGIN));

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            let pattern = res.request().match_pattern();
            let methods = allowed_methods(pattern.as_deref());

            let headers = res.headers_mut();
            if let Some(origin) = allow_origin {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            }
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(methods),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
            headers.append(header::VARY, HeaderValue::from_static("Origin"));

            Ok(res)
        })
    }
}
