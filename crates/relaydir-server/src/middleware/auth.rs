// Authentication middleware for the HTTP front end.
// Verifies the bearer credential once per request and records the outcome
// in the request extensions; route handlers decide whether to require it.

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::Data,
};
use futures::future::LocalBoxFuture;

use crate::model::common::AppState;

const ACCESS_TOKEN: &str = "accessToken";
const AUTHORIZATION_HEADER: &str = "Authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// Per-request authentication outcome.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub authenticated: bool,
    pub subject: Option<String>,
}

// Authentication middleware transformer
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware { service })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
}

/// Extract token from request using 2 sources in priority order:
/// 1. `Authorization: Bearer <token>` header
/// 2. `accessToken` query parameter
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(header_val) = req.headers().get(AUTHORIZATION_HEADER) {
        if let Ok(s) = header_val.to_str() {
            let trimmed = s.trim();
            if let Some(token) = trimmed.strip_prefix(BEARER_PREFIX) {
                let token = token.trim();
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    if let Some(query) = req.uri().query() {
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if key == ACCESS_TOKEN && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if Method::OPTIONS != *req.method() {
            let mut auth_context = AuthContext::default();

            if let Some(token) = extract_token(&req) {
                if let Some(app_state) = req.app_data::<Data<AppState>>() {
                    match app_state.verifier.verify(&token) {
                        Ok(claims) => {
                            auth_context.authenticated = true;
                            auth_context.subject = claims.sub;
                        }
                        Err(_) => {
                            auth_context.authenticated = false;
                        }
                    }
                } else {
                    tracing::error!("AppState not found in request app_data");
                }
            }

            // Always insert AuthContext so handlers can inspect it
            req.extensions_mut().insert(auth_context);
        }

        let res = self.service.call(req);

        Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_extract_token_from_header() {
        let req = TestRequest::get()
            .insert_header((AUTHORIZATION_HEADER, "Bearer token123"))
            .to_srv_request();
        assert_eq!(extract_token(&req).as_deref(), Some("token123"));
    }

    #[test]
    fn test_extract_token_query_fallback() {
        let req = TestRequest::get()
            .uri("/v1/countries?accessToken=token456")
            .to_srv_request();
        assert_eq!(extract_token(&req).as_deref(), Some("token456"));
    }

    #[test]
    fn test_extract_token_header_wins_over_query() {
        let req = TestRequest::get()
            .uri("/v1/countries?accessToken=from-query")
            .insert_header((AUTHORIZATION_HEADER, "Bearer from-header"))
            .to_srv_request();
        assert_eq!(extract_token(&req).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_extract_token_missing() {
        let req = TestRequest::get().uri("/v1/countries").to_srv_request();
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_token_rejects_empty_bearer() {
        let req = TestRequest::get()
            .insert_header((AUTHORIZATION_HEADER, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_token(&req), None);
    }
}
