//! Bearer authentication middleware for protected endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! resolves it to an identity through the access guard (signature, cache
//! membership, user existence), and injects the identity into the request
//! extensions for handlers to pick up via the `CurrentUser` extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorInternalServerError, InternalError},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use pl_core::domain::value_objects::AuthenticatedUser;
use pl_core::errors::{DomainError, DomainResult};
use pl_core::repositories::{SessionRepository, TokenCache, UserRepository};
use pl_core::services::auth::AuthService;

use crate::handlers::handle_domain_error;

/// Object-safe view of the guard operations, so the middleware does not
/// need the service's repository type parameters
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a bearer access token to an identity
    async fn resolve_access(&self, token: &str) -> DomainResult<AuthenticatedUser>;

    /// Resolve a bearer refresh token to an identity
    async fn resolve_refresh(&self, token: &str) -> DomainResult<AuthenticatedUser>;
}

#[async_trait]
impl<U, S, C> IdentityResolver for AuthService<U, S, C>
where
    U: UserRepository,
    S: SessionRepository,
    C: TokenCache,
{
    async fn resolve_access(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        self.resolve_access_token(token).await
    }

    async fn resolve_refresh(&self, token: &str) -> DomainResult<AuthenticatedUser> {
        self.resolve_refresh_token(token).await
    }
}

/// Identity injected into request extensions by the middleware
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| unauthorized(&DomainError::Unauthorized));
        ready(result)
    }
}

/// Raw bearer token extractor, for the refresh/logout handlers that run
/// the refresh guard themselves instead of the access middleware
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = bearer_from_header(req.headers())
            .map(BearerToken)
            .ok_or_else(|| unauthorized(&DomainError::Unauthorized));
        ready(result)
    }
}

/// Bearer authentication middleware factory
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer authentication middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match bearer_from_header(req.headers()) {
                Some(token) => token,
                None => return Err(unauthorized(&DomainError::Unauthorized)),
            };

            let resolver = req
                .app_data::<web::Data<Arc<dyn IdentityResolver>>>()
                .ok_or_else(|| ErrorInternalServerError("Identity resolver not configured"))?;

            match resolver.resolve_access(&token).await {
                Ok(identity) => {
                    req.extensions_mut().insert(CurrentUser(identity));
                    service.call(req).await
                }
                Err(e) => Err(unauthorized(&e)),
            }
        })
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_from_header(headers: &actix_web::http::header::HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Build an actix error carrying the standard 401 JSON body
fn unauthorized(error: &DomainError) -> Error {
    InternalError::from_response("unauthorized", handle_domain_error(error)).into()
}
