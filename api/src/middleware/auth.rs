//! JWT authentication middleware for protecting API endpoints.
//!
//! Two tiers share one algorithm: the plain variant only requires a valid
//! bearer token, the role-gated variant additionally requires the caller's
//! role to match. On success the decoded identity is attached to the request
//! for downstream handlers; on failure the request never reaches them.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorUnauthorized, InternalError},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use jp_core::domain::entities::token::Claims;
use jp_core::domain::entities::user::UserRole;
use jp_core::errors::{DomainError, TokenError};
use jp_core::services::token::TokenService;
use jp_shared::types::response::ErrorBody;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the token claims
    pub user_id: Uuid,
    /// Email address at issuance time
    pub email: String,
    /// Verified role of the caller
    pub role: UserRole,
    /// JWT ID for tracing
    pub jti: String,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidFormat))?;
        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role: claims.role,
            jti: claims.jti.clone(),
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
    required_role: Option<UserRole>,
}

impl JwtAuth {
    /// Authenticate only: any valid session token passes
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self {
            token_service,
            required_role: None,
        }
    }

    /// Authenticate and require a specific role
    pub fn require_role(token_service: Arc<TokenService>, role: UserRole) -> Self {
        Self {
            token_service,
            required_role: Some(role),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            required_role: self.required_role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    required_role: Option<UserRole>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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
        let token_service = self.token_service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            // Step 1: extract the bearer token; no token means the request
            // is rejected before any further processing
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthenticated(required_role.is_some())),
            };

            // Step 2: cryptographic verification of signature and expiry
            let claims = match token_service.verify(&token) {
                Ok(claims) => claims,
                Err(_) => return Err(invalid_token()),
            };

            let context = match AuthContext::from_claims(&claims) {
                Ok(context) => context,
                Err(_) => return Err(invalid_token()),
            };

            // Step 3: optional role gate
            if let Some(role) = required_role {
                if context.role != role {
                    return Err(forbidden(role));
                }
            }

            // Step 4: attach identity for downstream handlers
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn unauthenticated(role_gated: bool) -> Error {
    let message = if role_gated {
        "Access denied. Authentication required."
    } else {
        "Access denied. No token provided."
    };
    InternalError::from_response(
        message,
        HttpResponse::Unauthorized().json(ErrorBody::new("unauthenticated", message)),
    )
    .into()
}

fn invalid_token() -> Error {
    InternalError::from_response(
        "Invalid token.",
        HttpResponse::Forbidden().json(ErrorBody::new("invalid_token", "Invalid token.")),
    )
    .into()
}

fn forbidden(role: UserRole) -> Error {
    let mut role_name = role.as_str().to_string();
    role_name[..1].make_ascii_uppercase();
    let message = format!("Access denied. {} privileges required.", role_name);
    InternalError::from_response(
        message.clone(),
        HttpResponse::Forbidden().json(ErrorBody::new("forbidden", message)),
    )
    .into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
