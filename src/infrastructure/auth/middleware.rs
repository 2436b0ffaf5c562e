use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::Instrument;

use super::token::AccessTokenValidator;
use crate::domain::access::AccessContext;
use crate::error::{AppError, AppResult};

/// Caller identity injected into request extensions. Anonymous callers carry
/// no access context at all.
#[derive(Debug, Clone, Default)]
pub struct RequestAccess {
    pub user_id: Option<String>,
    pub context: Option<AccessContext>,
    pub is_admin: bool,
}

impl RequestAccess {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.context.is_none() {
            return Err(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ));
        }
        if !self.is_admin {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(())
    }
}

/// Resolves the optional bearer token into a `RequestAccess`.
///
/// A missing header is an anonymous request; a malformed or invalid token is
/// rejected. Without a configured validator every request is anonymous.
pub async fn access_middleware(
    State(validator): State<Option<Arc<AccessTokenValidator>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let access = match (auth_header, validator.as_deref()) {
        (None, _) => RequestAccess::anonymous(),
        (Some(_), None) => {
            tracing::debug!("No token secret configured, treating request as anonymous");
            RequestAccess::anonymous()
        }
        (Some(header), Some(validator)) => {
            let token = header.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Unauthorized("Invalid authorization format".to_string())
            })?;

            let claims = validator.validate_token(token)?;
            RequestAccess {
                context: Some(claims.access_context()),
                is_admin: claims.admin,
                user_id: Some(claims.sub),
            }
        }
    };

    let span = tracing::debug_span!(
        "access",
        user_id = access.user_id.as_deref().unwrap_or("anonymous"),
        premium = access.context.is_some_and(|c| c.is_premium_tier),
        admin = access.is_admin,
    );
    request.extensions_mut().insert(access);

    Ok(next.run(request).instrument(span).await)
}
