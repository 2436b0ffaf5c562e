use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::access::AccessContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub admin: bool,
}

impl Claims {
    pub fn access_context(&self) -> AccessContext {
        AccessContext::member(self.premium)
    }
}

/// Validates bearer tokens issued by the identity provider. This service
/// never issues tokens itself.
pub struct AccessTokenValidator {
    secret: String,
}

impl AccessTokenValidator {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}
