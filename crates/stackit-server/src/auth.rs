//! Authentication module: JWT token management and password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stackit_core::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// Display name at token issue time.
    pub name: String,
    /// User role.
    pub role: Role,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// Authenticated user extracted from the JWT bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// User role.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Check if user is admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Create a JWT token for a user.
pub fn create_token(
    user_id: Uuid,
    name: &str,
    role: Role,
    secret: &str,
    expiry_hours: u64,
) -> Result<String, ApiError> {
    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(expiry_hours as i64)).timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        name: name.to_string(),
        role,
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to create token: {}", e)))
}

/// Validate a JWT token and return claims.
///
/// Invalid or expired tokens are a 403, matching the middleware this API
/// replaces (a missing header is the 401 case).
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Forbidden(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Authorization header must be Bearer <token>".to_string())
        })?;

        let jwt_secret = &state.config().jwt_secret;
        let claims = validate_token(token, jwt_secret)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            name: claims.name,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_create_and_validate_token() {
        let secret = "test_secret_key_12345";
        let user_id = Uuid::new_v4();

        let token = create_token(user_id, "Jane Doe", Role::Admin, secret, 24).unwrap();
        let claims = validate_token(&token, secret).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.name, "Jane Doe");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let token = create_token(Uuid::new_v4(), "Jane", Role::User, "secret1", 24).unwrap();
        let result = validate_token(&token, "secret2");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_token_is_forbidden() {
        let err = validate_token("not.a.token", "secret").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_claims_role_serializes_lowercase() {
        let claims = Claims {
            sub: Uuid::nil(),
            name: "Jane".to_string(),
            role: Role::User,
            exp: 0,
            iat: 0,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_authenticated_user_is_admin() {
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            name: "Admin".to_string(),
            role: Role::Admin,
        };
        assert!(user.is_admin());

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            name: "Jane".to_string(),
            role: Role::User,
        };
        assert!(!user.is_admin());
    }
}
