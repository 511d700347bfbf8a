//! Authentication routes: register, login, me, change-password.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stackit_store::{NewUser, UserRow};

use crate::auth::{self, AuthenticatedUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user (no password hash).
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub reputation: i64,
    pub created: DateTime<Utc>,
}

impl From<&UserRow> for UserResponse {
    fn from(row: &UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            email: row.email.clone(),
            role: row.role.clone(),
            reputation: row.reputation,
            created: row.created,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let store = state.store();

    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Name and email are required".to_string(),
        ));
    }

    if store.get_user_by_email(&request.email).await?.is_some() {
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = store
        .insert_user(&NewUser::new(
            request.name.clone(),
            request.email.clone(),
            password_hash,
        ))
        .await?;

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let store = state.store();

    let user = store
        .get_user_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let valid = auth::verify_password(&request.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = %user.id, email = %user.email, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/auth/me — current user profile.
async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<UserResponse>> {
    let row = state.store().get_user_by_id(user.user_id).await?;
    Ok(Json(UserResponse::from(&row)))
}

/// POST /api/auth/change-password
async fn change_password(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Json<ChangePasswordResponse>> {
    let store = state.store();

    let row = store.get_user_by_id(user.user_id).await?;

    let valid = auth::verify_password(&request.current_password, &row.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    if request.new_password.len() < 8 {
        return Err(ApiError::BadRequest(
            "New password must be at least 8 characters".to_string(),
        ));
    }

    let new_hash = auth::hash_password(&request.new_password)?;
    store.update_user_password(user.user_id, &new_hash).await?;

    tracing::info!(user_id = %user.user_id, "Password changed");

    Ok(Json(ChangePasswordResponse {
        message: "Password changed successfully".to_string(),
    }))
}

/// Sign a bearer token for a user row.
fn issue_token(state: &AppState, user: &UserRow) -> Result<String, ApiError> {
    let config = state.config();
    auth::create_token(
        user.id,
        &user.name,
        user.role_parsed().unwrap_or_default(),
        &config.jwt_secret,
        config.jwt_expiry_hours,
    )
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/change-password", post(change_password))
}
