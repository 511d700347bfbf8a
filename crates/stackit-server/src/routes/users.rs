//! User routes: profile updates and admin user listing.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::routes::auth::UserResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for PATCH /api/users/me.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

/// Response for GET /api/users (admin only).
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// PATCH /api/users/me - Update the requester's display name.
async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name cannot be empty".to_string()));
    }

    let row = state
        .store()
        .update_user_name(user.user_id, request.name.trim())
        .await?;

    tracing::info!(user_id = %user.user_id, "Profile updated");

    Ok(Json(UserResponse::from(&row)))
}

/// GET /api/users - List all users. Admin only.
async fn list_users(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ListUsersResponse>> {
    if !user.is_admin() {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    let rows = state.store().list_users().await?;

    Ok(Json(ListUsersResponse {
        users: rows.iter().map(UserResponse::from).collect(),
    }))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/me", patch(update_profile))
        .route("/api/users", get(list_users))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_request_deserialize() {
        let json = r#"{"name": "Jane D."}"#;
        let request: UpdateProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Jane D.");
    }

    #[test]
    fn test_list_users_response_serialize() {
        let response = ListUsersResponse { users: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"users":[]}"#);
    }
}
