//! Notification routes: list the feed, mark all read.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use stackit_store::NotificationRow;

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A single notification in the feed.
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub message: String,
    pub read: bool,
    pub source_id: Option<Uuid>,
    pub created: DateTime<Utc>,
}

impl From<NotificationRow> for NotificationResponse {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: row.id,
            message: row.message,
            read: row.read,
            source_id: row.source_id,
            created: row.created,
        }
    }
}

/// Response for GET /api/notifications.
#[derive(Debug, Serialize)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<NotificationResponse>,
    /// Count of unread rows, derived at read time.
    pub unread: i64,
}

/// Response for PATCH /api/notifications/read.
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub message: String,
    /// Number of rows touched by the bulk update.
    pub updated: u64,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notifications - The requester's feed, newest first.
async fn list_notifications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ListNotificationsResponse>> {
    let store = state.store();

    let rows = store.list_notifications(user.user_id).await?;
    let unread = store.unread_notification_count(user.user_id).await?;

    Ok(Json(ListNotificationsResponse {
        notifications: rows.into_iter().map(NotificationResponse::from).collect(),
        unread,
    }))
}

/// PATCH /api/notifications/read - Mark all of the requester's
/// notifications read.
///
/// Unconditional bulk update, scoped to the requesting user only.
async fn mark_all_read(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<MarkReadResponse>> {
    let updated = state.store().mark_notifications_read(user.user_id).await?;

    tracing::info!(user_id = %user.user_id, updated, "Notifications marked read");

    Ok(Json(MarkReadResponse {
        message: "All notifications marked as read".to_string(),
        updated,
    }))
}

/// Build notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/read", patch(mark_all_read))
}
