//! Vote routes: toggle a vote on an answer.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stackit_core::VoteDirection;
use stackit_store::VoteOutcome;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /api/votes/{answer_id}.
///
/// The direction arrives as a raw string so an unknown value maps to a 400
/// instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub direction: String,
}

/// Response for POST /api/votes/{answer_id}.
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub message: String,
    /// Net score of the answer after the toggle, derived by counting rows.
    pub score: i64,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/votes/{answer_id} - Toggle a vote.
///
/// Same direction again retracts the vote; the opposite direction updates
/// the row in place. The store runs the whole toggle in one transaction.
async fn vote_answer(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(answer_id): Path<Uuid>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<(StatusCode, Json<VoteResponse>)> {
    let direction: VoteDirection = request
        .direction
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid vote type".to_string()))?;

    let (outcome, score) = state
        .store()
        .toggle_vote(user.user_id, answer_id, direction)
        .await?;

    tracing::info!(
        answer_id = %answer_id,
        user_id = %user.user_id,
        direction = %direction,
        outcome = ?outcome,
        score,
        "Vote toggled"
    );

    let (status, message) = match outcome {
        VoteOutcome::Added => (StatusCode::CREATED, "Vote added"),
        VoteOutcome::Updated => (StatusCode::OK, "Vote updated"),
        VoteOutcome::Removed => (StatusCode::OK, "Vote removed"),
    };

    Ok((
        status,
        Json(VoteResponse {
            message: message.to_string(),
            score,
        }),
    ))
}

/// Build vote routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/votes/{answer_id}", post(vote_answer))
}
