//! Answer routes: post an answer, accept an answer.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{patch, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stackit_store::{AnswerDetailRow, AnswerRow, NewAnswer, NewNotification, QuestionSummaryRow};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::routes::questions::AuthorSummary;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// An answer with its author and derived vote totals.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: Uuid,
    pub question_id: Uuid,
    pub content: String,
    pub author: AuthorSummary,
    pub is_accepted: bool,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<AnswerDetailRow> for AnswerResponse {
    fn from(row: AnswerDetailRow) -> Self {
        let score = row.score();
        Self {
            id: row.id,
            question_id: row.question_id,
            content: row.content,
            author: AuthorSummary {
                id: row.user_id,
                name: row.author_name,
                reputation: row.author_reputation,
            },
            is_accepted: row.is_accepted,
            upvotes: row.upvotes,
            downvotes: row.downvotes,
            score,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// Request body for POST /api/answers/{question_id}.
#[derive(Debug, Deserialize)]
pub struct PostAnswerRequest {
    pub content: String,
}

/// Plain view of an answer row, used where vote totals are not derived.
#[derive(Debug, Serialize)]
pub struct AnswerRowResponse {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_accepted: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<AnswerRow> for AnswerRowResponse {
    fn from(row: AnswerRow) -> Self {
        Self {
            id: row.id,
            question_id: row.question_id,
            user_id: row.user_id,
            content: row.content,
            is_accepted: row.is_accepted,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// Response for PATCH /api/answers/accept/{answer_id}.
#[derive(Debug, Serialize)]
pub struct AcceptAnswerResponse {
    pub message: String,
    pub answer: AnswerRowResponse,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/answers/{question_id} - Post an answer to a question.
async fn post_answer(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(question_id): Path<Uuid>,
    Json(request): Json<PostAnswerRequest>,
) -> ApiResult<(StatusCode, Json<AnswerRowResponse>)> {
    let store = state.store();

    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Content is required".to_string()));
    }

    // Fetch up front: 404 before any write, and the owner is needed for the
    // notification below.
    let question = store.get_question(question_id).await?;

    let new_answer = NewAnswer::new(question_id, user.user_id, request.content);
    let row = store.insert_answer(&new_answer).await?;

    tracing::info!(
        answer_id = %row.id,
        question_id = %question_id,
        user_id = %user.user_id,
        "Answer posted"
    );

    notify_question_owner(&state, &question, &row, &user.name).await;

    Ok((StatusCode::CREATED, Json(AnswerRowResponse::from(row))))
}

/// PATCH /api/answers/accept/{answer_id} - Mark an answer as accepted.
///
/// Only the owner of the parent question may accept; the store enforces the
/// check and the write as one conditional update.
async fn accept_answer(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(answer_id): Path<Uuid>,
) -> ApiResult<Json<AcceptAnswerResponse>> {
    let row = state.store().accept_answer(answer_id, user.user_id).await?;

    tracing::info!(answer_id = %answer_id, user_id = %user.user_id, "Answer accepted");

    Ok(Json(AcceptAnswerResponse {
        message: "Answer accepted".to_string(),
        answer: AnswerRowResponse::from(row),
    }))
}

/// Append a notification for the question owner, best effort.
///
/// Failures are logged and never surface to the answer author; answering
/// one's own question stays silent.
async fn notify_question_owner(
    state: &AppState,
    question: &QuestionSummaryRow,
    answer: &AnswerRow,
    answerer_name: &str,
) {
    if question.user_id == answer.user_id {
        return;
    }

    let notification = NewNotification::new(
        question.user_id,
        format!(
            "{} answered your question: {}",
            answerer_name, question.title
        ),
    )
    .with_source(answer.id);

    match state.store().insert_notification(&notification).await {
        Ok(row) => {
            state.broadcaster().publish_notification(&row).await;
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                user_id = %question.user_id,
                "Failed to create notification"
            );
        }
    }
}

/// Build answer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/answers/{question_id}", post(post_answer))
        .route("/api/answers/accept/{answer_id}", patch(accept_answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_answer_request_deserialize() {
        let json = r#"{"content": "Use HTTP-only cookies."}"#;
        let request: PostAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content, "Use HTTP-only cookies.");
    }

    #[test]
    fn test_answer_response_score_is_derived() {
        let row = AnswerDetailRow {
            id: Uuid::nil(),
            question_id: Uuid::nil(),
            user_id: Uuid::nil(),
            content: "A".to_string(),
            is_accepted: true,
            created: Utc::now(),
            updated: Utc::now(),
            author_name: "Sarah".to_string(),
            author_reputation: 2891,
            upvotes: 7,
            downvotes: 2,
        };
        let response = AnswerResponse::from(row);
        assert_eq!(response.score, 5);
        assert!(response.is_accepted);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"upvotes\":7"));
        assert!(json.contains("\"score\":5"));
    }

    #[test]
    fn test_accept_response_serialize() {
        let row = AnswerRow {
            id: Uuid::nil(),
            question_id: Uuid::nil(),
            user_id: Uuid::nil(),
            content: "A".to_string(),
            is_accepted: true,
            created: Utc::now(),
            updated: Utc::now(),
        };
        let response = AcceptAnswerResponse {
            message: "Answer accepted".to_string(),
            answer: AnswerRowResponse::from(row),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("Answer accepted"));
        assert!(json.contains("\"is_accepted\":true"));
    }
}
