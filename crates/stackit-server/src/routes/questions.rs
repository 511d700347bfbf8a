//! Question routes: ask, list, and fetch with answers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stackit_store::{NewQuestion, QuestionSummaryRow};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::routes::answers::AnswerResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Public view of a question author.
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub reputation: i64,
}

/// A question with its author and a derived answer count.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: AuthorSummary,
    pub answer_count: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<QuestionSummaryRow> for QuestionResponse {
    fn from(row: QuestionSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            tags: row.tags,
            author: AuthorSummary {
                id: row.user_id,
                name: row.author_name,
                reputation: row.author_reputation,
            },
            answer_count: row.answer_count,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// Request body for POST /api/questions.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Query parameters for GET /api/questions.
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    /// Only questions carrying this tag (exact match).
    pub tag: Option<String>,
}

/// Response for GET /api/questions.
#[derive(Debug, Serialize)]
pub struct ListQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
}

/// Response for GET /api/questions/{id}: the question plus its answers.
#[derive(Debug, Serialize)]
pub struct QuestionDetailResponse {
    pub question: QuestionResponse,
    pub answers: Vec<AnswerResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/questions - Ask a new question.
async fn create_question(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateQuestionRequest>,
) -> ApiResult<(StatusCode, Json<QuestionResponse>)> {
    let store = state.store();

    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let new_question = NewQuestion::new(
        request.title,
        request.content,
        request.tags,
        user.user_id,
    );
    let row = store.insert_question(&new_question).await?;

    tracing::info!(question_id = %row.id, user_id = %user.user_id, "Question created");

    // Re-read through the summary query for the author join.
    let summary = store.get_question(row.id).await?;

    Ok((StatusCode::CREATED, Json(QuestionResponse::from(summary))))
}

/// GET /api/questions - List questions, newest first.
///
/// An optional `?tag=` filters to questions carrying that tag.
async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuestionsQuery>,
) -> ApiResult<Json<ListQuestionsResponse>> {
    let rows = state.store().list_questions(query.tag.as_deref()).await?;

    tracing::debug!(count = rows.len(), tag = ?query.tag, "Listed questions");

    Ok(Json(ListQuestionsResponse {
        questions: rows.into_iter().map(QuestionResponse::from).collect(),
    }))
}

/// GET /api/questions/{id} - A single question with its answers.
async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<QuestionDetailResponse>> {
    let store = state.store();

    let question = store.get_question(id).await?;
    let answers = store.list_answers_for_question(id).await?;

    Ok(Json(QuestionDetailResponse {
        question: QuestionResponse::from(question),
        answers: answers.into_iter().map(AnswerResponse::from).collect(),
    }))
}

/// Build question routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/questions",
            get(list_questions).post(create_question),
        )
        .route("/api/questions/{id}", get(get_question))
}
