//! Tag routes: usage counts aggregated from question tag arrays.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use stackit_store::StoreError;

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A tag with the number of questions carrying it.
#[derive(Debug, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: i64,
}

/// Response for GET /api/tags.
#[derive(Debug, Serialize)]
pub struct ListTagsResponse {
    pub tags: Vec<TagCount>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/tags - All tags in use, most used first.
///
/// Counts are derived at read time by unnesting the tag arrays; nothing is
/// maintained incrementally.
async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<ListTagsResponse>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT tag, COUNT(*)::BIGINT AS count
        FROM questions, UNNEST(tags) AS tag
        GROUP BY tag
        ORDER BY count DESC, tag
        "#,
    )
    .fetch_all(state.store().pool())
    .await
    .map_err(StoreError::from)?;

    Ok(Json(ListTagsResponse {
        tags: rows
            .into_iter()
            .map(|(name, count)| TagCount { name, count })
            .collect(),
    }))
}

/// Build tag routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/tags", get(list_tags))
}
