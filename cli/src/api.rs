//! Wire types for the StackIt API.
//!
//! These mirror the server's JSON responses; the server is the single
//! source of truth and these are plain deserialization targets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public user profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub reputation: i64,
    pub created: DateTime<Utc>,
}

/// Response from register and login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

/// Question author summary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub reputation: i64,
}

/// A question as listed or embedded in a detail response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: Author,
    pub answer_count: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Response from GET /api/questions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
}

/// An answer with derived vote totals.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub content: String,
    pub author: Author,
    pub is_accepted: bool,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Response from GET /api/questions/{id}.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// A freshly created or accepted answer (no vote totals attached).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerRecord {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_accepted: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Response from PATCH /api/answers/accept/{answer_id}.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AcceptResult {
    pub message: String,
    pub answer: AnswerRecord,
}

/// Response from POST /api/votes/{answer_id}.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoteResult {
    pub message: String,
    pub score: i64,
}

/// A notification in the feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub read: bool,
    pub source_id: Option<Uuid>,
    pub created: DateTime<Utc>,
}

/// Response from GET /api/notifications.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread: i64,
}

/// Response from PATCH /api/notifications/read.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkReadResult {
    pub message: String,
    pub updated: u64,
}

/// A tag with its usage count.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: i64,
}

/// Response from GET /api/tags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagList {
    pub tags: Vec<TagCount>,
}

/// Error envelope returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetails,
}

/// Error details within the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_list_deserialize() {
        let json = r#"{"questions":[{"id":"00000000-0000-0000-0000-000000000000",
            "title":"T","content":"C","tags":["rust"],
            "author":{"id":"00000000-0000-0000-0000-000000000000","name":"Jane","reputation":10},
            "answer_count":2,"created":"2024-01-01T00:00:00Z","updated":"2024-01-01T00:00:00Z"}]}"#;
        let list: QuestionList = serde_json::from_str(json).unwrap();
        assert_eq!(list.questions.len(), 1);
        assert_eq!(list.questions[0].author.name, "Jane");
        assert_eq!(list.questions[0].answer_count, 2);
    }

    #[test]
    fn test_error_envelope_deserialize() {
        let json = r#"{"error":{"code":"NOT_FOUND","message":"not found: question"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.code, "NOT_FOUND");
    }

    #[test]
    fn test_notification_feed_deserialize() {
        let json = r#"{"notifications":[{"id":1,"message":"m","read":false,
            "source_id":null,"created":"2024-01-01T00:00:00Z"}],"unread":1}"#;
        let feed: NotificationFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.unread, 1);
        assert!(feed.notifications[0].source_id.is_none());
    }
}
