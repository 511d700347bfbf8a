//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx queries.
//! Enumerated columns (`role`, `direction`) are stored as lowercase text;
//! rows keep the raw string and expose a parsing accessor into the domain
//! type from stackit-core.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use stackit_core::{Role, VoteDirection};

// ============================================================================
// Users
// ============================================================================

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Role as lowercase text (`"user"` or `"admin"`).
    pub role: String,
    pub reputation: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl UserRow {
    /// Parse the role column into the domain type.
    ///
    /// Returns None if the stored string is not a known role.
    pub fn role_parsed(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    /// Create a new regular user with a fresh id.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: Role::User,
        }
    }

    /// Override the role (admin bootstrap).
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

// ============================================================================
// Questions
// ============================================================================

/// Database row for the `questions` table.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: Uuid,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Question row joined with its author and a derived answer count.
///
/// The count is computed at read time; no aggregate counters are stored.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: Uuid,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub author_name: String,
    pub author_reputation: i64,
    pub answer_count: i64,
}

/// Input for creating a new question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: Uuid,
}

impl NewQuestion {
    pub fn new(title: String, content: String, tags: Vec<String>, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags,
            user_id,
        }
    }
}

// ============================================================================
// Answers
// ============================================================================

/// Database row for the `answers` table.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRow {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_accepted: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Answer row joined with its author and derived vote totals.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerDetailRow {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_accepted: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub author_name: String,
    pub author_reputation: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl AnswerDetailRow {
    /// Net score (upvotes minus downvotes).
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Input for creating a new answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
}

impl NewAnswer {
    pub fn new(question_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            user_id,
            content,
        }
    }
}

// ============================================================================
// Votes
// ============================================================================

/// Database row for the `votes` table.
///
/// The table's primary key is (user_id, answer_id), so at most one row can
/// exist per pair.
#[derive(Debug, Clone, FromRow)]
pub struct VoteRow {
    pub user_id: Uuid,
    pub answer_id: Uuid,
    /// Direction as lowercase text (`"up"` or `"down"`).
    pub direction: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl VoteRow {
    /// Parse the direction column into the domain type.
    ///
    /// Returns None if the stored string is not a known direction.
    pub fn direction_parsed(&self) -> Option<VoteDirection> {
        self.direction.parse().ok()
    }
}

/// Result of a vote toggle, as applied by [`crate::Store::toggle_vote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// No prior row existed; a vote was inserted.
    Added,
    /// A prior row with the opposite direction was updated in place.
    Updated,
    /// A prior row with the same direction was deleted.
    Removed,
}

// ============================================================================
// Notifications
// ============================================================================

/// Database row for the `notifications` table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub id: i64,
    pub user_id: Uuid,
    pub message: String,
    pub read: bool,
    pub source_id: Option<Uuid>,
    pub created: DateTime<Utc>,
}

/// Input for appending a notification to a user's feed.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub message: String,
    pub source_id: Option<Uuid>,
}

impl NewNotification {
    pub fn new(user_id: Uuid, message: String) -> Self {
        Self {
            user_id,
            message,
            source_id: None,
        }
    }

    /// Attach the resource that triggered the notification.
    pub fn with_source(mut self, source_id: Uuid) -> Self {
        self.source_id = Some(source_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = NewUser::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "hash".to_string(),
        );
        assert_eq!(user.role, Role::User);
        assert_eq!(
            user.with_role(Role::Admin).role,
            Role::Admin
        );
    }

    #[test]
    fn test_vote_row_direction_parsed() {
        let row = VoteRow {
            user_id: Uuid::nil(),
            answer_id: Uuid::nil(),
            direction: "up".to_string(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        assert_eq!(row.direction_parsed(), Some(VoteDirection::Up));

        let corrupt = VoteRow {
            direction: "sideways".to_string(),
            ..row
        };
        assert_eq!(corrupt.direction_parsed(), None);
    }

    #[test]
    fn test_answer_detail_score() {
        let row = AnswerDetailRow {
            id: Uuid::nil(),
            question_id: Uuid::nil(),
            user_id: Uuid::nil(),
            content: String::new(),
            is_accepted: false,
            created: Utc::now(),
            updated: Utc::now(),
            author_name: "Jane".to_string(),
            author_reputation: 0,
            upvotes: 5,
            downvotes: 2,
        };
        assert_eq!(row.score(), 3);
    }

    #[test]
    fn test_notification_with_source() {
        let source = Uuid::new_v4();
        let notification =
            NewNotification::new(Uuid::new_v4(), "Jane answered your question".to_string())
                .with_source(source);
        assert_eq!(notification.source_id, Some(source));
    }
}
