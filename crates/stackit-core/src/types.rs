//! Core data types for the StackIt Q&A forum.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization. String forms are lowercase
//! on the wire and in the database (`"up"`, `"down"`, `"user"`, `"admin"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Vote Direction
// ============================================================================

/// Direction of a vote on an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// Upvote (+1 toward the answer's score).
    Up,
    /// Downvote (-1 toward the answer's score).
    Down,
}

/// Error returned when parsing a vote direction from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid vote direction: {0:?} (expected \"up\" or \"down\")")]
pub struct ParseDirectionError(pub String);

impl VoteDirection {
    /// Lowercase string form, as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Signed contribution of one vote in this direction.
    #[must_use]
    pub const fn weight(&self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

// ============================================================================
// Vote Toggle Decision
// ============================================================================

/// What the store must do to the vote row for a (user, answer) pair.
///
/// Produced by [`VoteAction::decide`] from the row's current state and the
/// requested direction; executed by the storage layer inside one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    /// No row exists: insert one with the requested direction.
    Insert,
    /// A row exists with the same direction: delete it (retract the vote).
    Delete,
    /// A row exists with the opposite direction: update it in place.
    Update,
}

impl VoteAction {
    /// Decide the toggle outcome for an existing row state and a request.
    ///
    /// Invariant: starting from at most one row per (user, answer), every
    /// action preserves at most one row.
    #[must_use]
    pub const fn decide(existing: Option<VoteDirection>, requested: VoteDirection) -> Self {
        match existing {
            None => Self::Insert,
            Some(current) => {
                if matches!(
                    (current, requested),
                    (VoteDirection::Up, VoteDirection::Up)
                        | (VoteDirection::Down, VoteDirection::Down)
                ) {
                    Self::Delete
                } else {
                    Self::Update
                }
            }
        }
    }
}

// ============================================================================
// User Role
// ============================================================================

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular forum member.
    User,
    /// Administrator with access to user management.
    Admin,
}

/// Error returned when parsing a role from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0:?} (expected \"user\" or \"admin\")")]
pub struct ParseRoleError(pub String);

impl Role {
    /// Lowercase string form, as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Whether this role grants administrative access.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        for direction in [VoteDirection::Up, VoteDirection::Down] {
            let parsed: VoteDirection = direction.as_str().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_direction_parse_rejects_unknown() {
        let err = "sideways".parse::<VoteDirection>().unwrap_err();
        assert_eq!(err, ParseDirectionError("sideways".to_string()));
    }

    #[test]
    fn test_direction_serde_lowercase() {
        assert_eq!(serde_json::to_string(&VoteDirection::Up).unwrap(), "\"up\"");
        let parsed: VoteDirection = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, VoteDirection::Down);
    }

    #[test]
    fn test_direction_weight_and_opposite() {
        assert_eq!(VoteDirection::Up.weight(), 1);
        assert_eq!(VoteDirection::Down.weight(), -1);
        assert_eq!(VoteDirection::Up.opposite(), VoteDirection::Down);
        assert_eq!(VoteDirection::Down.opposite(), VoteDirection::Up);
    }

    #[test]
    fn test_toggle_inserts_when_no_row() {
        assert_eq!(
            VoteAction::decide(None, VoteDirection::Up),
            VoteAction::Insert
        );
        assert_eq!(
            VoteAction::decide(None, VoteDirection::Down),
            VoteAction::Insert
        );
    }

    #[test]
    fn test_toggle_deletes_on_same_direction() {
        assert_eq!(
            VoteAction::decide(Some(VoteDirection::Up), VoteDirection::Up),
            VoteAction::Delete
        );
        assert_eq!(
            VoteAction::decide(Some(VoteDirection::Down), VoteDirection::Down),
            VoteAction::Delete
        );
    }

    #[test]
    fn test_toggle_updates_on_opposite_direction() {
        assert_eq!(
            VoteAction::decide(Some(VoteDirection::Up), VoteDirection::Down),
            VoteAction::Update
        );
        assert_eq!(
            VoteAction::decide(Some(VoteDirection::Down), VoteDirection::Up),
            VoteAction::Update
        );
    }

    #[test]
    fn test_toggle_sequence_from_worked_example() {
        // up -> insert (+1), up again -> delete (0), down -> insert again (-1)
        let mut existing: Option<VoteDirection> = None;
        let mut score = 0i64;

        for (requested, expected_score) in [
            (VoteDirection::Up, 1),
            (VoteDirection::Up, 0),
            (VoteDirection::Down, -1),
        ] {
            match VoteAction::decide(existing, requested) {
                VoteAction::Insert => {
                    existing = Some(requested);
                    score += requested.weight();
                }
                VoteAction::Delete => {
                    score -= existing.take().unwrap().weight();
                }
                VoteAction::Update => {
                    let previous = existing.replace(requested).unwrap();
                    score += requested.weight() - previous.weight();
                }
            }
            assert_eq!(score, expected_score);
        }
    }

    #[test]
    fn test_toggle_never_yields_more_than_one_row() {
        // Exhaustive walk over all (existing, requested) pairs: the row count
        // after applying the action is always 0 or 1.
        for existing in [None, Some(VoteDirection::Up), Some(VoteDirection::Down)] {
            for requested in [VoteDirection::Up, VoteDirection::Down] {
                let rows_before = existing.map_or(0, |_| 1);
                let rows_after = match VoteAction::decide(existing, requested) {
                    VoteAction::Insert => rows_before + 1,
                    VoteAction::Delete => rows_before - 1,
                    VoteAction::Update => rows_before,
                };
                assert!(rows_after <= 1);
            }
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::User, Role::Admin] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
        assert_eq!(Role::default(), Role::User);
    }
}
