//! stackit-store: storage layer for the StackIt Q&A forum
//!
//! This crate provides:
//! - PostgreSQL storage for users, questions, answers, votes, and notifications
//! - Migration management (embedded SQL, applied at connect time)
//! - Type-safe database operations via sqlx
//!
//! The write paths the API composes out of several reads and writes in the
//! original design — the vote toggle and answer acceptance — are implemented
//! here as single atomic store operations: the toggle runs in one transaction
//! with the existing row locked, and acceptance is one conditional `UPDATE`
//! that carries the ownership check.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stackit_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let question = store.insert_question(&new_question).await?;
//! let answers = store.list_answers_for_question(question.id).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export stackit-core for downstream crates
pub use stackit_core;
