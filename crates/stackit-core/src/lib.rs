//! stackit-core: domain types shared by the StackIt server, store, and CLI.
//!
//! This crate defines the vocabulary of the forum — vote directions, user
//! roles — together with the pure decision logic for the vote toggle. Keeping
//! the toggle decision here lets the storage layer execute it inside a single
//! transaction while the rule itself stays independently testable.

pub mod types;

pub use types::{ParseDirectionError, ParseRoleError, Role, VoteAction, VoteDirection};
