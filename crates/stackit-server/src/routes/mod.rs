//! Route definitions for the HTTP API.

pub mod answers;
pub mod auth;
pub mod events;
pub mod health;
pub mod notifications;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(questions::routes())
        .merge(answers::routes())
        .merge(votes::routes())
        .merge(notifications::routes())
        .merge(tags::routes())
        .merge(users::routes())
        .merge(events::routes())
        .with_state(state)
}
