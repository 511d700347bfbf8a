//! stackit-server: HTTP API server for the StackIt Q&A forum
//!
//! This crate provides:
//! - REST API endpoints for questions, answers, votes, tags, and notifications
//! - Registration, login, and JWT bearer authentication
//! - Server-Sent Events (SSE) for real-time notification delivery
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use stackit_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(store, config);
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use events::EventBroadcaster;
pub use state::AppState;

// Re-export dependent crates
pub use stackit_core;
pub use stackit_store;
