//! Server-Sent Events (SSE) endpoint for real-time notification delivery.
//!
//! Endpoint: GET /api/events
//!
//! Clients subscribe with their bearer token and receive their own
//! notifications as they are appended, instead of polling the list.
//!
//! # Event Types
//!
//! - `notification`: Published when a notification row is appended
//! - `heartbeat`: Sent every 30 seconds to keep the connection alive
//! - `lagged`: Sent when the client falls behind and should re-fetch the
//!   notification list
//!
//! # Example
//!
//! ```text
//! event: notification
//! data: {"type":"notification","id":7,"message":"...","source_id":null,"created":"..."}
//!
//! event: heartbeat
//! data: {"type":"heartbeat","timestamp":"2024-01-01T00:00:00Z"}
//! ```

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use chrono::Utc;
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::events::{FeedEvent, HEARTBEAT_INTERVAL_SECS, HeartbeatEvent, LaggedEvent};
use crate::state::AppState;

// ============================================================================
// SSE Endpoint
// ============================================================================

/// GET /api/events - Subscribe to the requester's notification stream.
///
/// # Response
///
/// - 200 OK: SSE stream (Content-Type: text/event-stream)
/// - 401/403: Missing or invalid bearer token
///
/// # Backpressure
///
/// If a client falls behind (channel buffer overflows), a `lagged` event is
/// sent indicating how many events were missed. The client should then
/// re-fetch GET /api/notifications.
async fn subscribe_events(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let broadcaster = state.broadcaster();
    let receiver = broadcaster.subscribe(user.user_id).await;

    tracing::info!(
        user_id = %user.user_id,
        "Client subscribed to SSE events"
    );

    let stream = stream::unfold(
        (receiver, user.user_id),
        move |(mut rx, user_id)| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        let event_type = match &event {
                            FeedEvent::Notification(_) => "notification",
                            FeedEvent::Heartbeat(_) => "heartbeat",
                            FeedEvent::Lagged(_) => "lagged",
                        };

                        match serde_json::to_string(&event) {
                            Ok(data) => {
                                let sse_event = Event::default().event(event_type).data(data);
                                return Some((Ok(sse_event), (rx, user_id)));
                            }
                            Err(e) => {
                                tracing::error!(
                                    error = %e,
                                    "Failed to serialize event"
                                );
                                continue;
                            }
                        }
                    }
                    Err(RecvError::Lagged(count)) => {
                        // Client fell behind - tell it to re-sync
                        tracing::warn!(
                            user_id = %user_id,
                            events_missed = count,
                            "SSE client lagged, sending lagged event"
                        );

                        let lagged = FeedEvent::Lagged(LaggedEvent {
                            events_missed: count,
                            timestamp: Utc::now(),
                        });

                        match serde_json::to_string(&lagged) {
                            Ok(data) => {
                                let sse_event = Event::default().event("lagged").data(data);
                                return Some((Ok(sse_event), (rx, user_id)));
                            }
                            Err(e) => {
                                tracing::error!(
                                    error = %e,
                                    "Failed to serialize lagged event"
                                );
                                continue;
                            }
                        }
                    }
                    Err(RecvError::Closed) => {
                        // Channel closed - end stream
                        tracing::debug!(
                            user_id = %user_id,
                            "Event channel closed, ending SSE stream"
                        );
                        return None;
                    }
                }
            }
        },
    );

    // Configure keep-alive with heartbeat
    let keep_alive = KeepAlive::new()
        .interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS))
        .event(
            Event::default().event("heartbeat").data(
                serde_json::to_string(&FeedEvent::Heartbeat(HeartbeatEvent {
                    timestamp: Utc::now(),
                }))
                .unwrap_or_else(|_| r#"{"type":"heartbeat","timestamp":"unknown"}"#.to_string()),
            ),
        );

    Ok(Sse::new(stream).keep_alive(keep_alive))
}

/// Build SSE event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/events", get(subscribe_events))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_interval() {
        assert_eq!(HEARTBEAT_INTERVAL_SECS, 30);
    }
}
