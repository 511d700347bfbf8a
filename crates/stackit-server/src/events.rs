//! Event broadcasting for real-time notification delivery.
//!
//! This module provides a pub/sub mechanism for pushing a user's
//! notifications to connected SSE clients as they are appended, instead of
//! the client polling the notification list.
//!
//! # Architecture
//!
//! - Uses `tokio::sync::broadcast` for multi-subscriber pub/sub
//! - One channel per user (created lazily on first subscription)
//! - Channels are cleaned up when all subscribers disconnect
//!
//! # Event Types
//!
//! - `notification`: Published when a notification row is appended
//! - `heartbeat`: Sent periodically to keep connections alive
//! - `lagged`: Sent when a subscriber falls behind; the client should
//!   re-fetch the notification list

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use stackit_store::NotificationRow;

/// Default channel capacity for broadcast channels.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Heartbeat interval in seconds.
pub const HEARTBEAT_INTERVAL_SECS: u64 = 30;

// ============================================================================
// Event Types
// ============================================================================

/// An event that can be broadcast to a user's subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A notification was appended to the feed.
    Notification(NotificationEvent),
    /// Periodic heartbeat to keep connection alive.
    Heartbeat(HeartbeatEvent),
    /// Client fell behind and should re-fetch the notification list.
    Lagged(LaggedEvent),
}

/// Event data for an appended notification.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    /// The notification row id.
    pub id: i64,
    /// Notification message.
    pub message: String,
    /// Resource that triggered the notification, if any.
    pub source_id: Option<Uuid>,
    /// Timestamp of the notification.
    pub created: DateTime<Utc>,
}

/// Heartbeat event data.
#[derive(Debug, Clone, Serialize)]
pub struct HeartbeatEvent {
    /// Current timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Lagged event sent when a subscriber falls behind.
#[derive(Debug, Clone, Serialize)]
pub struct LaggedEvent {
    /// Number of events missed.
    pub events_missed: u64,
    /// Timestamp of the lagged event.
    pub timestamp: DateTime<Utc>,
}

impl From<&NotificationRow> for NotificationEvent {
    fn from(row: &NotificationRow) -> Self {
        Self {
            id: row.id,
            message: row.message.clone(),
            source_id: row.source_id,
            created: row.created,
        }
    }
}

// ============================================================================
// Event Broadcaster
// ============================================================================

/// Manages broadcast channels for notification events.
///
/// Each user has their own broadcast channel. Channels are created lazily
/// when the first subscriber connects and cleaned up when all subscribers
/// disconnect.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    /// Map of user_id -> broadcast sender.
    channels: Arc<RwLock<HashMap<Uuid, broadcast::Sender<FeedEvent>>>>,
    /// Channel capacity for new channels.
    capacity: usize,
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBroadcaster {
    /// Create a new event broadcaster with default capacity.
    pub fn new() -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Create a new event broadcaster with custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Subscribe to events for a user.
    ///
    /// Creates the channel if it doesn't exist.
    /// Returns a receiver that can be used to receive events.
    pub async fn subscribe(&self, user_id: Uuid) -> broadcast::Receiver<FeedEvent> {
        // First try to get existing channel
        {
            let channels = self.channels.read().await;
            if let Some(sender) = channels.get(&user_id) {
                return sender.subscribe();
            }
        }

        // Create new channel
        let mut channels = self.channels.write().await;
        // Check again in case another task created it
        if let Some(sender) = channels.get(&user_id) {
            return sender.subscribe();
        }

        let (sender, receiver) = broadcast::channel(self.capacity);
        channels.insert(user_id, sender);

        tracing::debug!(
            user_id = %user_id,
            capacity = self.capacity,
            "Created event channel for user"
        );

        receiver
    }

    /// Publish an event to all subscribers of a user.
    ///
    /// Returns the number of receivers that received the event,
    /// or None if no channel exists for this user.
    pub async fn publish(&self, user_id: Uuid, event: FeedEvent) -> Option<usize> {
        let channels = self.channels.read().await;
        if let Some(sender) = channels.get(&user_id) {
            match sender.send(event) {
                Ok(count) => {
                    tracing::trace!(
                        user_id = %user_id,
                        receivers = count,
                        "Published event to subscribers"
                    );
                    Some(count)
                }
                Err(_) => {
                    // No receivers - the channel will be cleaned up
                    tracing::trace!(
                        user_id = %user_id,
                        "No subscribers for event"
                    );
                    Some(0)
                }
            }
        } else {
            None
        }
    }

    /// Publish a notification event (convenience method).
    pub async fn publish_notification(&self, row: &NotificationRow) -> Option<usize> {
        self.publish(row.user_id, FeedEvent::Notification(NotificationEvent::from(row)))
            .await
    }

    /// Get the number of active channels.
    pub async fn channel_count(&self) -> usize {
        self.channels.read().await.len()
    }

    /// Get the number of subscribers for a user.
    pub async fn subscriber_count(&self, user_id: Uuid) -> usize {
        let channels = self.channels.read().await;
        channels
            .get(&user_id)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }

    /// Clean up channels with no subscribers.
    ///
    /// This can be called periodically to free up resources.
    pub async fn cleanup_empty_channels(&self) -> usize {
        let mut channels = self.channels.write().await;
        let before = channels.len();
        channels.retain(|id, sender| {
            let has_receivers = sender.receiver_count() > 0;
            if !has_receivers {
                tracing::debug!(
                    user_id = %id,
                    "Cleaning up empty event channel"
                );
            }
            has_receivers
        });
        before - channels.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(user_id: Uuid) -> NotificationRow {
        NotificationRow {
            id: 1,
            user_id,
            message: "Jane answered your question".to_string(),
            read: false,
            source_id: None,
            created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_broadcaster_subscribe() {
        let broadcaster = EventBroadcaster::new();
        let user_id = Uuid::new_v4();

        let _receiver = broadcaster.subscribe(user_id).await;
        assert_eq!(broadcaster.channel_count().await, 1);
        assert_eq!(broadcaster.subscriber_count(user_id).await, 1);
    }

    #[tokio::test]
    async fn test_broadcaster_multiple_subscribers() {
        let broadcaster = EventBroadcaster::new();
        let user_id = Uuid::new_v4();

        let _r1 = broadcaster.subscribe(user_id).await;
        let _r2 = broadcaster.subscribe(user_id).await;
        let _r3 = broadcaster.subscribe(user_id).await;

        assert_eq!(broadcaster.channel_count().await, 1);
        assert_eq!(broadcaster.subscriber_count(user_id).await, 3);
    }

    #[tokio::test]
    async fn test_broadcaster_publish() {
        let broadcaster = EventBroadcaster::new();
        let user_id = Uuid::new_v4();

        let mut receiver = broadcaster.subscribe(user_id).await;

        let count = broadcaster.publish_notification(&sample_row(user_id)).await;
        assert_eq!(count, Some(1));

        let event = receiver.recv().await.unwrap();
        match event {
            FeedEvent::Notification(e) => {
                assert_eq!(e.id, 1);
                assert_eq!(e.message, "Jane answered your question");
            }
            _ => panic!("Expected Notification event"),
        }
    }

    #[tokio::test]
    async fn test_publish_does_not_cross_users() {
        let broadcaster = EventBroadcaster::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut alice_rx = broadcaster.subscribe(alice).await;
        let _bob_rx = broadcaster.subscribe(bob).await;

        broadcaster.publish_notification(&sample_row(alice)).await;

        // Alice sees it; Bob's channel stays quiet.
        assert!(alice_rx.try_recv().is_ok());
        assert_eq!(broadcaster.subscriber_count(bob).await, 1);
    }

    #[tokio::test]
    async fn test_broadcaster_publish_no_channel() {
        let broadcaster = EventBroadcaster::new();
        let user_id = Uuid::new_v4();

        let count = broadcaster.publish_notification(&sample_row(user_id)).await;
        assert_eq!(count, None);
    }

    #[tokio::test]
    async fn test_broadcaster_cleanup() {
        let broadcaster = EventBroadcaster::new();
        let user_id = Uuid::new_v4();

        {
            let _receiver = broadcaster.subscribe(user_id).await;
            assert_eq!(broadcaster.channel_count().await, 1);
        }
        // receiver dropped

        let cleaned = broadcaster.cleanup_empty_channels().await;
        assert_eq!(cleaned, 1);
        assert_eq!(broadcaster.channel_count().await, 0);
    }

    #[tokio::test]
    async fn test_event_serialization() {
        let event = FeedEvent::Notification(NotificationEvent::from(&sample_row(Uuid::nil())));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"notification\""));
        assert!(json.contains("Jane answered your question"));
    }

    #[tokio::test]
    async fn test_lagged_event_serialization() {
        let event = FeedEvent::Lagged(LaggedEvent {
            events_missed: 100,
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"lagged\""));
        assert!(json.contains("\"events_missed\":100"));
    }
}
