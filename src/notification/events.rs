//! Record-created event hook.
//!
//! Downstream processing (email/SMS dispatch) lives outside this
//! service. The write path only announces each stored record on a
//! broadcast channel; consumers subscribe separately, and their absence
//! never affects the write.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use super::types::{NotificationRecord, Severity};

/// Event published after a record is written.
#[derive(Debug, Clone, Serialize)]
pub struct RecordCreated {
    pub notification_id: String,
    pub user_id: String,
    pub category: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl RecordCreated {
    fn from_record(record: &NotificationRecord) -> Self {
        Self {
            notification_id: record.id.clone(),
            user_id: record.user_id.clone(),
            category: record.category.clone(),
            severity: record.severity,
            created_at: record.created_at,
        }
    }
}

/// Broadcast publisher for record-created events.
#[derive(Debug, Clone)]
pub struct CreatedEvents {
    tx: broadcast::Sender<RecordCreated>,
}

impl CreatedEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordCreated> {
        self.tx.subscribe()
    }

    /// Publish an event for a freshly written record.
    ///
    /// A send error only means nobody is subscribed; the write path
    /// ignores it.
    pub fn publish(&self, record: &NotificationRecord) {
        let event = RecordCreated::from_record(record);
        if self.tx.send(event).is_err() {
            tracing::trace!(
                notification_id = %record.id,
                "No subscribers for record-created event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::CreateNotificationRequest;

    fn test_record() -> NotificationRecord {
        NotificationRecord::from_request(CreateNotificationRequest {
            user_id: "user-1".to_string(),
            category: "billing".to_string(),
            notification_type: "invoice.created".to_string(),
            additional_data: None,
            is_critical: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let events = CreatedEvents::new(8);
        let mut rx = events.subscribe();

        let record = test_record();
        events.publish(&record);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.notification_id, record.id);
        assert_eq!(event.user_id, "user-1");
        assert_eq!(event.severity, Severity::Critical);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_silent() {
        let events = CreatedEvents::new(8);
        events.publish(&test_record());
    }

    #[tokio::test]
    async fn test_subscription_starts_at_subscribe_time() {
        let events = CreatedEvents::new(8);

        events.publish(&test_record());
        let mut rx = events.subscribe();
        let record = test_record();
        events.publish(&record);

        // Only the post-subscribe event is seen
        let event = rx.recv().await.unwrap();
        assert_eq!(event.notification_id, record.id);
        assert!(rx.try_recv().is_err());
    }
}
