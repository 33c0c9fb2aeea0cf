//! Notification records: domain types, creation defaults, and the
//! service that orchestrates them against the store.

mod events;
mod service;
mod types;

pub use events::{CreatedEvents, RecordCreated};
pub use service::{NotificationError, NotificationService};
pub use types::{
    AdditionalValue, CreateNotificationRequest, CreateNotificationResponse,
    GetNotificationsResponse, NotificationRecord, NotificationStatus, Severity,
};
