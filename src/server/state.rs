use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::notification::{CreatedEvents, NotificationService};
use crate::store::NotificationStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub notifications: Arc<NotificationService>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn NotificationStore>) -> Self {
        let events = CreatedEvents::new(settings.events.buffer_size);
        let notifications = Arc::new(NotificationService::new(store, events));

        Self {
            settings: Arc::new(settings),
            notifications,
            start_time: Instant::now(),
        }
    }
}
