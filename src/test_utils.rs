//! Shared helpers for the agenda and reminder tests.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio::sync::Mutex;

use crate::domain::entities::{NotificationHandle, ReminderContent};
use crate::domain::errors::AgendaError;
use crate::domain::repositories::Notifier;

/// Notifier that records every request instead of delivering it
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub scheduled: Mutex<Vec<(ReminderContent, DateTime<Local>)>>,
    pub permission_requests: Mutex<u32>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn request_permission(&self) {
        *self.permission_requests.lock().await += 1;
    }

    async fn schedule_at(
        &self,
        content: ReminderContent,
        trigger: DateTime<Local>,
    ) -> Result<NotificationHandle, AgendaError> {
        if self.fail {
            return Err(AgendaError::Notification("notifier unavailable".to_string()));
        }
        let mut scheduled = self.scheduled.lock().await;
        scheduled.push((content, trigger));
        Ok(NotificationHandle(scheduled.len() as u64))
    }
}
