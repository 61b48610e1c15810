use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::entities::{NotificationHandle, ReminderContent};
use crate::domain::errors::AgendaError;

/// Platform side of reminders: asks for permission once and fires content at a given instant
#[async_trait]
pub trait Notifier: Send + Sync {
    /// One-time permission prompt. The outcome is never reported back.
    async fn request_permission(&self);

    /// Queue `content` to be delivered at `trigger`
    async fn schedule_at(
        &self,
        content: ReminderContent,
        trigger: DateTime<Local>,
    ) -> Result<NotificationHandle, AgendaError>;
}
