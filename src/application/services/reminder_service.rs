use crate::domain::entities::{NotificationHandle, ReminderContent};
use crate::domain::errors::AgendaError;
use crate::domain::repositories::Notifier;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{debug, info};

pub const REMINDER_TITLE: &str = "📅 Task reminder";

#[derive(Clone)]
pub struct ReminderService {
    notifier: Arc<dyn Notifier>,
}

impl ReminderService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// One-time permission prompt at startup. Denial is not checked.
    pub async fn request_permission(&self) {
        self.notifier.request_permission().await;
        debug!("Notification permission requested");
    }

    /// Body text comes from the labels the user picked, not from the resolved trigger date
    pub fn build_content(task_label: &str, weekday_label: &str, time_label: &str) -> ReminderContent {
        ReminderContent {
            title: REMINDER_TITLE.to_string(),
            body: format!("Time for: {} ({} at {})", task_label, weekday_label, time_label),
        }
    }

    /// Hands one reminder to the notifier. Nothing is retried or tracked here.
    pub async fn request_reminder(
        &self,
        task_label: &str,
        weekday_label: &str,
        time_label: &str,
        scheduled_moment: DateTime<Local>,
    ) -> Result<NotificationHandle, AgendaError> {
        let content = Self::build_content(task_label, weekday_label, time_label);
        let handle = self.notifier.schedule_at(content, scheduled_moment).await?;

        info!(
            "Reminder {} scheduled for '{}' at {}",
            handle,
            task_label,
            scheduled_moment.format("%Y-%m-%d %H:%M")
        );
        Ok(handle)
    }
}
