use chrono::{DateTime, Local};
use std::cmp::Ordering;
use std::fmt;

/// Title and body shown when a reminder fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContent {
    pub title: String,
    pub body: String,
}

/// Opaque identifier handed back by the notifier for each scheduled reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(pub u64);

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "reminder-{}", self.0)
    }
}

/// How a delivered reminder is presented. Passed to the notifier when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPolicy {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
    pub show_banner: bool,
    pub show_list: bool,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: false,
            set_badge: false,
            show_banner: true,
            show_list: true,
        }
    }
}

/// Reminder waiting in the notifier queue
#[derive(Debug, Clone)]
pub struct PendingReminder {
    pub handle: NotificationHandle,
    pub trigger: DateTime<Local>,
    pub content: ReminderContent,
}

// earliest trigger first; ties fall back to scheduling order
impl Ord for PendingReminder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.trigger
            .cmp(&other.trigger)
            .then_with(|| self.handle.0.cmp(&other.handle.0))
    }
}

impl PartialOrd for PendingReminder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PendingReminder {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for PendingReminder {}

/// Reminder that reached its trigger time and was handed to the display
#[derive(Debug, Clone)]
pub struct DeliveredReminder {
    pub handle: NotificationHandle,
    pub content: ReminderContent,
    pub fired_at: DateTime<Local>,
    pub policy: NotificationPolicy,
}
