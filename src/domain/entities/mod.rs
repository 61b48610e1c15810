pub mod agenda_item;
pub mod reminder;

pub use agenda_item::AgendaItem;
pub use reminder::{
    DeliveredReminder, NotificationHandle, NotificationPolicy, PendingReminder, ReminderContent,
};
