pub mod agenda_service;
pub mod occurrence_scheduler;
pub mod reminder_service;

pub use agenda_service::AgendaService;
pub use reminder_service::ReminderService;
