pub mod agenda_repository;
pub mod notifier;

pub use agenda_repository::AgendaRepository;
pub use notifier::Notifier;
