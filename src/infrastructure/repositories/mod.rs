pub mod memory_agenda_repository;

pub use memory_agenda_repository::MemoryAgendaRepository;
