pub mod notifier;
pub mod repositories;
pub mod terminal;
