pub mod commands;
pub mod form;
pub mod handlers;
pub mod services;
