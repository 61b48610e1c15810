pub mod add_task;
pub mod export_tasks;
pub mod help;
pub mod list_tasks;
pub mod remove_task;
pub mod select_day;
pub mod set_form_field;
pub mod toggle_task;
pub mod utils;

/// Name, usage line and description shown by `help`
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub use add_task::{register_add_task_command, run_add_task};
pub use export_tasks::{register_export_command, run_export};
pub use help::run_help_command;
pub use list_tasks::{register_list_tasks_command, run_list_tasks};
pub use remove_task::{register_remove_task_command, run_remove_task};
pub use select_day::{register_select_day_command, render_day_selector, run_select_day};
pub use set_form_field::{
    register_hour_command, register_minute_command, register_task_command, run_set_hour,
    run_set_minute, run_set_task,
};
pub use toggle_task::{register_toggle_task_command, run_toggle_task};
