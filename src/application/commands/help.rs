use crate::application::commands::{
    CommandInfo, register_add_task_command, register_export_command, register_hour_command,
    register_list_tasks_command, register_minute_command, register_remove_task_command,
    register_select_day_command, register_task_command, register_toggle_task_command,
};

pub fn register_help_command() -> CommandInfo {
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Show this help message",
    }
}

pub fn all_commands() -> Vec<CommandInfo> {
    vec![
        register_select_day_command(),
        register_hour_command(),
        register_minute_command(),
        register_task_command(),
        register_add_task_command(),
        register_list_tasks_command(),
        register_toggle_task_command(),
        register_remove_task_command(),
        register_export_command(),
        register_help_command(),
        CommandInfo {
            name: "quit",
            usage: "quit",
            description: "Exit (pending reminders are lost)",
        },
    ]
}

pub fn run_help_command() -> String {
    let mut content = String::from("Available commands:\n");
    for command in all_commands() {
        content.push_str(&format!("  {:<18} {}\n", command.usage, command.description));
    }
    content.pop();
    content
}
