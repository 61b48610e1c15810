use crate::application::commands::CommandInfo;
use crate::application::commands::utils::parse_task_id;
use crate::application::services::AgendaService;

pub fn register_remove_task_command() -> CommandInfo {
    CommandInfo {
        name: "remove",
        usage: "remove <id>",
        description: "Delete a task (its reminder still fires)",
    }
}

pub fn run_remove_task(agenda: &mut AgendaService, args: &str) -> String {
    let Some(id) = parse_task_id(args) else {
        return "❌ Usage: remove <id>".to_string();
    };

    match agenda.remove_task(id) {
        Ok(task) => match agenda.reminder_handle(task.id) {
            Some(handle) => format!(
                "🗑️ Removed #{} {} ({} will still fire)",
                task.id, task.task, handle
            ),
            None => format!("🗑️ Removed #{} {}", task.id, task.task),
        },
        Err(e) => format!("❌ {}", e),
    }
}
