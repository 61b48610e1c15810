use crate::application::commands::CommandInfo;
use crate::application::commands::utils::parse_task_id;
use crate::application::services::AgendaService;

pub fn register_toggle_task_command() -> CommandInfo {
    CommandInfo {
        name: "done",
        usage: "done <id>",
        description: "Check or uncheck a task",
    }
}

pub fn run_toggle_task(agenda: &mut AgendaService, args: &str) -> String {
    let Some(id) = parse_task_id(args) else {
        return "❌ Usage: done <id>".to_string();
    };

    match agenda.toggle_done(id) {
        Ok(task) if task.done => format!("✔️ #{} {} done", task.id, task.task),
        Ok(task) => format!("↩️ #{} {} pending again", task.id, task.task),
        Err(e) => format!("❌ {}", e),
    }
}
