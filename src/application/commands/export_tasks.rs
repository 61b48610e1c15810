use crate::application::commands::CommandInfo;
use crate::application::services::AgendaService;
use tracing::error;

pub fn register_export_command() -> CommandInfo {
    CommandInfo {
        name: "export",
        usage: "export",
        description: "Print the selected day's tasks as JSON",
    }
}

pub fn run_export(agenda: &AgendaService) -> String {
    match serde_json::to_string_pretty(&agenda.tasks_for_selected_day()) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize tasks: {}", e);
            format!("❌ Could not export tasks: {}", e)
        }
    }
}
