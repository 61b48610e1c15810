use crate::application::commands::CommandInfo;
use crate::application::commands::utils::{format_time_remaining, parse_quick_add};
use crate::application::services::AgendaService;
use chrono::Local;
use tracing::error;

pub fn register_add_task_command() -> CommandInfo {
    CommandInfo {
        name: "add",
        usage: "add [HH:MM task]",
        description: "Add the task in the form (or the given one) to the selected day",
    }
}

/// With arguments the form is filled first, otherwise it is submitted as typed
pub async fn run_add_task(agenda: &mut AgendaService, args: &str) -> String {
    if !args.trim().is_empty() {
        match parse_quick_add(args) {
            Ok((hour, minute, task)) => {
                let form = agenda.form_mut();
                form.set_hour(&hour);
                form.set_minute(&minute);
                form.set_task(&task);
            }
            Err(e) => return format!("❌ {}", e),
        }
    }

    match agenda.add_task().await {
        Ok(added) => {
            let reminder = match (added.scheduled_for, added.reminder) {
                (Some(scheduled_for), Some(handle)) => format!(
                    "⏰ {} set for {} (in {})",
                    handle,
                    scheduled_for.format("%A, %d %B %Y at %H:%M"),
                    format_time_remaining(&scheduled_for, &Local::now())
                ),
                (None, _) => "⚠️ Time is not a number, no reminder scheduled".to_string(),
                (Some(_), None) => "⚠️ Reminder could not be scheduled".to_string(),
            };
            format!("✅ Task #{} added\n{}", added.id, reminder)
        }
        Err(e) => {
            error!("Failed to add task: {}", e);
            format!("❌ Error: {}", e)
        }
    }
}
