use crate::application::commands::CommandInfo;
use crate::application::services::AgendaService;
use crate::domain::entities::AgendaItem;
use crate::domain::value_objects::WeekdayFormat;
use chrono::Weekday;

pub fn register_list_tasks_command() -> CommandInfo {
    CommandInfo {
        name: "list",
        usage: "list",
        description: "Show the tasks of the selected day",
    }
}

pub fn run_list_tasks(agenda: &AgendaService) -> String {
    render_task_list(agenda.selected_day(), &agenda.tasks_for_selected_day())
}

/// Title line followed by one row per task, or the empty-day message
pub fn render_task_list(day: Weekday, tasks: &[AgendaItem]) -> String {
    let mut content = format!("📋 Tasks for {}\n", day.to_label());

    if tasks.is_empty() {
        content.push_str("No tasks for this day 🎉");
        return content;
    }

    for task in tasks {
        let check = if task.done { "[x]" } else { "[ ]" };
        let text = if task.done {
            strike_through(&task.task)
        } else {
            task.task.clone()
        };
        content.push_str(&format!("{} {}  {}  (#{})\n", check, task.time, text, task.id));
    }
    content.pop();
    content
}

fn strike_through(text: &str) -> String {
    text.chars().flat_map(|c| [c, '\u{336}']).collect()
}
