use crate::application::commands::CommandInfo;
use crate::application::services::AgendaService;

pub fn register_hour_command() -> CommandInfo {
    CommandInfo {
        name: "hour",
        usage: "hour <HH>",
        description: "Set the hour of the new task",
    }
}

pub fn register_minute_command() -> CommandInfo {
    CommandInfo {
        name: "minute",
        usage: "minute <MM>",
        description: "Set the minutes of the new task",
    }
}

pub fn register_task_command() -> CommandInfo {
    CommandInfo {
        name: "task",
        usage: "task <text>",
        description: "Set the text of the new task",
    }
}

pub fn run_set_hour(agenda: &mut AgendaService, args: &str) -> String {
    agenda.form_mut().set_hour(args);
    render_form(agenda)
}

pub fn run_set_minute(agenda: &mut AgendaService, args: &str) -> String {
    agenda.form_mut().set_minute(args);
    render_form(agenda)
}

pub fn run_set_task(agenda: &mut AgendaService, args: &str) -> String {
    agenda.form_mut().set_task(args.trim());
    render_form(agenda)
}

fn render_form(agenda: &AgendaService) -> String {
    let form = agenda.form();
    let task = if form.task.is_empty() { "(empty)" } else { form.task.as_str() };
    format!("📝 {}:{}  {}", form.hour, form.minute, task)
}
