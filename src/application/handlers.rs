use crate::application::commands::{
    render_day_selector, run_add_task, run_export, run_help_command, run_list_tasks,
    run_remove_task, run_select_day, run_set_hour, run_set_minute, run_set_task, run_toggle_task,
};
use crate::application::commands::help::all_commands;
use crate::application::services::AgendaService;
use tracing::debug;

pub enum HandlerOutcome {
    Reply(String),
    Quit,
}

/// Maps one input line to an agenda command
pub struct CommandHandler {
    agenda: AgendaService,
}

impl CommandHandler {
    pub fn new(agenda: AgendaService) -> Self {
        Self { agenda }
    }

    #[cfg(test)]
    pub fn agenda(&self) -> &AgendaService {
        &self.agenda
    }

    /// Day selector plus the selected day's list
    pub fn render_screen(&self) -> String {
        format!(
            "{}\n\n{}",
            render_day_selector(self.agenda.selected_day()),
            run_list_tasks(&self.agenda)
        )
    }

    pub async fn handle_line(&mut self, line: &str) -> HandlerOutcome {
        let line = line.trim();
        if line.is_empty() {
            return HandlerOutcome::Reply(String::new());
        }

        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!("Received command: {}", name);

        let reply = match name.to_lowercase().as_str() {
            "day" => {
                let reply = run_select_day(&mut self.agenda, args);
                self.with_list(reply)
            }
            "hour" => run_set_hour(&mut self.agenda, args),
            "minute" => run_set_minute(&mut self.agenda, args),
            "task" => run_set_task(&mut self.agenda, args),
            "add" => {
                let reply = run_add_task(&mut self.agenda, args).await;
                self.with_list(reply)
            }
            "done" => {
                let reply = run_toggle_task(&mut self.agenda, args);
                self.with_list(reply)
            }
            "remove" | "rm" => {
                let reply = run_remove_task(&mut self.agenda, args);
                self.with_list(reply)
            }
            "list" => self.render_screen(),
            "export" => run_export(&self.agenda),
            "help" => run_help_command(),
            "quit" | "exit" => return HandlerOutcome::Quit,
            _ => {
                let known: Vec<&str> = all_commands().iter().map(|c| c.name).collect();
                format!("Command not recognized: {} (available: {})", name, known.join(", "))
            }
        };

        HandlerOutcome::Reply(reply)
    }

    fn with_list(&self, reply: String) -> String {
        format!("{}\n\n{}", reply, run_list_tasks(&self.agenda))
    }
}
