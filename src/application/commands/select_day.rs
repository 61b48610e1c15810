use crate::application::commands::CommandInfo;
use crate::application::services::AgendaService;
use crate::domain::errors::AgendaError;
use crate::domain::value_objects::{WEEK_DAYS, WeekdayFormat};
use chrono::Weekday;

pub fn register_select_day_command() -> CommandInfo {
    CommandInfo {
        name: "day",
        usage: "day <name>",
        description: "Select the day to show and to add tasks to",
    }
}

pub fn run_select_day(agenda: &mut AgendaService, args: &str) -> String {
    match Weekday::parse_label(args) {
        Some(day) => {
            agenda.select_day(day);
            render_day_selector(day)
        }
        None => format!("❌ {}", AgendaError::UnknownDay(args.trim().to_string())),
    }
}

/// Short labels of the week with the selected one bracketed
pub fn render_day_selector(selected: Weekday) -> String {
    WEEK_DAYS
        .iter()
        .map(|day| {
            if *day == selected {
                format!("[{}]", day.to_short_en())
            } else {
                format!(" {} ", day.to_short_en())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
