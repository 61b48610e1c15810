use crate::application::form::TIME_INPUT_MAX_LEN;

/// Splits `HH:MM task text` into hour text, minute text and task text
pub fn parse_quick_add(input: &str) -> Result<(String, String, String), String> {
    let input = input.trim();
    let (time_str, task) = input
        .split_once(char::is_whitespace)
        .ok_or("Invalid format. Use: add HH:MM task")?;

    let (hour, minute) = time_str
        .split_once(':')
        .ok_or("Invalid time format. Use HH:MM")?;

    if hour.chars().count() > TIME_INPUT_MAX_LEN || minute.chars().count() > TIME_INPUT_MAX_LEN {
        return Err(format!(
            "Hour and minute take at most {} characters. Use: add HH:MM task",
            TIME_INPUT_MAX_LEN
        ));
    }

    Ok((hour.to_string(), minute.to_string(), task.trim().to_string()))
}

/// Parses a `#12` or `12` style task id
pub fn parse_task_id(input: &str) -> Option<u64> {
    input.trim().trim_start_matches('#').parse().ok()
}
