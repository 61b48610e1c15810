use crate::domain::errors::AgendaError;
use crate::domain::value_objects::TimeOfDay;

const DEFAULT_HOUR: &str = "08";
const DEFAULT_MINUTE: &str = "00";
pub const TIME_INPUT_MAX_LEN: usize = 2;

/// Transient input state of the "new task" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub task: String,
    pub hour: String,
    pub minute: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            task: String::new(),
            hour: DEFAULT_HOUR.to_string(),
            minute: DEFAULT_MINUTE.to_string(),
        }
    }
}

impl TaskForm {
    pub fn set_task(&mut self, task: &str) {
        self.task = task.to_string();
    }

    /// Time inputs hold at most two characters
    pub fn set_hour(&mut self, hour: &str) {
        self.hour = hour.trim().chars().take(TIME_INPUT_MAX_LEN).collect();
    }

    pub fn set_minute(&mut self, minute: &str) {
        self.minute = minute.trim().chars().take(TIME_INPUT_MAX_LEN).collect();
    }

    /// Checks that every field is filled. Returns the task text and the
    /// `HH:MM` label, padded but otherwise as typed.
    pub fn validate(&self) -> Result<(String, String), AgendaError> {
        if self.task.trim().is_empty() {
            return Err(AgendaError::MissingField("task"));
        }
        if self.hour.is_empty() {
            return Err(AgendaError::MissingField("hour"));
        }
        if self.minute.is_empty() {
            return Err(AgendaError::MissingField("minute"));
        }

        let time_label = format!("{:0>2}:{:0>2}", self.hour, self.minute);
        Ok((self.task.clone(), time_label))
    }

    /// Numeric value of the time inputs
    pub fn time(&self) -> Result<TimeOfDay, AgendaError> {
        TimeOfDay::from_inputs(&self.hour, &self.minute)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
