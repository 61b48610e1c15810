/// Failures surfaced by the agenda and its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// A form field was left empty at submission time
    MissingField(&'static str),
    /// Time text that has no numeric value
    InvalidTime(String),
    UnknownDay(String),
    TaskNotFound(u64),
    /// The notifier refused or failed to accept a reminder
    Notification(String),
}

impl std::fmt::Display for AgendaError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AgendaError::MissingField(field) => {
                write!(f, "Fill in time, task and day! (missing {})", field)
            }
            AgendaError::InvalidTime(input) => write!(f, "Invalid time: {}", input),
            AgendaError::UnknownDay(input) => write!(f, "Unknown day of week: {}", input),
            AgendaError::TaskNotFound(id) => write!(f, "Task #{} not found", id),
            AgendaError::Notification(msg) => write!(f, "Notification error: {}", msg),
        }
    }
}

impl std::error::Error for AgendaError {}
