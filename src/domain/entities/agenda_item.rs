use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: u64,
    pub time: String, // zero-padded HH:MM label
    pub task: String,
    pub day: Weekday,
    pub done: bool,
}

impl AgendaItem {
    pub fn new(id: u64, time: String, task: String, day: Weekday) -> Self {
        Self {
            id,
            time,
            task,
            day,
            done: false,
        }
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}
