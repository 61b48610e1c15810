use crate::domain::entities::AgendaItem;
use chrono::Weekday;

/// Storage for the agenda list. Items live only as long as the process.
pub trait AgendaRepository: Send {
    /// Appends a new item and returns its id
    fn add_item(&mut self, time: String, task: String, day: Weekday) -> u64;

    /// All items in insertion order
    fn list_items(&self) -> Vec<AgendaItem>;

    /// Flip the done flag of one item, returning its new state
    fn toggle_done(&mut self, id: u64) -> Option<AgendaItem>;

    fn remove_item(&mut self, id: u64) -> Option<AgendaItem>;

    /// Items tagged with `day`, in insertion order
    fn items_for_day(&self, day: Weekday) -> Vec<AgendaItem> {
        self.list_items()
            .into_iter()
            .filter(|item| item.day == day)
            .collect()
    }
}
