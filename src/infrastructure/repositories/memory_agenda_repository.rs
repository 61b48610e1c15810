use chrono::Weekday;

use crate::domain::entities::AgendaItem;
use crate::domain::repositories::AgendaRepository;

/// In-memory implementation of AgendaRepository. Keeps insertion order so
/// equal times list in the order they were added.
#[derive(Debug)]
pub struct MemoryAgendaRepository {
    items: Vec<AgendaItem>,
    next_id: u64,
}

impl MemoryAgendaRepository {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Repository pre-filled with the two sample entries shown on first launch
    pub fn with_samples() -> Self {
        let mut repo = Self::new();
        repo.add_item("08:00".to_string(), "Wake up".to_string(), Weekday::Mon);
        repo.add_item("09:00".to_string(), "Meeting".to_string(), Weekday::Tue);
        repo
    }
}

impl Default for MemoryAgendaRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AgendaRepository for MemoryAgendaRepository {
    fn add_item(&mut self, time: String, task: String, day: Weekday) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(AgendaItem::new(id, time, task, day));
        id
    }

    fn list_items(&self) -> Vec<AgendaItem> {
        self.items.clone()
    }

    fn toggle_done(&mut self, id: u64) -> Option<AgendaItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.toggle_done();
        Some(item.clone())
    }

    fn remove_item(&mut self, id: u64) -> Option<AgendaItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
