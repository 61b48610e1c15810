pub mod notification_display;
pub mod quick_add_parser;
pub mod time_remaining;

pub use notification_display::render_delivered;
pub use quick_add_parser::{parse_quick_add, parse_task_id};
pub use time_remaining::format_time_remaining;
