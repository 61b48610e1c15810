pub mod time_of_day;
pub mod weekday_format;

pub use time_of_day::TimeOfDay;
pub use weekday_format::{WEEK_DAYS, WeekdayFormat};
