use crate::domain::value_objects::{TimeOfDay, WeekdayFormat};
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Weekday,
};

/// Inputs of one scheduling call. Built when a task is added and dropped afterwards.
#[derive(Debug, Clone)]
pub struct ScheduleRequest<Tz: TimeZone> {
    pub day: Weekday,
    pub time: TimeOfDay,
    pub now: DateTime<Tz>,
}

impl<Tz: TimeZone> ScheduleRequest<Tz> {
    pub fn new(day: Weekday, time: TimeOfDay, now: DateTime<Tz>) -> Self {
        Self { day, time, now }
    }

    pub fn next_occurrence(&self) -> DateTime<Tz> {
        compute_next_occurrence(self.day, self.time, &self.now)
    }
}

/// Next instant at or after `now` that falls on `target_day` at `target_time`, seconds zeroed.
///
/// Today only counts when its slot has not passed yet; otherwise the same
/// weekday one week later is used. Out-of-range hour or minute values roll
/// over into the neighbouring day or hour.
pub fn compute_next_occurrence<Tz: TimeZone>(
    target_day: Weekday,
    target_time: TimeOfDay,
    now: &DateTime<Tz>,
) -> DateTime<Tz> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    let time_offset = target_time.since_midnight();

    let candidate_today = resolve_local(&tz, shift(midnight, time_offset));

    let mut day_offset = (target_day.index() + 7 - now.weekday().index()) % 7;
    if day_offset == 0 && candidate_today < *now {
        day_offset = 7;
    }

    let mut target = shift(
        shift(midnight, Duration::days(i64::from(day_offset))),
        time_offset,
    );
    let mut next = resolve_local(&tz, target);

    // negative values can land before `now` even on a later weekday
    while next < *now {
        let behind = now.clone() - next.clone();
        target = shift(target, Duration::weeks(behind.num_weeks() + 1));
        next = resolve_local(&tz, target);
    }
    next
}

fn shift(base: NaiveDateTime, by: Duration) -> NaiveDateTime {
    base.checked_add_signed(by).unwrap_or(NaiveDateTime::MAX)
}

/// Maps a wall-clock time onto the zone. Ambiguous times take the earlier
/// instant, times inside a DST gap move to the first valid minute after it.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = naive;
            for _ in 0..(24 * 60) {
                probe = shift(probe, Duration::minutes(1));
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt;
                }
            }
            tz.from_utc_datetime(&naive)
        }
    }
}
