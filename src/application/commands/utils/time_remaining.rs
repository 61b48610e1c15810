use chrono::{DateTime, Duration, TimeZone};

/// Human-readable time left until `target`, like "2 days, 3h and 15 mins"
pub fn format_time_remaining<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    if target <= now {
        return "Due now".to_string();
    }

    format_duration(target.clone() - now.clone())
}

fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;

    match (days, hours, minutes) {
        (0, 0, 0) => "Less than 1 minute".to_string(),
        (0, 0, mins) => format!("{} min{}", mins, plural(mins)),
        (0, hrs, 0) => format!("{} hour{}", hrs, plural(hrs)),
        (0, hrs, mins) => format!("{}h and {} min{}", hrs, mins, plural(mins)),
        (days, 0, 0) => format!("{} day{}", days, plural(days)),
        (days, hrs, 0) => format!("{} day{} and {} hour{}", days, plural(days), hrs, plural(hrs)),
        (days, hrs, mins) => format!(
            "{} day{}, {}h and {} min{}",
            days,
            plural(days),
            hrs,
            mins,
            plural(mins)
        ),
    }
}

fn plural(n: i64) -> &'static str {
    if n != 1 { "s" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_each_granularity() {
        let now = Utc.with_ymd_and_hms(2025, 6, 4, 10, 15, 30).unwrap();
        let cases = [
            (Duration::seconds(20), "Less than 1 minute"),
            (Duration::minutes(1), "1 min"),
            (Duration::hours(2), "2 hours"),
            (Duration::minutes(135), "2h and 15 mins"),
            (Duration::days(7), "7 days"),
            (Duration::hours(25), "1 day and 1 hour"),
            (Duration::minutes(2 * 1440 + 8 * 60 + 14), "2 days, 8h and 14 mins"),
        ];
        for (offset, expected) in cases {
            assert_eq!(format_time_remaining(&(now + offset), &now), expected);
        }
    }

    #[test]
    fn past_targets_are_due() {
        let now = Utc.with_ymd_and_hms(2025, 6, 4, 10, 15, 30).unwrap();
        assert_eq!(format_time_remaining(&now, &now), "Due now");
    }
}
