use chrono::Weekday;

/// Days in selector order, index 0 is Sunday
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub trait WeekdayFormat {
    fn to_label(&self) -> &'static str;
    fn to_short_en(&self) -> &'static str;
    fn index(&self) -> u32;
    fn parse_label(s: &str) -> Option<Weekday>;
}

impl WeekdayFormat for Weekday {
    /// Full english name, used in titles and reminder bodies
    fn to_label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Converts weekday to short english abbreviation
    fn to_short_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    fn index(&self) -> u32 {
        self.num_days_from_sunday()
    }

    /// Parses english names, abbreviations and the portuguese day names
    fn parse_label(s: &str) -> Option<Weekday> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "segunda-feira" | "segunda" | "seg" => Some(Weekday::Mon),
            "tuesday" | "tue" | "terça-feira" | "terça" | "ter" => Some(Weekday::Tue),
            "wednesday" | "wed" | "quarta-feira" | "quarta" | "qua" => Some(Weekday::Wed),
            "thursday" | "thu" | "quinta-feira" | "quinta" | "qui" => Some(Weekday::Thu),
            "friday" | "fri" | "sexta-feira" | "sexta" | "sex" => Some(Weekday::Fri),
            "saturday" | "sat" | "sábado" | "sabado" | "sáb" => Some(Weekday::Sat),
            "sunday" | "sun" | "domingo" | "dom" => Some(Weekday::Sun),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_start_on_sunday_and_are_distinct() {
        for (i, day) in WEEK_DAYS.iter().enumerate() {
            assert_eq!(day.index(), i as u32);
        }
    }

    #[test]
    fn parses_english_and_portuguese_names() {
        assert_eq!(Weekday::parse_label("Friday"), Some(Weekday::Fri));
        assert_eq!(Weekday::parse_label(" wed "), Some(Weekday::Wed));
        assert_eq!(Weekday::parse_label("Segunda-feira"), Some(Weekday::Mon));
        assert_eq!(Weekday::parse_label("Sábado"), Some(Weekday::Sat));
        assert_eq!(Weekday::parse_label("someday"), None);
    }

    #[test]
    fn labels_round_trip_through_parser() {
        for day in WEEK_DAYS {
            assert_eq!(Weekday::parse_label(day.to_label()), Some(day));
            assert_eq!(Weekday::parse_label(day.to_short_en()), Some(day));
        }
    }
}
