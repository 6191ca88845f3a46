//! Wall-clock text formatting.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use desktop_app_contract::Language;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

fn weekday_name(day: Weekday, language: Language) -> &'static str {
    match day {
        Weekday::Mon => language.pick("Monday", "Montag"),
        Weekday::Tue => language.pick("Tuesday", "Dienstag"),
        Weekday::Wed => language.pick("Wednesday", "Mittwoch"),
        Weekday::Thu => language.pick("Thursday", "Donnerstag"),
        Weekday::Fri => language.pick("Friday", "Freitag"),
        Weekday::Sat => language.pick("Saturday", "Samstag"),
        Weekday::Sun => language.pick("Sunday", "Sonntag"),
    }
}

/// `HH:MM:SS` in 24-hour form.
pub fn wall_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

/// Weekday, month, and day in the order each language writes them.
///
/// English: `Tuesday, March 5`. German: `Dienstag, 5. März`.
pub fn date_line<Tz: TimeZone>(now: &DateTime<Tz>, language: Language) -> String {
    let weekday = weekday_name(now.weekday(), language);
    let month_index = now.month0() as usize;
    let day = now.day();
    match language {
        Language::En => format!("{weekday}, {} {day}", MONTHS_EN[month_index]),
        Language::De => format!("{weekday}, {day}. {}", MONTHS_DE[month_index]),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wall_time_is_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 7, 4, 9).unwrap();
        assert_eq!(wall_time(&at), "07:04:09");
    }

    #[test]
    fn date_line_is_localized() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(date_line(&at, Language::En), "Tuesday, March 5");
        assert_eq!(date_line(&at, Language::De), "Dienstag, 5. März");
    }

    #[test]
    fn formatting_uses_the_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 30, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(wall_time(&at), "01:30:00");
        assert_eq!(date_line(&at, Language::En), "Wednesday, January 1");
    }
}
