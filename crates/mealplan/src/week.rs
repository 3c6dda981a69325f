use time::{Date, Duration, Weekday};

/// A Monday-to-Sunday calendar week backing one plan week index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWeek {
    pub start: Date,
    pub end: Date,
}

impl CalendarWeek {
    /// Display label, e.g. `"Jan 20 – Jan 26"`.
    pub fn label(&self) -> String {
        let format = time::macros::format_description!("[month repr:short] [day padding:none]");

        // Formatting a valid Date with this description cannot fail.
        let start = self.start.format(&format).unwrap_or_default();
        let end = self.end.format(&format).unwrap_or_default();

        format!("{start} – {end}")
    }
}

/// The Monday of the week containing `date`.
pub fn monday_of(date: Date) -> Date {
    let days_since_monday = match date.weekday() {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    };

    date - Duration::days(days_since_monday)
}

/// The calendar week `week_index` weeks after the week containing `anchor`.
/// Week index 1 is the week of `anchor` itself.
pub fn week_at(anchor: Date, week_index: u8) -> CalendarWeek {
    let offset = week_index.saturating_sub(1) as i64;
    let start = monday_of(anchor) + Duration::weeks(offset);

    CalendarWeek {
        start,
        end: start + Duration::days(6),
    }
}
