use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month currently shown in the calendar. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDate {
    pub year: i32,
    pub month: u32,
}

impl ViewDate {
    /// Builds a view date, carrying month indexes >= 12 into the year.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: year.saturating_add((month / 12) as i32),
            month: month % 12,
        }
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn advance(self) -> Self {
        self.shift(1)
    }

    pub fn retreat(self) -> Self {
        self.shift(-1)
    }

    /// Moves by whole months; stays put if the year would leave the `i32` range.
    fn shift(self, delta: i64) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) + delta;
        match i32::try_from(index.div_euclid(12)) {
            Ok(year) => Self {
                year,
                month: index.rem_euclid(12) as u32,
            },
            Err(_) => self,
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn weekday_offset(self) -> u32 {
        weekday_offset(self.year, self.month)
    }

    pub fn contains_day(self, day: u32) -> bool {
        day >= 1 && day <= self.days_in_month()
    }

    /// Date for a day of this month, `None` when the day is outside it.
    pub fn date_of(self, day: u32) -> Option<NaiveDate> {
        if !self.contains_day(day) {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Header label, e.g. "March 2024".
    pub fn label(self) -> String {
        self.first_day()
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// Last day of the month, found as "day 0" of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = ViewDate::new(year, month).advance();
    NaiveDate::from_ymd_opt(next.year, next.month + 1, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

/// Weekday of the 1st, counted from Sunday = 0.
pub fn weekday_offset(year: i32, month: u32) -> u32 {
    ViewDate::new(year, month)
        .first_day()
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}

/// Flat grid sequence: one `None` per leading blank, then `Some(1..=days)`.
pub fn build_calendar(year: i32, month: u32) -> Vec<Option<u32>> {
    let offset = weekday_offset(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(offset + days as usize);
    cells.extend(std::iter::repeat_n(None, offset));
    cells.extend((1..=days).map(Some));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn december_and_thirty_day_months() {
        assert_eq!(days_in_month(2023, 11), 31);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 0), 31);
    }

    #[test]
    fn calendar_length_is_offset_plus_days() {
        for year in [1999, 2023, 2024, 2025, 2100] {
            for month in 0..12 {
                let cells = build_calendar(year, month);
                let expected = weekday_offset(year, month) + days_in_month(year, month);
                assert_eq!(cells.len(), expected as usize, "{year}-{month}");
            }
        }
    }

    #[test]
    fn calendar_starts_with_placeholders() {
        // 2024-02-01 was a Thursday.
        let cells = build_calendar(2024, 1);
        assert_eq!(weekday_offset(2024, 1), 4);
        assert!(cells[..4].iter().all(Option::is_none));
        assert_eq!(cells[4], Some(1));
        assert_eq!(cells.last(), Some(&Some(29)));
    }

    #[test]
    fn sunday_start_has_no_offset() {
        // 2023-10-01 was a Sunday.
        let cells = build_calendar(2023, 9);
        assert_eq!(cells[0], Some(1));
    }

    #[test]
    fn navigation_round_trips_across_year_boundary() {
        let december = ViewDate::new(2023, 11);
        let january = december.advance();
        assert_eq!(january, ViewDate { year: 2024, month: 0 });
        assert_eq!(january.retreat(), december);

        let start = ViewDate::new(2024, 0);
        assert_eq!(start.retreat(), ViewDate { year: 2023, month: 11 });
        for month in 0..12 {
            let view = ViewDate::new(2025, month);
            assert_eq!(view.advance().retreat(), view);
            assert_eq!(view.retreat().advance(), view);
        }
    }

    #[test]
    fn years_beyond_the_date_range_yield_an_empty_month() {
        let view = ViewDate::new(200_000_000, 0);
        assert_eq!(view.first_day(), None);
        assert_eq!(days_in_month(200_000_000, 0), 0);
        assert!(build_calendar(200_000_000, 0).is_empty());
        assert_eq!(view.advance(), ViewDate { year: 200_000_000, month: 1 });
    }

    #[test]
    fn shifting_at_the_integer_edge_does_not_wrap() {
        let last = ViewDate::new(i32::MAX, 11);
        assert_eq!(last.advance(), last);
        let first = ViewDate::new(i32::MIN, 0);
        assert_eq!(first.retreat(), first);
        assert_eq!(ViewDate::new(i32::MAX, 13).year, i32::MAX);
    }

    #[test]
    fn new_carries_overflowing_month() {
        assert_eq!(ViewDate::new(2024, 13), ViewDate { year: 2025, month: 1 });
    }

    #[test]
    fn date_of_rejects_days_outside_month() {
        let view = ViewDate::new(2023, 1);
        assert_eq!(view.date_of(0), None);
        assert_eq!(view.date_of(29), None);
        assert_eq!(view.date_of(28), NaiveDate::from_ymd_opt(2023, 2, 28));
    }

    #[test]
    fn label_uses_full_month_name() {
        assert_eq!(ViewDate::new(2024, 2).label(), "March 2024");
    }
}
