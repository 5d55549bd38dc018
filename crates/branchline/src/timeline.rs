//! Calendar to pixel mapping.
//!
//! A [`Timeline`] is the calendar window a diagram shows: a start instant and
//! a whole number of weeks. It maps timestamps onto horizontal offsets inside
//! a region, one equal column per day.
//!
//! Week columns are labelled by their Friday, see [`week_end`].

use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

use branchline_core::geometry::Bounds;

const DAYS_PER_WEEK: i64 = 7;

/// The calendar window of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    start: DateTime<Utc>,
    weeks: NonZeroU32,
}

impl Timeline {
    /// Creates a timeline of `weeks` weeks starting at `start`.
    ///
    /// Returns `None` when `weeks` is zero.
    pub fn new(start: DateTime<Utc>, weeks: u32) -> Option<Self> {
        NonZeroU32::new(weeks).map(|weeks| Self { start, weeks })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn weeks(&self) -> u32 {
        self.weeks.get()
    }

    /// Maps `t` to a horizontal offset from the left edge of `bounds`.
    ///
    /// Instants at or before the start map to `0`, instants past the window
    /// map to `bounds.width()`. Partial days are dropped, so every instant of
    /// a given day shares one column edge.
    pub fn time_to_x(&self, bounds: Bounds, t: DateTime<Utc>) -> i32 {
        if t <= self.start {
            return 0;
        }

        let width = i64::from(bounds.width().max(0));
        let day_width = width / (DAYS_PER_WEEK * i64::from(self.weeks.get()));
        let days = (t - self.start).num_hours() / 24;

        let offset = days.saturating_mul(day_width).clamp(0, width);
        // `offset` is within `0..=bounds.width()`, which came from an `i32`
        i32::try_from(offset).unwrap_or(i32::MAX)
    }

    /// Iterates the Friday anchoring each week column, left to right.
    ///
    /// Stops early if an anchor falls past the last representable date.
    pub fn week_anchors(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        let first = week_end(self.start);
        (0..i64::from(self.weeks.get()))
            .map_while(move |week| first.checked_add_signed(Duration::days(DAYS_PER_WEEK * week)))
    }

    /// Returns the `day/month` label of every week column, left to right.
    pub fn week_labels(&self) -> Vec<String> {
        self.week_anchors()
            .map(|anchor| format!("{}/{}", anchor.day(), anchor.month()))
            .collect()
    }
}

/// Returns the first Friday at or after `t`, keeping the time of day.
pub fn week_end(t: DateTime<Utc>) -> DateTime<Utc> {
    let days_ahead = match t.weekday() {
        Weekday::Mon => 4,
        Weekday::Tue => 3,
        Weekday::Wed => 2,
        Weekday::Thu => 1,
        Weekday::Fri => 0,
        Weekday::Sat => 6,
        Weekday::Sun => 5,
    };
    t + Duration::days(days_ahead)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn timeline(weeks: u32) -> Timeline {
        Timeline::new(monday(), weeks).unwrap()
    }

    #[test]
    fn test_zero_weeks_is_rejected() {
        assert!(Timeline::new(monday(), 0).is_none());
    }

    #[test]
    fn test_time_to_x_before_start_is_zero() {
        let bounds = Bounds::new(100, 0, 380, 10);
        let tl = timeline(4);
        assert_eq!(tl.time_to_x(bounds, monday() - Duration::days(1)), 0);
        assert_eq!(tl.time_to_x(bounds, monday()), 0);
    }

    #[test]
    fn test_time_to_x_whole_days() {
        // 280 px over 28 days: 10 px per day
        let bounds = Bounds::new(100, 0, 380, 10);
        let tl = timeline(4);

        assert_eq!(tl.time_to_x(bounds, monday() + Duration::days(3)), 30);
        // Partial days are dropped
        assert_eq!(
            tl.time_to_x(bounds, monday() + Duration::days(3) + Duration::hours(23)),
            30
        );
        assert_eq!(tl.time_to_x(bounds, monday() + Duration::hours(5)), 0);
    }

    #[test]
    fn test_time_to_x_fractional_day_width_truncates() {
        // 100 px over 14 days: 7 px per day
        let bounds = Bounds::new(0, 0, 100, 10);
        let tl = timeline(2);
        assert_eq!(tl.time_to_x(bounds, monday() + Duration::days(2)), 14);
        assert_eq!(tl.time_to_x(bounds, monday() + Duration::days(14)), 98);
    }

    #[test]
    fn test_time_to_x_after_window_is_clamped() {
        let bounds = Bounds::new(0, 0, 280, 10);
        let tl = timeline(4);
        assert_eq!(tl.time_to_x(bounds, monday() + Duration::days(128)), 280);
    }

    #[test]
    fn test_week_end_each_weekday() {
        let friday = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        for offset in 0..5 {
            // Monday through Friday of the same week
            assert_eq!(week_end(monday() + Duration::days(offset)), friday);
        }

        let saturday = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
        let next_friday = Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(week_end(saturday), next_friday);
        assert_eq!(week_end(sunday), next_friday);
    }

    #[test]
    fn test_week_end_keeps_time_of_day() {
        let t = Utc.with_ymd_and_hms(2024, 1, 3, 14, 30, 0).unwrap();
        assert_eq!(
            week_end(t),
            Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_week_anchors_stop_at_calendar_end() {
        let start = DateTime::<Utc>::MAX_UTC - Duration::days(20);
        let tl = Timeline::new(start, 10).unwrap();

        let anchors: Vec<_> = tl.week_anchors().collect();
        assert!(!anchors.is_empty());
        assert!(anchors.len() < 10);
        assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_week_labels() {
        let tl = Timeline::new(Utc.with_ymd_and_hms(2024, 1, 22, 0, 0, 0).unwrap(), 3).unwrap();
        assert_eq!(tl.week_labels(), vec!["26/1", "2/2", "9/2"]);
    }
}
