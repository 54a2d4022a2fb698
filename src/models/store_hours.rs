//! Store operating hours models.
//!
//! This module defines per-weekday opening hours and the [`StoreWeek`]
//! wrapper that anchors the six scheduled weekdays (Monday through
//! Saturday; Sunday is excluded by design) to calendar dates.

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Returns the opening time substituted when a day's hours are missing
/// or malformed (09:00).
pub fn default_open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid default open time")
}

/// Returns the closing time substituted when a day's hours are missing
/// or malformed (17:00).
pub fn default_close_time() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid default close time")
}

/// Operating hours for a single weekday.
///
/// When `is_open` is false the open/close times are ignored. Absent or
/// unparseable times fall back to 09:00–17:00 rather than failing a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// The weekday these hours apply to (Monday through Saturday).
    pub weekday: Weekday,
    /// Whether the store is open on this weekday.
    pub is_open: bool,
    /// Opening time as local wall-clock "HH:MM".
    #[serde(default, with = "time_of_day")]
    pub open_time: Option<NaiveTime>,
    /// Closing time as local wall-clock "HH:MM".
    #[serde(default, with = "time_of_day")]
    pub close_time: Option<NaiveTime>,
}

impl DayHours {
    /// Returns the effective open and close times for the day.
    ///
    /// Missing times take the 09:00–17:00 defaults; an inverted pair
    /// (close at or before open) is treated as malformed and the whole
    /// pair falls back to the defaults.
    pub fn effective_hours(&self) -> (NaiveTime, NaiveTime) {
        let open = self.open_time.unwrap_or_else(default_open_time);
        let close = self.close_time.unwrap_or_else(default_close_time);
        if close <= open {
            (default_open_time(), default_close_time())
        } else {
            (open, close)
        }
    }

    /// Returns the day's span in whole minutes, zero when closed.
    pub fn open_minutes(&self) -> i64 {
        if !self.is_open {
            return 0;
        }
        let (open, close) = self.effective_hours();
        (close - open).num_minutes()
    }
}

/// A scheduling week: the Monday it starts on plus the six weekdays.
///
/// Days are kept in Monday-to-Saturday order; the order is relied on by
/// the generator when it walks the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreWeek {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// Operating hours for Monday through Saturday.
    pub days: Vec<DayHours>,
}

impl StoreWeek {
    /// Creates a week from a start date and per-day hours.
    pub fn new(week_start: NaiveDate, days: Vec<DayHours>) -> Self {
        Self { week_start, days }
    }

    /// Returns the calendar date for a weekday within this week.
    pub fn date_for(&self, weekday: Weekday) -> NaiveDate {
        self.week_start + Duration::days(weekday.num_days_from_monday() as i64)
    }

    /// Returns the last scheduled date of the week (Saturday).
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(5)
    }

    /// Returns true when a date falls inside the scheduled week.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end()
    }
}

/// "HH:MM" wall-clock (de)serialization for optional times.
///
/// Unparseable values deserialize to `None` so that the documented
/// defaults apply instead of failing the run.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            NaiveTime::parse_from_str(&s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
                .ok()
        }))
    }
}
