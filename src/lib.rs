mod calendar;
mod clock;
mod consts;
mod date_utils;
mod options;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;
mod view;

pub use calendar::{Calendar, SelectDateCallback};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date_utils::{format_date, is_date_in_range};
pub use options::{CalendarOptions, ControlPosition, OptionsError};
pub use range::{Bound, DateRange, RangeError};
pub use types::{CalendarDate, Day, Month, TimeOfDay, Year, days_in_month, is_leap_year};
pub use view::CalendarView;

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A local wall-clock point in time that remembers how precisely it was written.
///
/// Values compare by the instant they denote first, so `2025-10-15` sorts
/// directly before `2025-10-15T00:00` and `2025-10-15T00:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateValue {
    /// `YYYY-MM-DD`, anchored at local midnight
    #[display(fmt = "{}", date)]
    Date { date: CalendarDate },
    /// `YYYY-MM-DDTHH:MM`; `time` never carries seconds
    #[display(fmt = "{}T{:02}:{:02}", date, "time.hour()", "time.minute()")]
    Minute { date: CalendarDate, time: TimeOfDay },
    /// `YYYY-MM-DDTHH:MM:SS`
    #[display(fmt = "{}T{}", date, time)]
    Second { date: CalendarDate, time: TimeOfDay },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl DateValue {
    /// A date-only value.
    pub const fn at_midnight(date: CalendarDate) -> Self {
        Self::Date { date }
    }

    /// A minute-precision value; any seconds in `time` are dropped.
    pub const fn at_minute(date: CalendarDate, time: TimeOfDay) -> Self {
        Self::Minute {
            date,
            time: time.truncate_seconds(),
        }
    }

    /// A second-precision value.
    pub const fn at_second(date: CalendarDate, time: TimeOfDay) -> Self {
        Self::Second { date, time }
    }

    pub const fn date(&self) -> CalendarDate {
        match *self {
            Self::Date { date } | Self::Minute { date, .. } | Self::Second { date, .. } => date,
        }
    }

    /// Time of day, midnight for date-only values.
    pub const fn time(&self) -> TimeOfDay {
        match *self {
            Self::Date { .. } => TimeOfDay::MIDNIGHT,
            Self::Minute { time, .. } | Self::Second { time, .. } => time,
        }
    }

    /// Whether the value was written with a time component.
    pub const fn has_time(&self) -> bool {
        !matches!(self, Self::Date { .. })
    }

    /// The instant this value denotes, ignoring precision.
    pub const fn instant(&self) -> (CalendarDate, TimeOfDay) {
        (self.date(), self.time())
    }

    /// Drops the time component.
    pub const fn to_date(&self) -> Self {
        Self::at_midnight(self.date())
    }

    /// Re-expresses the value at minute precision (date-only becomes `T00:00`).
    pub const fn to_minute_precision(&self) -> Self {
        Self::at_minute(self.date(), self.time())
    }

    /// Re-expresses the value at second precision (date-only becomes `T00:00:00`).
    pub const fn to_second_precision(&self) -> Self {
        Self::at_second(self.date(), self.time())
    }

    /// Same time of day on the following calendar day, or `None` past `MAX_YEAR`.
    pub fn next_day(&self) -> Option<Self> {
        self.date().succ().map(|date| self.with_date(date))
    }

    /// Same time of day on the preceding calendar day, or `None` before year 1.
    pub fn previous_day(&self) -> Option<Self> {
        self.date().pred().map(|date| self.with_date(date))
    }

    const fn with_date(&self, date: CalendarDate) -> Self {
        match *self {
            Self::Date { .. } => Self::Date { date },
            Self::Minute { time, .. } => Self::Minute { date, time },
            Self::Second { time, .. } => Self::Second { date, time },
        }
    }

    /// Rank used for ordering ties on the same instant:
    /// less precise comes first: Date < Minute < Second.
    #[inline]
    const fn precision_rank(&self) -> u8 {
        match *self {
            Self::Date { .. } => 0,
            Self::Minute { .. } => 1,
            Self::Second { .. } => 2,
        }
    }
}

impl FromStr for DateValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        match trimmed.split_once(TIME_DESIGNATOR) {
            None => Ok(Self::Date {
                date: Self::parse_iso_date(trimmed)?,
            }),
            Some((date_part, time_part)) => {
                let date = Self::parse_iso_date(date_part)?;
                let parts: Vec<&str> = time_part.split(TIME_SEPARATOR).collect();
                match parts.len() {
                    2 => {
                        let hour = Self::parse_u8(parts[0])?;
                        let minute = Self::parse_u8(parts[1])?;
                        let time = TimeOfDay::new(hour, minute, 0)?;
                        Ok(Self::Minute { date, time })
                    }
                    3 => {
                        let hour = Self::parse_u8(parts[0])?;
                        let minute = Self::parse_u8(parts[1])?;
                        let second = Self::parse_u8(parts[2])?;
                        let time = TimeOfDay::new(hour, minute, second)?;
                        Ok(Self::Second { date, time })
                    }
                    n => Err(ParseError::InvalidFormat(format!(
                        "Expected 1-2 {TIME_SEPARATOR} separators in time, found {}",
                        n - 1
                    ))),
                }
            }
        }
    }
}

impl DateValue {
    fn parse_iso_date(s: &str) -> Result<CalendarDate, ParseError> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {s}"
            )));
        }
        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        CalendarDate::new(year, month, day)
    }

    /// Four ASCII digits
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        if s.len() != YEAR_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Two ASCII digits
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        if s.len() != COMPONENT_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant()
            .cmp(&other.instant())
            .then_with(|| self.precision_rank().cmp(&other.precision_rank()))
    }
}

impl serde::Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
