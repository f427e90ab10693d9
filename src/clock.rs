//! Source of "now" for the controller.
//!
//! Every value the controller handles is a naive local wall-clock value, so
//! the clock reports local time with no offset attached.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::{CalendarDate, DateValue, ParseError, TimeOfDay};

/// Provides the current local date and time.
///
/// Swap in [`FixedClock`] wherever results must not depend on when they run.
pub trait Clock {
    /// The current local wall-clock time at second precision.
    fn now(&self) -> DateValue;

    /// Today's local date.
    fn today(&self) -> DateValue {
        self.now().to_date()
    }
}

/// [`Clock`] backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateValue {
        let local = Local::now().naive_local();
        DateValue::try_from(local).unwrap_or_else(|error| {
            tracing::error!(%error, %local, "system clock is outside the supported calendar; using year 1");
            DateValue::at_second(CalendarDate::FIRST, TimeOfDay::MIDNIGHT)
        })
    }
}

/// [`Clock`] that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateValue,
}

impl FixedClock {
    pub const fn new(now: DateValue) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateValue {
        self.now.to_second_precision()
    }
}

impl TryFrom<NaiveDateTime> for DateValue {
    type Error = ParseError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| ParseError::InvalidFormat(value.to_string()))?;
        let date = CalendarDate::new(year, narrow(value.month())?, narrow(value.day())?)?;
        let time = TimeOfDay::new(
            narrow(value.hour())?,
            narrow(value.minute())?,
            // chrono folds leap seconds into the nanoseconds, so this stays below 60
            narrow(value.second())?,
        )?;
        Ok(Self::at_second(date, time))
    }
}

fn narrow(component: u32) -> Result<u8, ParseError> {
    u8::try_from(component).map_err(|_| ParseError::InvalidFormat(component.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day_value, minute_value, second_value};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_reports_seconds() {
        let clock = FixedClock::new(minute_value(2025, 10, 15, 14, 30));
        assert_eq!(clock.now(), second_value(2025, 10, 15, 14, 30, 0));
        assert_eq!(clock.today(), day_value(2025, 10, 15));
    }

    #[test]
    fn clock_trait_object_works() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(day_value(2024, 1, 15)));
        assert_eq!(clock.today(), day_value(2024, 1, 15));
    }

    #[test]
    fn system_clock_returns_a_plausible_time() {
        let now = SystemClock.now();
        assert!(now.date().year() >= 2000);
        assert!(now.has_time());
        assert_eq!(SystemClock.today().date(), now.date());
    }

    #[test]
    fn converts_from_naive_date_time() {
        let naive = NaiveDate::from_ymd_opt(2025, 2, 28)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();
        assert_eq!(DateValue::try_from(naive), Ok(second_value(2025, 2, 28, 23, 59, 58)));
    }

    #[test]
    fn rejects_years_outside_the_calendar() {
        let naive = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert!(matches!(DateValue::try_from(naive), Err(ParseError::InvalidFormat(_))));

        let naive = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(DateValue::try_from(naive), Err(ParseError::InvalidYear(10_000)));
    }
}
