//! Builders shared by the unit tests.

use crate::{CalendarDate, DateValue, TimeOfDay};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn time(hour: u8, minute: u8, second: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute, second).expect("test time should be valid")
}

pub fn day_value(year: u16, month: u8, day: u8) -> DateValue {
    DateValue::at_midnight(date(year, month, day))
}

pub fn minute_value(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> DateValue {
    DateValue::at_minute(date(year, month, day), time(hour, minute, 0))
}

pub fn second_value(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateValue {
    DateValue::at_second(date(year, month, day), time(hour, minute, second))
}
