//! Canonical formatting and range membership for picker values.

use crate::{DateRange, DateValue, TimeOfDay};

/// Formats `date` as the controller exposes it.
///
/// Without time the result is always `YYYY-MM-DDT00:00:00`, whatever time
/// `date` carries. With time it is `YYYY-MM-DDTHH:MM`.
pub fn format_date(date: &DateValue, include_time: bool) -> String {
    if include_time {
        date.to_minute_precision().to_string()
    } else {
        DateValue::at_second(date.date(), TimeOfDay::MIDNIGHT).to_string()
    }
}

/// True iff `date` lies within `[min_date, max_date]`.
///
/// An absent or empty bound is open in that direction. A missing `date` is never
/// in range, and neither is anything when a bound fails to parse.
pub fn is_date_in_range(date: Option<&DateValue>, min_date: Option<&str>, max_date: Option<&str>) -> bool {
    date.is_some_and(|date| DateRange::parse(min_date, max_date).contains(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day_value, minute_value, second_value};

    #[test]
    fn test_format_without_time_forces_midnight() {
        assert_eq!(format_date(&day_value(2025, 10, 15), false), "2025-10-15T00:00:00");
        assert_eq!(
            format_date(&minute_value(2025, 10, 15, 14, 30), false),
            "2025-10-15T00:00:00"
        );
        assert_eq!(
            format_date(&second_value(2025, 1, 5, 23, 59, 59), false),
            "2025-01-05T00:00:00"
        );
    }

    #[test]
    fn test_format_with_time_uses_minutes() {
        assert_eq!(format_date(&minute_value(2025, 10, 15, 14, 30), true), "2025-10-15T14:30");
        assert_eq!(
            format_date(&second_value(2025, 10, 15, 9, 5, 59), true),
            "2025-10-15T09:05"
        );
        assert_eq!(format_date(&day_value(2025, 10, 15), true), "2025-10-15T00:00");
    }

    #[test]
    fn test_in_range_cases() {
        struct TestCase {
            date:        Option<DateValue>,
            min:         Option<&'static str>,
            max:         Option<&'static str>,
            expected:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        Some(day_value(2025, 10, 15)),
                min:         None,
                max:         None,
                expected:    true,
                description: "no bounds",
            },
            TestCase {
                date:        None,
                min:         None,
                max:         None,
                expected:    false,
                description: "missing date",
            },
            TestCase {
                date:        Some(day_value(2025, 10, 15)),
                min:         Some("2025-10-15"),
                max:         Some("2025-10-15"),
                expected:    true,
                description: "both bounds inclusive",
            },
            TestCase {
                date:        Some(day_value(2025, 9, 30)),
                min:         Some("2025-10-01"),
                max:         Some(""),
                expected:    false,
                description: "before min, empty max",
            },
            TestCase {
                date:        Some(minute_value(2025, 10, 15, 14, 30)),
                min:         None,
                max:         Some("2025-10-15"),
                expected:    false,
                description: "later the same day as a date-only max",
            },
            TestCase {
                date:        Some(minute_value(2025, 10, 15, 14, 30)),
                min:         None,
                max:         Some("2025-10-15T14:30"),
                expected:    true,
                description: "exactly at a date-time max",
            },
            TestCase {
                date:        Some(day_value(2025, 10, 15)),
                min:         Some("not-a-date"),
                max:         None,
                expected:    false,
                description: "unparsable min",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_date_in_range(case.date.as_ref(), case.min, case.max),
                case.expected,
                "is_date_in_range failed for: {}",
                case.description
            );
        }
    }
}
