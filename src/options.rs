use serde::{Deserialize, Serialize};

use crate::{DateRange, DateValue, ParseError, RangeError};

/// Corner of the map the control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Configuration for a [`Calendar`](crate::Calendar).
///
/// Field names follow the host's camelCase keys, so a JSON object such as
/// `{"minDate": "2025-01-01", "time": true}` deserializes directly. Missing keys
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarOptions {
    /// Distinguishes controls sharing one map
    pub id: u32,
    pub position: ControlPosition,
    /// Earliest selectable value; absent or empty means unbounded
    pub min_date: Option<String>,
    /// Latest selectable value; absent or empty means unbounded
    pub max_date: Option<String>,
    /// Initial value; absent means today, empty or unparsable starts with no value
    pub value: Option<String>,
    /// Pick a time of day as well as a date
    pub time: bool,
    /// Fire the selection callback once when the control is attached
    #[serde(rename = "triggerFunctionOnLoad", alias = "triggerOnLoad")]
    pub trigger_on_load: bool,
    pub back_button: bool,
    pub next_button: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            id: 1,
            position: ControlPosition::default(),
            min_date: None,
            max_date: None,
            value: None,
            time: false,
            trigger_on_load: false,
            back_button: true,
            next_button: true,
        }
    }
}

/// Error type for [`CalendarOptions::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The initial value is set but is not an ISO date or date-time.
    #[error("Invalid initial value {raw:?}: {source}")]
    InvalidValue { raw: String, source: ParseError },
}

impl CalendarOptions {
    /// Checks that every configured date string parses.
    ///
    /// An empty initial value is allowed and means "no value yet". Bound order is
    /// not checked.
    ///
    /// # Errors
    /// Returns the first string that is not an ISO date or date-time.
    pub fn validate(&self) -> Result<(), OptionsError> {
        DateRange::try_parse(self.min_date.as_deref(), self.max_date.as_deref())?;
        match self.value.as_deref().map(str::trim) {
            None | Some("") => Ok(()),
            Some(raw) => raw
                .parse::<DateValue>()
                .map(|_| ())
                .map_err(|source| OptionsError::InvalidValue {
                    raw: raw.to_owned(),
                    source,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CalendarOptions::default();
        assert_eq!(options.id, 1);
        assert_eq!(options.position, ControlPosition::BottomRight);
        assert!(!options.time);
        assert!(!options.trigger_on_load);
        assert!(options.back_button);
        assert!(options.next_button);
        assert_eq!(options.min_date, None);
        assert_eq!(options.value, None);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let options: CalendarOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CalendarOptions::default());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 2,
            "position": "topleft",
            "minDate": "2023-04-01",
            "maxDate": "2023-04-29",
            "value": "2023-04-10",
            "time": true,
            "triggerFunctionOnLoad": true,
            "backButton": false,
            "nextButton": false
        }"#;
        let options: CalendarOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.id, 2);
        assert_eq!(options.position, ControlPosition::TopLeft);
        assert_eq!(options.min_date.as_deref(), Some("2023-04-01"));
        assert_eq!(options.max_date.as_deref(), Some("2023-04-29"));
        assert_eq!(options.value.as_deref(), Some("2023-04-10"));
        assert!(options.time);
        assert!(options.trigger_on_load);
        assert!(!options.back_button);
        assert!(!options.next_button);
    }

    #[test]
    fn test_trigger_on_load_alias() {
        let options: CalendarOptions = serde_json::from_str(r#"{"triggerOnLoad": true}"#).unwrap();
        assert!(options.trigger_on_load);
    }

    #[test]
    fn test_serialize_uses_host_keys() {
        let json = serde_json::to_value(CalendarOptions::default()).unwrap();
        assert_eq!(json["position"], "bottomright");
        assert_eq!(json["triggerFunctionOnLoad"], false);
        assert_eq!(json["backButton"], true);
    }

    #[test]
    fn test_validate() {
        let options = CalendarOptions {
            min_date: Some("2025-01-01".into()),
            max_date: Some(String::new()),
            value: Some(String::new()),
            ..CalendarOptions::default()
        };
        assert_eq!(options.validate(), Ok(()));

        let options = CalendarOptions {
            max_date: Some("2025-12-32".into()),
            ..CalendarOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::Range(RangeError::InvalidMax { .. }))
        ));

        let options = CalendarOptions {
            value: Some("tomorrow".into()),
            ..CalendarOptions::default()
        };
        let err = options.validate().expect_err("expected invalid value");
        assert_eq!(
            err.to_string(),
            "Invalid initial value \"tomorrow\": Invalid date format: Expected YYYY-MM-DD, found tomorrow"
        );
    }

    #[test]
    fn test_validate_ignores_inverted_bounds() {
        let options = CalendarOptions {
            min_date: Some("2025-12-31".into()),
            max_date: Some("2025-01-01".into()),
            ..CalendarOptions::default()
        };
        assert_eq!(options.validate(), Ok(()));
    }
}
