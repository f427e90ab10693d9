use crate::{DateValue, OPEN_BOUND, ParseError, RANGE_SEPARATOR, prelude::*};

/// One side of a [`DateRange`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display)]
pub enum Bound {
    /// No limit in this direction
    #[default]
    #[display(fmt = "{}", OPEN_BOUND)]
    Unbounded,
    /// Inclusive limit
    #[display(fmt = "{_0}")]
    At(DateValue),
    /// A configured limit that did not parse; nothing lies within it
    #[display(fmt = "{_0}")]
    Unparsable(String),
}

impl Bound {
    /// Parses a configured bound. Absent, empty and whitespace-only strings are unbounded.
    ///
    /// # Errors
    /// Returns the `ParseError` of a non-empty string that is not an ISO date or date-time.
    pub fn try_parse(raw: Option<&str>) -> Result<Self, ParseError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::Unbounded),
            Some(s) => s.parse().map(Self::At),
        }
    }

    /// Like [`Bound::try_parse`] but keeps unparsable input as [`Bound::Unparsable`].
    pub fn parse(raw: Option<&str>) -> Self {
        Self::try_parse(raw)
            .unwrap_or_else(|_| Self::Unparsable(raw.unwrap_or_default().to_owned()))
    }

    /// The limit, if this bound has one that parsed.
    pub const fn value(&self) -> Option<&DateValue> {
        match self {
            Self::At(value) => Some(value),
            Self::Unbounded | Self::Unparsable(_) => None,
        }
    }

    /// True unless the bound is [`Bound::Unbounded`].
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unbounded)
    }

    /// Appends `T00:00` to a date-only limit. Limits that carry a time are kept.
    pub fn with_minute_precision(self) -> Self {
        match self {
            Self::At(value) if !value.has_time() => Self::At(value.to_minute_precision()),
            other => other,
        }
    }
}

/// Inclusive range between two optional limits.
///
/// Inverted limits (`min > max`) are accepted as given; such a range contains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}{}{}", min, RANGE_SEPARATOR, max)]
pub struct DateRange {
    min: Bound,
    max: Bound,
}

/// Error type for strict range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum limit is not an ISO date or date-time.
    #[error("Invalid minimum date {raw:?}: {source}")]
    InvalidMin { raw: String, source: ParseError },

    /// Maximum limit is not an ISO date or date-time.
    #[error("Invalid maximum date {raw:?}: {source}")]
    InvalidMax { raw: String, source: ParseError },
}

impl DateRange {
    pub const fn new(min: Bound, max: Bound) -> Self {
        Self { min, max }
    }

    /// Builds a range from configuration strings, keeping unparsable limits as
    /// [`Bound::Unparsable`].
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Self {
        Self::new(Bound::parse(min), Bound::parse(max))
    }

    /// Builds a range from configuration strings.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMin` or `RangeError::InvalidMax` for the first
    /// limit that does not parse.
    pub fn try_parse(min: Option<&str>, max: Option<&str>) -> Result<Self, RangeError> {
        let min_bound = Bound::try_parse(min).map_err(|source| RangeError::InvalidMin {
            raw: min.unwrap_or_default().to_owned(),
            source,
        })?;
        let max_bound = Bound::try_parse(max).map_err(|source| RangeError::InvalidMax {
            raw: max.unwrap_or_default().to_owned(),
            source,
        })?;
        Ok(Self::new(min_bound, max_bound))
    }

    pub const fn min(&self) -> &Bound {
        &self.min
    }

    pub const fn max(&self) -> &Bound {
        &self.max
    }

    pub fn set_min(&mut self, min: Bound) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: Bound) {
        self.max = max;
    }

    /// Checks if the range contains a given value.
    /// Compares instants, so `2025-10-15` and `2025-10-15T00:00:00` sit at the same point.
    pub fn contains(&self, date: &DateValue) -> bool {
        let instant = date.instant();
        let above_min = match &self.min {
            Bound::Unbounded => true,
            Bound::At(min) => min.instant() <= instant,
            Bound::Unparsable(_) => false,
        };
        let below_max = match &self.max {
            Bound::Unbounded => true,
            Bound::At(max) => instant <= max.instant(),
            Bound::Unparsable(_) => false,
        };
        above_min && below_max
    }
}
