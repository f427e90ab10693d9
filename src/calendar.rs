//! The picker controller.
//!
//! A [`Calendar`] owns the selected value and its limits. Every mutation is
//! checked against the limits and rejected silently when it would leave them;
//! the caller learns about accepted selections through the `onSelectDate`
//! callback only.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    Bound, CalendarOptions, CalendarView, Clock, DateRange, DateValue, SystemClock, format_date,
};

/// Receives the canonical value each time a selection is confirmed.
pub type SelectDateCallback = Box<dyn FnMut(&str)>;

/// Date (or date-time) picker state attached to one map control.
pub struct Calendar {
    options:        CalendarOptions,
    range:          DateRange,
    current:        Option<DateValue>,
    clock:          Box<dyn Clock>,
    on_select_date: SelectDateCallback,
    view:           Option<Box<dyn CalendarView>>,
}

impl Calendar {
    /// Creates a calendar that reads "today" from the system clock.
    pub fn new(options: CalendarOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Creates a calendar with an explicit time source.
    ///
    /// Never fails: unparsable configured dates are logged and then behave as
    /// described on [`CalendarOptions`]. Until [`Calendar::on_select_date`] is
    /// called, selections are only logged.
    pub fn with_clock(options: CalendarOptions, clock: impl Clock + 'static) -> Self {
        let id = options.id;
        if let Err(error) = options.validate() {
            warn!(id, %error, "calendar configured with an unparsable date");
        }

        let mut range = DateRange::parse(options.min_date.as_deref(), options.max_date.as_deref());
        let mut current = match options.value.as_deref() {
            None => Some(clock.today()),
            Some(raw) => raw.parse::<DateValue>().ok(),
        };

        // A time picker seeded with a bare date starts at the current minute and
        // compares against limits at the same precision.
        if options.time && !current.is_some_and(|value| value.has_time()) {
            let now = clock.now();
            current = current.map(|value| DateValue::at_minute(value.date(), now.time()));
            range = DateRange::new(
                range.min().clone().with_minute_precision(),
                range.max().clone().with_minute_precision(),
            );
        }

        let time = options.time;
        debug!(id, %range, time, "calendar created");
        Self {
            options,
            range,
            current: current.map(|value| normalize(value, time)),
            clock: Box::new(clock),
            on_select_date: Box::new(move |value: &str| {
                warn!(id, value, "onSelectDate callback is mandatory");
            }),
            view: None,
        }
    }

    /// Installs the selection callback.
    #[must_use]
    pub fn on_select_date(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select_date = Box::new(callback);
        self
    }

    pub const fn id(&self) -> u32 {
        self.options.id
    }

    pub const fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub const fn is_time_enabled(&self) -> bool {
        self.options.time
    }

    /// The selected value as `YYYY-MM-DDTHH:MM:SS` (date mode, always midnight)
    /// or `YYYY-MM-DDTHH:MM` (time mode). Empty when nothing is selected.
    pub fn current_date(&self) -> String {
        self.current
            .map(|value| format_date(&value, self.options.time))
            .unwrap_or_default()
    }

    pub const fn current_value(&self) -> Option<DateValue> {
        self.current
    }

    /// Parsed minimum, `None` when unbounded or unparsable.
    pub fn min_date(&self) -> Option<DateValue> {
        self.range.min().value().copied()
    }

    /// Parsed maximum, `None` when unbounded or unparsable.
    pub fn max_date(&self) -> Option<DateValue> {
        self.range.max().value().copied()
    }

    /// Replaces the minimum. Absent or empty removes it.
    pub fn set_min_date(&mut self, raw: Option<&str>) -> &mut Self {
        let bound = self.parse_bound("minDate", raw);
        self.range.set_min(bound);
        self.options.min_date = raw.map(str::to_owned);
        self
    }

    /// Replaces the maximum. Absent or empty removes it.
    pub fn set_max_date(&mut self, raw: Option<&str>) -> &mut Self {
        let bound = self.parse_bound("maxDate", raw);
        self.range.set_max(bound);
        self.options.max_date = raw.map(str::to_owned);
        self
    }

    /// Selects `candidate` if it parses and lies within the limits; otherwise
    /// leaves the selection untouched. Does not fire the callback.
    ///
    /// Date mode keeps only the date; time mode keeps hour and minute.
    pub fn set_date(&mut self, candidate: &str) -> &mut Self {
        match candidate.parse::<DateValue>() {
            Err(error) => {
                debug!(id = self.options.id, candidate, %error, "ignoring unparsable date");
            }
            Ok(value) if !self.range.contains(&value) => {
                debug!(id = self.options.id, candidate, range = %self.range, "ignoring date outside range");
            }
            Ok(value) => self.store(Some(value)),
        }
        self
    }

    /// Moves the selection one calendar day forward and fires the callback.
    /// Does nothing if that day is past the maximum.
    pub fn next(&mut self) -> &mut Self {
        self.step(DateValue::next_day)
    }

    /// Moves the selection one calendar day back and fires the callback.
    /// Does nothing if that day is before the minimum.
    pub fn back(&mut self) -> &mut Self {
        self.step(DateValue::previous_day)
    }

    /// Repairs the selection and reports it to the callback.
    ///
    /// An empty selection, or one outside the limits, becomes the minimum.
    /// Without a minimum it becomes today, or the maximum when today is past it.
    /// The callback then fires exactly once with [`Calendar::current_date`].
    pub fn trigger_on_selected_date(&mut self) -> &mut Self {
        let replacement = match self.current {
            Some(value) if self.range.contains(&value) => None,
            _ => Some(self.clamp_target()),
        };
        if let Some(value) = replacement {
            debug!(id = self.options.id, %value, "reconciled selection");
            self.store(Some(value));
        }

        let value = self.current_date();
        (self.on_select_date)(&value);
        self
    }

    /// Host "change" notification: the user committed `raw` in the input widget.
    ///
    /// The widget may hold anything, so `raw` is taken as-is (empty or unparsable
    /// clears the selection) and then repaired by
    /// [`Calendar::trigger_on_selected_date`].
    pub fn commit_input(&mut self, raw: &str) -> &mut Self {
        let value = match raw.parse::<DateValue>() {
            Ok(value) => Some(value),
            Err(error) => {
                if !raw.trim().is_empty() {
                    debug!(id = self.options.id, raw, %error, "input holds an unparsable date");
                }
                None
            }
        };
        self.store(value);
        self.trigger_on_selected_date()
    }

    /// Hooks the calendar up to its view and, with `triggerFunctionOnLoad`,
    /// reports the initial selection.
    pub fn attach(&mut self, view: Box<dyn CalendarView>) -> &mut Self {
        self.view = Some(view);
        self.sync_view();
        if self.options.trigger_on_load {
            self.trigger_on_selected_date();
        }
        self
    }

    /// Releases the view handed to [`Calendar::attach`].
    pub fn detach(&mut self) -> Option<Box<dyn CalendarView>> {
        self.view.take()
    }

    /// Opens the view's picker.
    pub fn open(&mut self) -> &mut Self {
        match self.view.as_mut() {
            Some(view) => view.show_picker(),
            None => debug!(id = self.options.id, "open requested without a view"),
        }
        self
    }

    pub fn show(&mut self) -> &mut Self {
        if let Some(view) = self.view.as_mut() {
            view.set_opacity(1.0);
        }
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        if let Some(view) = self.view.as_mut() {
            view.set_opacity(0.0);
        }
        self
    }

    /// True unless a view is attached and fully opaque.
    pub fn is_hide(&self) -> bool {
        self.view.as_ref().is_none_or(|view| view.opacity() < 1.0)
    }

    fn step(&mut self, shift: fn(&DateValue) -> Option<DateValue>) -> &mut Self {
        let Some(current) = self.current else {
            debug!(id = self.options.id, "nothing selected to step from");
            return self;
        };
        let Some(target) = shift(&current).filter(|target| self.range.contains(target)) else {
            debug!(id = self.options.id, %current, range = %self.range, "step would leave range");
            return self;
        };

        let formatted = format_date(&target, self.options.time);
        self.set_date(&formatted);
        self.trigger_on_selected_date()
    }

    fn clamp_target(&self) -> DateValue {
        if let Some(min) = self.range.min().value() {
            return *min;
        }
        let today = self.clock.today();
        match self.range.max().value() {
            Some(max) if !self.range.contains(&today) => *max,
            _ => today,
        }
    }

    fn parse_bound(&self, field: &'static str, raw: Option<&str>) -> Bound {
        let bound = Bound::try_parse(raw).unwrap_or_else(|error| {
            warn!(id = self.options.id, field, raw, %error, "unparsable bound; nothing will be in range");
            Bound::Unparsable(raw.unwrap_or_default().to_owned())
        });
        if self.options.time {
            bound.with_minute_precision()
        } else {
            bound
        }
    }

    fn store(&mut self, value: Option<DateValue>) {
        self.current = value.map(|value| normalize(value, self.options.time));
        self.sync_view();
    }

    fn sync_view(&mut self) {
        let value = self.current_date();
        if let Some(view) = self.view.as_mut() {
            view.set_value(&value);
        }
    }
}

/// Date mode keeps the date only; time mode keeps minutes.
const fn normalize(value: DateValue, time: bool) -> DateValue {
    if time {
        value.to_minute_precision()
    } else {
        value.to_date()
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("options", &self.options)
            .field("range", &self.range)
            .field("current", &self.current)
            .field("attached", &self.view.is_some())
            .finish_non_exhaustive()
    }
}
