/// Rendering surface a [`Calendar`](crate::Calendar) draws into.
///
/// The view only mirrors the controller: it shows the value it is handed and
/// reports user gestures back by calling the controller (`open`, `next`, `back`,
/// `commit_input`). It never owns the current value.
pub trait CalendarView {
    /// Shows `value` in the input widget. Empty means nothing is selected.
    fn set_value(&mut self, value: &str);

    /// Opens the platform's date picker.
    fn show_picker(&mut self);

    fn set_opacity(&mut self, opacity: f32);

    fn opacity(&self) -> f32;
}
