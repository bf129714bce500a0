//! Host form binding.
//!
//! The widget never touches the host's form directly; it writes through this
//! trait. A host supplies an implementation that targets its two fields - a
//! hidden input receiving the committed value and a visible input receiving
//! the display title - and, for the form-coupled variant, its submit action.

use std::sync::Arc;

use parking_lot::Mutex;

/// The seam between the combobox and the host form.
///
/// `submit` defaults to a no-op; only the form-coupled variant (see
/// [`ComboBox::set_submit_on_commit`](crate::ComboBox::set_submit_on_commit))
/// ever calls it.
pub trait FormBinding: Send {
    /// Write the committed form value into the hidden field.
    fn write_value(&mut self, value: &str);

    /// Write the display title into the visible field.
    fn write_display(&mut self, title: &str);

    /// Empty both fields (toggle-off path).
    fn clear(&mut self);

    /// Submit the enclosing form.
    fn submit(&mut self) {}
}

/// Snapshot of a [`FieldBuffer`]'s state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Last value written to the hidden field.
    pub value: String,
    /// Last title written to the visible field.
    pub display: String,
    /// How many times the form was submitted.
    pub submit_count: usize,
}

/// An in-memory [`FormBinding`] backed by plain strings.
///
/// Useful in tests and for hosts that flush field state to their UI layer
/// themselves. Cloning the buffer shares the underlying state, so a clone
/// kept by the caller observes writes made through the clone handed to the
/// widget.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    state: Arc<Mutex<FieldState>>,
}

impl FieldBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current field state.
    pub fn snapshot(&self) -> FieldState {
        self.state.lock().clone()
    }
}

impl FormBinding for FieldBuffer {
    fn write_value(&mut self, value: &str) {
        self.state.lock().value = value.to_string();
    }

    fn write_display(&mut self, title: &str) {
        self.state.lock().display = title.to_string();
    }

    fn clear(&mut self) {
        let mut state = self.state.lock();
        state.value.clear();
        state.display.clear();
    }

    fn submit(&mut self) {
        self.state.lock().submit_count += 1;
    }
}
