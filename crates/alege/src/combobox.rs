//! Searchable single-select combobox state machine.
//!
//! The ComboBox owns the full widget state - working option set, filter
//! text, open/closed visibility, keyboard highlight and committed selection -
//! and mutates it only through explicit transition methods. Hosts observe
//! state changes through the public signals and render however they like; the
//! widget writes committed values to the host form through a
//! [`FormBinding`].
//!
//! # Example
//!
//! ```
//! use alege::{ComboBox, RawOption};
//!
//! let mut combo = ComboBox::new(
//!     vec![
//!         RawOption::label("Asociația Alfa"),
//!         RawOption::pair("Beta Ong", "beta"),
//!     ],
//!     None,
//! );
//!
//! // Connect to signals
//! combo.selection_changed.connect(|selected| {
//!     println!("Selected: {:?}", selected.as_ref().map(|o| &o.value));
//! });
//!
//! // Type-ahead, navigate, commit
//! combo.open();
//! combo.set_query("asociatia");
//! combo.focus_next();
//! combo.select();
//! ```

use alege_core::Signal;

use crate::form::FormBinding;
use crate::model::OptionListModel;
use crate::option::{RawOption, SelectOption};

/// A searchable single-select combobox.
///
/// The visible text input doubles as filter box and display box: while the
/// candidate list is open the text is the filter query, and closing the list
/// reconciles it with the committed selection's title. Keyboard navigation
/// moves a highlight over the filtered candidates without committing;
/// committing writes through the bound form fields and closes the list.
///
/// # Signals
///
/// - `selection_changed(Option<SelectOption>)`: the committed selection
///   changed (`None` after a toggle-off)
/// - `activated(SelectOption)`: an option was committed by user action
/// - `filter_changed(String)`: the filter text changed
/// - `focus_changed(Option<usize>)`: the keyboard highlight moved
/// - `visibility_changed(bool)`: the candidate list opened or closed
/// - `options_replaced(usize)`: the working set was replaced wholesale;
///   carries the new option count
pub struct ComboBox {
    /// The working option set.
    model: OptionListModel,

    /// Current filter text; doubles as the visible input text.
    query: String,

    /// Indices into the model matching `query`, in insertion order.
    filtered: Vec<usize>,

    /// Whether the candidate list is visible.
    open: bool,

    /// Committed selection.
    selected: Option<SelectOption>,

    /// Keyboard highlight within `filtered`.
    focused: Option<usize>,

    /// Host form seam.
    binding: Option<Box<dyn FormBinding>>,

    /// Form-coupled variant: a real commit also submits the form.
    submit_on_commit: bool,

    // Signals
    /// Signal emitted when the committed selection changes.
    pub selection_changed: Signal<Option<SelectOption>>,
    /// Signal emitted when an option is committed.
    pub activated: Signal<SelectOption>,
    /// Signal emitted when the filter text changes.
    pub filter_changed: Signal<String>,
    /// Signal emitted when the keyboard highlight moves.
    pub focus_changed: Signal<Option<usize>>,
    /// Signal emitted when the candidate list opens or closes.
    pub visibility_changed: Signal<bool>,
    /// Signal emitted when the working set is replaced wholesale.
    pub options_replaced: Signal<usize>,
}

impl ComboBox {
    /// Create a combobox from boundary input and an optional pre-selected
    /// form value.
    ///
    /// Every entry is normalized up front. When `current_value` matches an
    /// option's form value, that option is committed without opening the list
    /// and the visible text shows its title. No signals fire during
    /// construction.
    pub fn new(options: Vec<RawOption>, current_value: Option<&str>) -> Self {
        let model = OptionListModel::from_raw(options);
        let selected = current_value
            .and_then(|value| model.find_value(value))
            .and_then(|index| model.get(index).cloned());
        let query = selected
            .as_ref()
            .map(|option| option.title.clone())
            .unwrap_or_default();
        let filtered = model.filter(&query);

        Self {
            model,
            query,
            filtered,
            open: false,
            selected,
            focused: None,
            binding: None,
            submit_on_commit: false,
            selection_changed: Signal::new(),
            activated: Signal::new(),
            filter_changed: Signal::new(),
            focus_changed: Signal::new(),
            visibility_changed: Signal::new(),
            options_replaced: Signal::new(),
        }
    }

    // =========================================================================
    // Host binding
    // =========================================================================

    /// Attach the host form binding.
    ///
    /// The host fields are immediately reconciled with the current committed
    /// state, so a combobox constructed with a pre-selected value shows it.
    pub fn bind(&mut self, mut binding: Box<dyn FormBinding>) {
        match &self.selected {
            Some(option) => {
                binding.write_value(&option.value);
                binding.write_display(&option.title);
            }
            None => binding.clear(),
        }
        self.binding = Some(binding);
    }

    /// Attach a binding using the builder pattern.
    pub fn with_binding(mut self, binding: Box<dyn FormBinding>) -> Self {
        self.bind(binding);
        self
    }

    /// Select the form-coupled variant: a real commit also submits the form.
    pub fn set_submit_on_commit(&mut self, submit: bool) {
        self.submit_on_commit = submit;
    }

    /// Set submit-on-commit using the builder pattern.
    pub fn with_submit_on_commit(mut self, submit: bool) -> Self {
        self.submit_on_commit = submit;
        self
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// The working option set.
    pub fn model(&self) -> &OptionListModel {
        &self.model
    }

    /// Whether the candidate list is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current filter text, which is also the visible input text.
    pub fn visible_text(&self) -> &str {
        &self.query
    }

    /// The committed selection.
    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.as_ref()
    }

    /// The keyboard highlight within the filtered list.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Number of candidates matching the current filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The candidates matching the current filter, in insertion order.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        self.filtered
            .iter()
            .filter_map(|&index| self.model.get(index))
            .collect()
    }

    // =========================================================================
    // Opening / closing
    // =========================================================================

    /// Show the candidate list.
    ///
    /// The filter is cleared so the full list is shown fresh.
    pub fn open(&mut self) {
        let was_open = self.open;
        self.open = true;
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
        if !was_open {
            self.visibility_changed.emit(true);
        }
    }

    /// Hide the candidate list.
    ///
    /// This is the single place where the visible text reconciles with the
    /// committed state: the filter becomes the selected option's title, or
    /// empty when nothing is selected. The highlight is kept only while a
    /// selection exists. Closing twice produces the same visible state.
    pub fn close(&mut self) {
        let was_open = self.open;
        self.open = false;
        let text = self
            .selected
            .as_ref()
            .map(|option| option.title.clone())
            .unwrap_or_default();
        if self.query != text {
            self.query = text;
            self.refilter();
        }
        if self.selected.is_none() {
            self.set_focus(None);
        }
        if was_open {
            self.visibility_changed.emit(false);
        }
    }

    /// Toggle the candidate list.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Replace the filter text and recompute the candidate list.
    pub fn set_query(&mut self, text: &str) {
        if self.query == text {
            return;
        }
        self.query = text.to_string();
        self.refilter();
        self.filter_changed.emit(self.query.clone());
    }

    fn refilter(&mut self) {
        self.filtered = self.model.filter(&self.query);
        // A highlight that fell outside the new candidate list is meaningless.
        if self.focused.is_some_and(|index| index >= self.filtered.len()) {
            self.set_focus(None);
        }
    }

    // =========================================================================
    // Keyboard navigation
    // =========================================================================

    /// Move the highlight to the next candidate.
    ///
    /// Opens the list first when closed. With nothing highlighted, or with
    /// the last candidate highlighted, the highlight wraps to the first
    /// candidate. Never commits.
    pub fn focus_next(&mut self) {
        if !self.open {
            self.open();
        }
        if self.filtered.is_empty() {
            return;
        }
        let next = match self.focused {
            Some(index) if index + 1 < self.filtered.len() => index + 1,
            _ => 0,
        };
        self.set_focus(Some(next));
    }

    /// Move the highlight to the previous candidate.
    ///
    /// Only acts while the list is open. At the first candidate the highlight
    /// clears - moving "above" the list rather than wrapping to the end.
    /// Never commits.
    pub fn focus_prev(&mut self) {
        if !self.open {
            return;
        }
        match self.focused {
            Some(0) => self.set_focus(None),
            Some(index) => self.set_focus(Some(index - 1)),
            None => {}
        }
    }

    fn set_focus(&mut self, focus: Option<usize>) {
        if self.focused != focus {
            self.focused = focus;
            self.focus_changed.emit(focus);
        }
    }

    // =========================================================================
    // Committing
    // =========================================================================

    /// Commit the highlighted candidate (keyboard path).
    ///
    /// Acts on the current highlight, defaulting to the first candidate when
    /// nothing is highlighted. No-op while the list is closed or when no
    /// candidate matches the filter. Committing the already-committed option
    /// toggles the selection off instead.
    pub fn select(&mut self) {
        if !self.open {
            return;
        }
        let index = self.focused.unwrap_or(0);
        if index < self.filtered.len() {
            self.set_focus(Some(index));
        }
        self.commit(index);
    }

    /// Highlight and commit the candidate at `index` in the filtered list
    /// (mouse path).
    ///
    /// No-op while the list is closed.
    pub fn select_at(&mut self, index: usize) {
        if !self.open {
            return;
        }
        if index < self.filtered.len() {
            self.set_focus(Some(index));
        }
        self.commit(index);
    }

    fn commit(&mut self, index: usize) {
        let Some(candidate) = self
            .filtered
            .get(index)
            .and_then(|&model_index| self.model.get(model_index))
            .cloned()
        else {
            return;
        };

        if self.selected.as_ref() == Some(&candidate) {
            // Toggle-off: committing the committed option clears it.
            self.selected = None;
            self.query.clear();
            if let Some(binding) = self.binding.as_mut() {
                binding.clear();
            }
            tracing::debug!(
                target: "alege::combobox",
                value = %candidate.value,
                "selection toggled off"
            );
            self.selection_changed.emit(None);
        } else {
            self.selected = Some(candidate.clone());
            if let Some(binding) = self.binding.as_mut() {
                binding.write_value(&candidate.value);
                binding.write_display(&candidate.title);
                if self.submit_on_commit {
                    binding.submit();
                }
            }
            tracing::debug!(
                target: "alege::combobox",
                value = %candidate.value,
                "option committed"
            );
            self.selection_changed.emit(Some(candidate.clone()));
            self.activated.emit(candidate);
        }

        self.close();
    }

    // =========================================================================
    // Wholesale refresh
    // =========================================================================

    /// Replace the working set wholesale from boundary input.
    ///
    /// The remote loading path lands here. The candidate list is recomputed
    /// for the current filter, a stale highlight is cleared, and the
    /// committed selection is left untouched.
    pub fn replace_options(&mut self, options: Vec<RawOption>) {
        self.model.replace(options);
        self.refilter();
        self.options_replaced.emit(self.model.len());
    }

    /// Replace the working set wholesale with already-normalized options.
    pub fn replace_normalized(&mut self, options: Vec<SelectOption>) {
        self.model.replace_normalized(options);
        self.refilter();
        self.options_replaced.emit(self.model.len());
    }
}

impl std::fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboBox")
            .field("option_count", &self.model.len())
            .field("query", &self.query)
            .field("open", &self.open)
            .field("selected", &self.selected.as_ref().map(|o| &o.value))
            .field("focused", &self.focused)
            .finish()
    }
}
