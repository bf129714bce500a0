//! Option list model.
//!
//! The model owns the working set of options in insertion order and answers
//! the two queries the widget needs: "which option carries this form value"
//! and "which options match this filter text". It never reorders or mutates
//! the set on behalf of a query.

use crate::normalize::normalize;
use crate::option::{RawOption, SelectOption};

/// The ordered working set of a combobox.
///
/// Insertion order is significant - it defines the unfiltered display order.
/// The set is established at construction and replaced wholesale on a
/// refresh; filtering returns indices and leaves the set untouched.
#[derive(Debug, Clone, Default)]
pub struct OptionListModel {
    options: Vec<SelectOption>,
}

impl OptionListModel {
    /// Build a model from boundary input, dropping unusable entries.
    pub fn from_raw(raw: Vec<RawOption>) -> Self {
        Self {
            options: SelectOption::from_raw_all(raw),
        }
    }

    /// Build a model from already-normalized options.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Number of options in the working set.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// `true` if the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get the option at `index`.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Iterate the working set in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Find the first option whose form value equals `value`.
    pub fn find_value(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Indices of options matching `query`, in insertion order.
    ///
    /// The query is normalized (see [`normalize`]) and matched as a substring
    /// of each option's normalized title. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        let needle = normalize(query);
        if needle.is_empty() {
            return (0..self.options.len()).collect();
        }
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.normalized_title().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Replace the working set wholesale from boundary input.
    ///
    /// The new entries are normalized exactly as the static path normalizes
    /// them; nothing of the previous set survives.
    pub fn replace(&mut self, raw: Vec<RawOption>) {
        self.options = SelectOption::from_raw_all(raw);
    }

    /// Replace the working set wholesale with already-normalized options.
    pub fn replace_normalized(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }
}

impl From<Vec<SelectOption>> for OptionListModel {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionListModel {
        OptionListModel::from_raw(vec![
            RawOption::label("Asociația Alfa"),
            RawOption::pair("Beta Ong", "beta"),
            RawOption::label("Fundația Gama"),
        ])
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let model = sample();
        assert_eq!(model.filter(""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_matches_normalized_substring() {
        let model = sample();
        assert_eq!(model.filter("asociatia"), vec![0]);
        // Diacritics in the query normalize away too
        assert_eq!(model.filter("Asociația"), vec![0]);
    }

    #[test]
    fn test_filter_predicate_is_sound() {
        let model = sample();
        let needle = normalize("a");
        let matched = model.filter("a");
        for (i, option) in model.iter().enumerate() {
            let contains = option.normalized_title().contains(&needle);
            assert_eq!(matched.contains(&i), contains);
        }
    }

    #[test]
    fn test_filter_never_mutates_options() {
        let model = sample();
        let before: Vec<String> = model.iter().map(|o| o.title.clone()).collect();
        let _ = model.filter("beta");
        let after: Vec<String> = model.iter().map(|o| o.title.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_find_value() {
        let model = sample();
        assert_eq!(model.find_value("beta"), Some(1));
        assert_eq!(model.find_value("Asociația Alfa"), Some(0));
        assert_eq!(model.find_value("missing"), None);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut model = sample();
        model.replace(vec![RawOption::label("Nou")]);
        assert_eq!(model.len(), 1);
        assert_eq!(model.get(0).unwrap().title, "Nou");
        assert_eq!(model.find_value("beta"), None);
    }

    #[test]
    fn test_renormalizing_is_idempotent() {
        let model = sample();
        let renormalized: Vec<SelectOption> = model
            .iter()
            .map(|o| SelectOption::new(o.title.clone(), o.value.clone()))
            .collect();
        for (a, b) in model.iter().zip(renormalized.iter()) {
            assert_eq!(a.normalized_title(), b.normalized_title());
        }
    }
}
