//! Option data model.
//!
//! Callers hand the widget a loosely-shaped option list - bare labels, or
//! records with separate display titles and form values, as produced by a
//! JSON endpoint or a hand-written literal. That shape is accepted only at
//! the boundary, as [`RawOption`]; everything past construction works with
//! the normalized [`SelectOption`].

use serde::Deserialize;

use crate::normalize::normalize;

/// The loosely-shaped option input accepted at the widget boundary.
///
/// Deserializes from a JSON array mixing bare strings and
/// `{"title": ..., "value": ...}` records:
///
/// ```
/// use alege::RawOption;
///
/// let raw: Vec<RawOption> = serde_json::from_str(
///     r#"["Asociația Alfa", {"title": "Beta Ong", "value": "beta"}]"#,
/// ).unwrap();
/// assert_eq!(raw.len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    /// A bare label; the label doubles as the form value.
    Label(String),
    /// A record with an optional display title and an optional form value.
    ///
    /// Missing fields degrade rather than error: a record with only a value
    /// uses it as the title too, and vice versa.
    Record {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        value: Option<serde_json::Value>,
    },
}

impl RawOption {
    /// Create a bare-label option.
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Create a title/value option.
    pub fn pair(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Record {
            title: Some(title.into()),
            value: Some(serde_json::Value::String(value.into())),
        }
    }
}

impl From<&str> for RawOption {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for RawOption {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<(&str, &str)> for RawOption {
    fn from((title, value): (&str, &str)) -> Self {
        Self::pair(title, value)
    }
}

/// Form values arrive as strings or numbers; everything is carried as a
/// string internally.
fn stringify_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// One selectable candidate in the combobox.
///
/// `title` is the human-readable label, `value` the underlying form value,
/// and the normalized title (see [`normalize`]) is computed once at
/// construction and used for search. Every `SelectOption` has a non-empty
/// `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Human-readable display label.
    pub title: String,
    /// Underlying form value.
    pub value: String,
    normalized_title: String,
}

impl SelectOption {
    /// Create an option with an explicit title and value.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        let title = title.into();
        let normalized_title = normalize(&title);
        Self {
            title,
            value: value.into(),
            normalized_title,
        }
    }

    /// The precomputed search key for this option.
    pub fn normalized_title(&self) -> &str {
        &self.normalized_title
    }

    /// Build a `SelectOption` from boundary input.
    ///
    /// Returns `None` only when the entry carries neither a title nor a
    /// usable value; a missing title degrades to the raw value and a missing
    /// value degrades to the title.
    pub fn from_raw(raw: RawOption) -> Option<Self> {
        let (title, value) = match raw {
            RawOption::Label(label) => (Some(label), None),
            RawOption::Record { title, value } => {
                (title, value.as_ref().and_then(stringify_value))
            }
        };
        // An empty title is as unusable as a missing one.
        let title = title.filter(|t| !t.is_empty());

        let (title, value) = match (title, value) {
            (Some(t), Some(v)) => (t, v),
            (Some(t), None) => (t.clone(), t),
            (None, Some(v)) => (v.clone(), v),
            (None, None) => return None,
        };

        if title.is_empty() {
            return None;
        }
        Some(Self::new(title, value))
    }

    /// Normalize a whole boundary list, dropping unusable entries.
    ///
    /// Dropped entries are logged at `warn`; bad data is never fatal.
    pub fn from_raw_all(raw: Vec<RawOption>) -> Vec<Self> {
        let total = raw.len();
        let options: Vec<Self> = raw.into_iter().filter_map(Self::from_raw).collect();
        if options.len() < total {
            tracing::warn!(
                target: "alege::model",
                dropped = total - options.len(),
                kept = options.len(),
                "dropped option entries with no title and no value"
            );
        }
        options
    }
}
