//! Alege - a searchable single-select combobox engine.
//!
//! Alege implements the state machine behind a searchable dropdown: a
//! working option set with precomputed, diacritic-insensitive search keys, a
//! filter text that doubles as the visible input, keyboard navigation over
//! the filtered candidates, and a committed selection that is written
//! through to a host form. Hosts subscribe to state changes through
//! signal/slot connections ([`alege_core::Signal`]) and own all rendering.
//!
//! # Example
//!
//! ```
//! use alege::{ComboBox, FieldBuffer, RawOption};
//!
//! let fields = FieldBuffer::new();
//! let mut combo = ComboBox::new(
//!     vec![
//!         RawOption::label("Asociația Alfa"),
//!         RawOption::pair("Beta Ong", "beta"),
//!     ],
//!     None,
//! )
//! .with_binding(Box::new(fields.clone()));
//!
//! combo.open();
//! combo.set_query("asociatia"); // diacritic-insensitive
//! combo.select();
//!
//! assert_eq!(fields.snapshot().display, "Asociația Alfa");
//! assert_eq!(combo.visible_text(), "Asociația Alfa");
//! ```
//!
//! With the `remote` feature (enabled by default), option sets can also be
//! fetched from an HTTP endpoint; see [`remote`].

mod combobox;
mod form;
mod model;
mod normalize;
mod option;
#[cfg(feature = "remote")]
pub mod remote;
pub mod validate;

pub use combobox::ComboBox;
pub use form::{FieldBuffer, FieldState, FormBinding};
pub use model::OptionListModel;
pub use normalize::normalize;
pub use option::{RawOption, SelectOption};

// Re-export the signal layer so hosts depend on one crate.
pub use alege_core::{ConnectionGuard, ConnectionId, Signal};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{ComboBox, FieldBuffer, FormBinding, RawOption, SelectOption, Signal};
    #[cfg(feature = "remote")]
    pub use crate::remote::{LoadOutcome, OptionLoader};
}
