//! Core systems for Alege.
//!
//! This crate provides the foundation of the Alege widget engine:
//!
//! - **Signal/Slot System**: Type-safe state-change notification from widgets
//!   to their hosts
//! - **Logging targets**: `tracing` target constants for filtering
//!
//! Widgets own their state and mutate it through explicit transition methods;
//! hosts observe by connecting slots to the widget's public signals. There is
//! no event loop in this crate: slots run synchronously on the emitting
//! thread.
//!
//! # Signal/Slot Example
//!
//! ```
//! use alege_core::Signal;
//!
//! // Create a signal that notifies when the selection changes
//! let selection_changed = Signal::<Option<String>>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = selection_changed.connect(|value| {
//!     println!("Selection is now: {:?}", value);
//! });
//!
//! // Emit the signal
//! selection_changed.emit(Some("beta".to_string()));
//!
//! // Disconnect when done
//! selection_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
