//! Logging facilities for Alege.
//!
//! Alege uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Use the constants in [`targets`] with `tracing` filter directives to
//! narrow output to a single subsystem, e.g.
//! `RUST_LOG=alege::combobox=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "alege_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "alege_core::signal";
    /// Combobox state machine target.
    pub const COMBOBOX: &str = "alege::combobox";
    /// Option model target.
    pub const MODEL: &str = "alege::model";
    /// Remote option loading target.
    pub const REMOTE: &str = "alege::remote";
}
