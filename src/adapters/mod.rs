//! Adapters layer: Concrete implementations of ports and log plumbing.
//!
//! - `notify`: display adapters for the `Notifier` port
//! - `sanitize`: PHI filtering for logs

pub mod notify;
pub mod sanitize;

pub use notify::{ConsoleNotifier, LogNotifier, MemoryNotifier};
