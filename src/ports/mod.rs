//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and its display collaborators.

mod notifier;

pub use notifier::{Notification, NotificationVariant, Notifier};
