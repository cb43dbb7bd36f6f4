//! Notifier adapters.
//!
//! - `LogNotifier`: forwards notifications to `tracing`
//! - `ConsoleNotifier`: prints a one-line toast to any writer (stderr in the CLI)
//! - `MemoryNotifier`: keeps notifications for later display or inspection
//!
//! # Mutex Behavior
//!
//! A poisoned mutex does not panic the caller. The console adapter drops the
//! message and the memory adapter recovers the inner value, since a
//! half-written notification list is still safe to read.

use std::io::Write;
use std::sync::Mutex;

use crate::ports::{Notification, Notifier};

/// Sends notifications to the log instead of a screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.is_destructive() {
            tracing::warn!(title = %notification.title, "{}", notification.description);
        } else {
            tracing::info!(title = %notification.title, "{}", notification.description);
        }
    }
}

/// Prints notifications as single lines to a writer.
pub struct ConsoleNotifier<W> {
    out: Mutex<W>,
}

impl ConsoleNotifier<std::io::Stderr> {
    /// Notifier writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the notifier and return the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notification: &Notification) {
        let marker = if notification.is_destructive() { "!" } else { "*" };
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!("Console notifier lock poisoned, dropping notification");
            return;
        };
        if let Err(e) = writeln!(out, "[{marker}] {notification}") {
            tracing::warn!("Failed to write notification: {}", e);
        }
    }
}

/// Collects notifications in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    items: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every notification received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        match self.items.lock() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return every notification received so far.
    pub fn drain(&self) -> Vec<Notification> {
        let mut items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: &Notification) {
        let mut items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.push(notification.clone());
    }
}
