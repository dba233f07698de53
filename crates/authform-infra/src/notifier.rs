//! Notifier that routes user messages into tracing and, optionally, the terminal.

use authform_core::ports::Notifier;

/// Logs every notification; with `console` set, prints it to stderr instead
/// and keeps only a debug event.
pub struct TracingNotifier {
    console: bool,
}

impl TracingNotifier {
    /// Log only.
    pub fn new() -> Self {
        Self { console: false }
    }

    /// Echo to the terminal (for interactive use).
    pub fn console() -> Self {
        Self { console: true }
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        if self.console {
            tracing::debug!(notification = "success", "{}", message);
            eprintln!("✔ {message}");
        } else {
            tracing::info!(notification = "success", "{}", message);
        }
    }

    fn notify_error(&self, message: &str) {
        if self.console {
            tracing::debug!(notification = "error", "{}", message);
            eprintln!("✖ {message}");
        } else {
            tracing::warn!(notification = "error", "{}", message);
        }
    }

    fn alert(&self, message: &str) {
        if self.console {
            tracing::debug!(notification = "alert", "{}", message);
            eprintln!("\n⚠ {message}\n");
        } else {
            tracing::error!(notification = "alert", "{}", message);
        }
    }
}
