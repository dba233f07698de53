/// User-facing notifications. Fire-and-forget: nothing is returned.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);

    /// Blocking alert the user has to acknowledge.
    fn alert(&self, message: &str);
}
