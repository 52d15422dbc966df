/// Outbound notification sink (patient email, doctor notice).
///
/// Fire-and-forget: callers never learn whether delivery happened.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes every notification to the log instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "notify", "{message}");
    }
}
