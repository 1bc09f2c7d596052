//! # Notifications
//!
//! User-facing messages raised by the API client, and the process-wide slot
//! that delivers them.
//!
//! The slot is set once at startup with [`init`] and read on every failed
//! request. Anything raised before `init` is dropped (logged at debug level),
//! never a panic, so requests issued during startup are safe.
//!
//! Sinks:
//! - [`ChannelSink`]: pushes onto an `async-channel` for a UI loop to drain
//! - [`TracingSink`]: writes each notification to the log
//! - [`GlobalNotifier`]: forwards to whatever was passed to [`init`]

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::NotificationSink;

static NOTIFIER: OnceCell<Arc<dyn NotificationSink>> = OnceCell::new();

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }
}

/// Install the process-wide sink. Returns `false` if one was already installed.
pub fn init(sink: Arc<dyn NotificationSink>) -> bool {
    let installed = NOTIFIER.set(sink).is_ok();
    if !installed {
        tracing::warn!("Notifier already initialized, keeping the first sink");
    }
    installed
}

/// Whether [`init`] has run.
pub fn is_initialized() -> bool {
    NOTIFIER.get().is_some()
}

/// Deliver a notification to the installed sink, or drop it if none is installed yet.
pub fn notify(notification: Notification) {
    match NOTIFIER.get() {
        Some(sink) => sink.show(notification),
        None => tracing::debug!(
            level = ?notification.level,
            message = %notification.message,
            "Notifier not initialized, dropping notification"
        ),
    }
}

/// Forwards to the process-wide sink installed with [`init`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalNotifier;

impl NotificationSink for GlobalNotifier {
    fn show(&self, notification: Notification) {
        notify(notification);
    }
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn show(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::error!(message = %notification.message, "Notification"),
            NotificationLevel::Warning => tracing::warn!(message = %notification.message, "Notification"),
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(message = %notification.message, "Notification")
            }
        }
    }
}

/// Pushes notifications onto an unbounded channel.
///
/// Sending never blocks; if the receiver is gone the notification is dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: async_channel::Sender<Notification>,
}

impl ChannelSink {
    /// Create the sink and the receiving end for the UI loop.
    pub fn new() -> (Self, async_channel::Receiver<Notification>) {
        let (tx, rx) = async_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn show(&self, notification: Notification) {
        if let Err(e) = self.tx.try_send(notification) {
            tracing::debug!(error = %e, "Notification receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Notification>>,
    }

    impl NotificationSink for Recorder {
        fn show(&self, notification: Notification) {
            self.seen.lock().push(notification);
        }
    }

    // The slot is process-wide, so the whole lifecycle lives in one test.
    #[test]
    fn test_global_notifier_lifecycle() {
        notify(Notification::error("before init"));
        GlobalNotifier.error("also before init");

        let recorder = Arc::new(Recorder::default());
        assert!(init(recorder.clone()));
        assert!(is_initialized());

        GlobalNotifier.error("请求超时");
        assert!(!init(Arc::new(TracingSink)));
        notify(Notification::success("saved"));

        let seen = recorder.seen.lock();
        assert!(seen.iter().all(|n| n.message != "before init" && n.message != "also before init"));
        assert!(seen.contains(&Notification::error("请求超时")));
        assert!(seen.contains(&Notification::success("saved")));
    }

    #[tokio::test]
    async fn test_channel_sink_delivers_in_order() {
        let (sink, rx) = ChannelSink::new();
        sink.error("first");
        sink.show(Notification::new(NotificationLevel::Info, "second"));

        assert_eq!(rx.recv().await.unwrap(), Notification::error("first"));
        assert_eq!(rx.recv().await.unwrap().message, "second");
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        sink.error("nobody listening");
    }
}
