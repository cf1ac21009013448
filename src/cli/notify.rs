//! Transient session notices.
//!
//! Fire-and-forget messages with a severity tag, auto-dismissed after a
//! fixed delay by a spawned task. There is no queue and no cancellation:
//! every notice dismisses itself independently, and overlapping notices
//! simply coexist until their own timers fire. Dismissal never touches
//! store state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a notice stays active before dismissing itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Severity tag of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A mutation completed
    Success,
    /// Neutral information
    Info,
}

/// A single transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Message text shown to the user
    pub message: String,
    /// Severity tag, used only for display styling
    pub severity: Severity,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Creates an info notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Posts notices and keeps the currently-active set.
#[derive(Clone, Default)]
pub struct Notifier {
    active: Arc<Mutex<Vec<(u64, Notice)>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a notice and schedules its dismissal after [`DISMISS_AFTER`].
    ///
    /// The dismissal task removes only its own notice, so a newer notice
    /// posted in the meantime is unaffected.
    pub fn post(&self, notice: Notice) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut notices) = self.active.lock() {
            notices.push((id, notice));
        }

        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            if let Ok(mut notices) = active.lock() {
                notices.retain(|(notice_id, _)| *notice_id != id);
            }
        });
    }

    /// Snapshot of the currently-active notices, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notice> {
        self.active
            .lock()
            .map(|notices| notices.iter().map(|(_, notice)| notice.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismisses_itself_after_delay() {
        let notifier = Notifier::new();
        notifier.post(Notice::success("Item added successfully!"));
        assert_eq!(notifier.active().len(), 1);

        tokio::time::sleep(DISMISS_AFTER + Duration::from_millis(100)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_notices_are_independent() {
        let notifier = Notifier::new();
        notifier.post(Notice::success("first"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        notifier.post(Notice::info("second"));
        assert_eq!(notifier.active().len(), 2);

        // The first notice's timer fires; the second keeps running.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        let remaining = notifier.active();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "second");

        tokio::time::sleep(DISMISS_AFTER).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_severity_tags() {
        let notifier = Notifier::new();
        notifier.post(Notice::success("saved"));
        notifier.post(Notice::info("loaded"));

        let active = notifier.active();
        assert_eq!(active[0].severity, Severity::Success);
        assert_eq!(active[1].severity, Severity::Info);
    }
}
