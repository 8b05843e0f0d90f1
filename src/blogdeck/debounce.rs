//! Cancellable timer for search input.
//!
//! A [`Debouncer`] keeps at most one scheduled delivery. Every [`Debouncer::push`] cancels the
//! outstanding one and schedules the new value after the quiet period, so a burst of
//! keystrokes produces a single value: the last one.
//!
//! ```text
//! push("r")   push("ru")   push("rust")        ── 300ms ──►  rx yields "rust"
//!     └── cancelled ──┘└── cancelled ──┘
//! ```
//!
//! Must be used from within a tokio runtime.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer and the receiver its values are delivered on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    /// Schedules `value`, replacing whatever was pending.
    pub fn push(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A closed receiver means nobody is listening any more.
            let _ = tx.send(value);
        }));
    }
}

impl<T> Debouncer<T> {
    /// Drops the pending value, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                trace!("debounce timer cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
