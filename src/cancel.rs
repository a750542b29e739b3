use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use simple_signal::{self, Signal};

use crate::config::CANCEL_POLL_INTERVAL;

/// Cooperative cancellation flag shared between the signal handler and the
/// motion loops. The flag is polled between blocking steps; nothing is
/// preempted mid-step.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT/SIGTERM into this token, so Ctrl-C stops the motors
    /// through the normal cleanup path instead of killing the process with
    /// the outputs still energized.
    pub fn hook_signals(&self) {
        let cancelled = Arc::clone(&self.cancelled);
        simple_signal::set_handler(&[Signal::Int, Signal::Term], move |_| {
            cancelled.store(true, Ordering::SeqCst);
        });
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Block for `duration`, checking the flag every `CANCEL_POLL_INTERVAL`.
    /// Returns `false` if the wait was cut short by cancellation.
    pub fn wait(&self, duration: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < duration {
            if self.is_cancelled() {
                return false;
            }
            let remaining = duration.saturating_sub(start.elapsed());
            thread::sleep(remaining.min(CANCEL_POLL_INTERVAL));
        }
        true
    }
}
