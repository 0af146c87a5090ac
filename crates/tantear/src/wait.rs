//! Bounded-wait configuration and polling.
//!
//! Every blocking operation in the core (`click` actionability, `expect_*`,
//! `wait_for_*`) is a bounded poll: probe, sleep, repeat until the condition
//! holds or the deadline elapses. There is no retry beyond the window and no
//! cancellation beyond letting the timeout run out.

use std::time::{Duration, Instant};

/// Default timeout for bounded waits (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Timeout and polling interval for blocking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitConfig {
    /// Create wait configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the polling interval in milliseconds.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Poll interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// A running deadline for one bounded wait.
///
/// The probe-sleep loop lives at the call site so probes can borrow freely:
///
/// ```ignore
/// let deadline = Deadline::start(waits);
/// loop {
///     if probe().await { break; }
///     if deadline.expired() { return Err(...); }
///     deadline.tick().await;
/// }
/// ```
#[derive(Debug)]
pub(crate) struct Deadline {
    end: Instant,
    poll: Duration,
}

impl Deadline {
    /// Start a deadline from a wait configuration.
    pub(crate) fn start(waits: WaitConfig) -> Self {
        Self {
            end: Instant::now() + waits.timeout(),
            poll: waits.poll_interval(),
        }
    }

    /// Whether the deadline has elapsed. A fresh deadline with a zero
    /// timeout still allows the probe that ran before this check.
    pub(crate) fn expired(&self) -> bool {
        Instant::now() >= self.end
    }

    /// Sleep one polling interval.
    pub(crate) async fn tick(&self) {
        tokio::time::sleep(self.poll).await;
    }
}
