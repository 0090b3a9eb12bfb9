//! Rapid-interrupt detection for quitting mid-session.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Interrupts needed inside the window to quit.
pub const REQUIRED_INTERRUPTS: usize = 3;

/// Window the interrupts must fall within.
pub const INTERRUPT_WINDOW: Duration = Duration::from_secs(2);

/// What to do about an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Print a reminder and keep going.
    Warn,
    Abort,
}

/// Ring buffer of the most recent interrupt timestamps.
#[derive(Debug, Clone)]
pub struct InterruptGuard {
    recent: VecDeque<Instant>,
    required: usize,
    window: Duration,
}

impl Default for InterruptGuard {
    fn default() -> Self {
        Self::new(REQUIRED_INTERRUPTS, INTERRUPT_WINDOW)
    }
}

impl InterruptGuard {
    pub fn new(required: usize, window: Duration) -> Self {
        let required = required.max(1);
        Self {
            recent: VecDeque::with_capacity(required),
            required,
            window,
        }
    }

    /// Record an interrupt and decide whether it completes a quit sequence.
    pub fn register(&mut self, at: Instant) -> InterruptAction {
        if self.recent.len() == self.required {
            self.recent.pop_front();
        }
        self.recent.push_back(at);

        match self.recent.front() {
            Some(oldest)
                if self.recent.len() == self.required
                    && at.saturating_duration_since(*oldest) < self.window =>
            {
                InterruptAction::Abort
            }
            _ => InterruptAction::Warn,
        }
    }
}
