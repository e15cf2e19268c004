use std::time::{Duration, Instant};

use tracing::debug;

use crate::corrector::AutoCorrect;

/// Delay-then-fire scheduling that coalesces rapid edits into one pass.
///
/// Every edit cancels the pending deadline and schedules a new one; the
/// deadline fires once, when polled after it has elapsed.
pub struct IdleDebounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and schedule a new one.
    pub fn record_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once per scheduled deadline, after it has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// The editor-side state around the corrector: the on/off toggle, the
/// idle debounce, and cursor restoration after a pass. The host editor
/// calls [`EditorSession::key_released`] on every keystroke and polls
/// [`EditorSession::tick`] from its event loop with the full buffer.
pub struct EditorSession {
    corrector: AutoCorrect,
    debounce: IdleDebounce,
    enabled: bool,
}

impl EditorSession {
    pub fn new(corrector: AutoCorrect, idle_delay: Duration) -> Self {
        Self {
            corrector,
            debounce: IdleDebounce::new(idle_delay),
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip autocorrect on or off, returning the new state. Turning it
    /// off drops any pending pass.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.debounce.cancel();
        }
        debug!("Autocorrect {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    pub fn key_released(&mut self, now: Instant) {
        self.debounce.record_edit(now);
    }

    /// Run a correction pass if the debounce has fired. Returns the
    /// corrected buffer and the restored cursor offset, or `None` when
    /// nothing fired or nothing changed.
    pub fn tick(&mut self, now: Instant, text: &str, cursor: usize) -> Option<(String, usize)> {
        if !self.debounce.fire(now) {
            return None;
        }
        if !self.enabled {
            return None;
        }

        let corrected = self.corrector.correct_text(text);
        if corrected == text {
            return None;
        }

        let restored = restore_cursor(&corrected, cursor);
        Some((corrected, restored))
    }
}

// Replacements can shorten the buffer, so the old byte offset may land
// past the end or inside a multi-byte character. Clamp to the end, then
// back up to a char boundary.
fn restore_cursor(corrected: &str, cursor: usize) -> usize {
    let mut pos = cursor.min(corrected.len());
    while pos > 0 && !corrected.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
