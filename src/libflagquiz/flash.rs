use std::time::{Duration, Instant};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub lines: Vec<String>,
    pub tone: Tone,
}

/// A transient notification. Showing a new one cancels the pending dismissal.
#[derive(Debug, Clone)]
pub struct Flash {
    duration: Duration,
    current: Option<(FlashMessage, Instant)>,
}

impl Default for Flash {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl Flash {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: FlashMessage, now: Instant) {
        self.current = Some((message, now + self.duration));
    }

    /// The message, until its deadline passes.
    pub fn visible(&self, now: Instant) -> Option<&FlashMessage> {
        match &self.current {
            Some((message, deadline)) if now < *deadline => Some(message),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
