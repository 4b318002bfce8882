/// Frame-rate limiting
use std::time::{Duration, Instant};

/// Blocks the loop so frames start no closer than one budget apart
#[derive(Debug)]
pub struct FrameLimiter {
    budget: Duration,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / target_fps.max(1),
            last_frame: None,
        }
    }

    /// Time still to wait at `now` before the next frame may start
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => self.budget.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Sleep out the rest of the budget, then start a new frame.
    /// Returns the time elapsed since the previous frame.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }

        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        elapsed
    }
}
