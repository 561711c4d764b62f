//! Gravity drop timer
//!
//! A frame-driven accumulator: the game loop feeds elapsed milliseconds once
//! per tick and the timer reports when an interval has passed. At most one
//! drop fires per tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    paused: bool,
}

impl DropTimer {
    /// A stopped timer; call [`DropTimer::reset`] and [`DropTimer::resume`]
    /// to run it.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            paused: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Restart the countdown with a new interval
    pub fn reset(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance by `elapsed_ms`; returns true when a drop is due.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_paused() {
        let mut t = DropTimer::new(100);
        assert!(t.is_paused());
        assert!(!t.tick(1000));
        assert_eq!(t.elapsed_ms(), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut t = DropTimer::new(100);
        t.resume();
        assert!(!t.tick(60));
        assert!(t.tick(40));
        assert_eq!(t.elapsed_ms(), 0);
        // A long frame still fires only once
        assert!(t.tick(350));
        assert!(!t.tick(0));
    }

    #[test]
    fn test_pause_freezes_progress() {
        let mut t = DropTimer::new(100);
        t.resume();
        assert!(!t.tick(90));
        t.pause();
        assert!(!t.tick(500));
        assert_eq!(t.elapsed_ms(), 90);
        t.resume();
        assert!(t.tick(10));
    }

    #[test]
    fn test_reset_restarts_with_new_interval() {
        let mut t = DropTimer::new(1000);
        t.resume();
        t.tick(900);
        t.reset(50);
        assert_eq!(t.interval_ms(), 50);
        assert!(!t.tick(49));
        assert!(t.tick(1));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let t = DropTimer::new(0);
        assert_eq!(t.interval_ms(), 1);
    }
}
