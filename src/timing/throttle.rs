//! Leading-edge throttle.
//!
//! The first call fires immediately and opens a window; calls inside the
//! window are dropped, not queued.

/// Rate limiter state owned by a single handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    window_ms: u64,
    last_fired: Option<u64>,
}

impl Throttle {
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_fired: None,
        }
    }

    /// Returns `true` and records `now_ms` if a call at `now_ms` may run.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let open = self
            .last_fired
            .map_or(true, |last| now_ms.saturating_sub(last) >= self.window_ms);
        if open {
            self.last_fired = Some(now_ms);
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires() {
        let mut t = Throttle::new(100);
        assert!(t.try_fire(0));
    }

    #[test]
    fn calls_inside_window_are_dropped() {
        let mut t = Throttle::new(100);
        assert!(t.try_fire(10));
        assert!(!t.try_fire(50));
        assert!(!t.try_fire(109));
        assert!(t.try_fire(110));
        assert!(!t.try_fire(150));
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let mut t = Throttle::new(16);
        assert!(t.try_fire(0));
        for now in 1..16 {
            assert!(!t.try_fire(now));
        }
        assert!(t.try_fire(16));
    }
}
