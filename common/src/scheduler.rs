use std::time::Duration;

/// A single repeating timer driven by elapsed wall time.
///
/// Front ends feed it frame deltas with [`TickScheduler::advance`] and drain
/// due ticks one at a time with [`TickScheduler::poll_tick`], so a tick
/// always finishes before the next one is handed out.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    running: bool,
    accumulator: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        TickScheduler {
            interval,
            running: false,
            accumulator: Duration::ZERO,
        }
    }

    /// Start (or restart) the timer. Any time accumulated by a previous run is dropped.
    pub fn start(&mut self, interval: Duration) {
        self.interval = interval;
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.running {
            self.accumulator += dt;
        }
    }

    /// Consume one due tick, if any.
    pub fn poll_tick(&mut self) -> bool {
        if !self.running || self.interval.is_zero() || self.accumulator < self.interval {
            return false;
        }
        self.accumulator -= self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_scheduler_never_ticks() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.advance(Duration::from_secs(5));
        assert!(!scheduler.poll_tick());
    }

    #[test]
    fn yields_one_tick_per_interval() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.start(Duration::from_millis(100));
        scheduler.advance(Duration::from_millis(250));
        assert!(scheduler.poll_tick());
        assert!(scheduler.poll_tick());
        assert!(!scheduler.poll_tick());
        // The leftover 50ms counts toward the next tick
        scheduler.advance(Duration::from_millis(50));
        assert!(scheduler.poll_tick());
    }

    #[test]
    fn restart_discards_pending_time() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        scheduler.start(Duration::from_millis(100));
        scheduler.advance(Duration::from_millis(350));
        assert!(scheduler.poll_tick());
        scheduler.start(Duration::from_millis(100));
        assert!(!scheduler.poll_tick());
    }
}
