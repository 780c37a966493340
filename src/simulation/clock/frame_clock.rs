//! Monotonic millisecond clock used by `update()` when the host does not
//! pass its own timestamp.

use super::perf_timer::PerfTimer;

pub(crate) struct FrameClock {
    epoch: PerfTimer,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        FrameClock { epoch: PerfTimer::start() }
    }

    /// Milliseconds since the clock was created
    pub(crate) fn now_ms(&self) -> f64 {
        // Date.now() can jump backwards with the system clock
        self.epoch.elapsed_ms().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_never_goes_backwards() {
        let clock = FrameClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
