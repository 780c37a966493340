//! Wall-clock stopwatch for perf counters.
//! Browsers have no `Instant`, so wasm reads `Date.now()` instead.

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { started_at_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { started_at: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.started_at_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Run `f`, storing its duration in `slot` only when `enabled`
    #[inline]
    pub(crate) fn measure<T>(enabled: bool, slot: &mut f64, f: impl FnOnce() -> T) -> T {
        if !enabled {
            return f();
        }
        let timer = PerfTimer::start();
        let out = f();
        *slot = timer.elapsed_ms();
        out
    }
}
