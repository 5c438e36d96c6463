/// Wall-clock stopwatch for pass timings. `Date.now()` on wasm, where
/// `Instant` is unavailable.
#[derive(Clone, Copy)]
pub(crate) struct PassTimer {
    #[cfg(target_arch = "wasm32")]
    started_at: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PassTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        let started_at = js_sys::Date::now();
        #[cfg(not(target_arch = "wasm32"))]
        let started_at = std::time::Instant::now();
        PassTimer { started_at }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let ms = js_sys::Date::now() - self.started_at;
        #[cfg(not(target_arch = "wasm32"))]
        let ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        ms
    }
}
