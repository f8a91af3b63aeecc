//! Browser-backed [`Scheduler`]
//!
//! Timeouts and intervals come from gloo-timers; frames from
//! `requestAnimationFrame`. One-shot work is fire-and-forget, recurring work
//! is cancelled by dropping the returned [`Interval`].

use folio_core::schedule::{FrameTask, RepeatTask, Scheduler, Task};
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Scheduler for the live page
#[derive(Debug, Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    type Interval = Interval;

    fn after(&self, delay_ms: u32, task: Task) {
        let _id = Timeout::new(delay_ms, task).forget();
    }

    fn next_frame(&self, task: FrameTask) {
        // Freed by wasm-bindgen after its single invocation.
        let callback = Closure::once_into_js(move |timestamp: f64| task(timestamp));
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            tracing::warn!("failed to request animation frame: {e:?}");
        }
    }

    fn every(&self, period_ms: u32, task: RepeatTask) -> Interval {
        Interval::new(period_ms, task)
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map_or(0.0, |performance| performance.now())
    }
}
