//! Testimonial carousel state and autoplay
//!
//! The carousel owns one index into a fixed, non-empty slide sequence and at
//! most one autoplay interval. Manual navigation always cancels autoplay
//! first; only [`Carousel::on_pointer_leave`] restarts it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::Error;
use crate::motion::Motion;
use crate::result::Result;
use crate::schedule::Scheduler;

/// Default autoplay period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Wrap any index (negative included) into `0..len`.
///
/// Returns `None` when `len` is zero.
#[must_use]
pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|len| *len > 0)?;
    let wrapped = index.checked_rem_euclid(len)?;
    usize::try_from(wrapped).ok()
}

/// What the host must paint after a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub count: usize,
}

impl SlideView {
    /// Horizontal track offset in percent (`-index * 100`).
    #[must_use]
    pub fn offset_percent(&self) -> i64 {
        i64::try_from(self.index)
            .ok()
            .and_then(|index| index.checked_mul(-100))
            .unwrap_or(0)
    }

    /// CSS transform for the slide track.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// Whether the dot at `dot` marks the current slide.
    #[must_use]
    pub const fn is_selected(&self, dot: usize) -> bool {
        dot == self.index
    }
}

struct CarouselState<I> {
    current: usize,
    count: usize,
    autoplay: Option<I>,
}

/// Slide index, autoplay timer, and render callback for one slider.
pub struct Carousel<S: Scheduler> {
    state: Rc<RefCell<CarouselState<S::Interval>>>,
    scheduler: Rc<S>,
    motion: Motion,
    interval_ms: u32,
    render: Rc<dyn Fn(SlideView)>,
}

impl<S: Scheduler> Clone for Carousel<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            scheduler: Rc::clone(&self.scheduler),
            motion: self.motion,
            interval_ms: self.interval_ms,
            render: Rc::clone(&self.render),
        }
    }
}

impl<S: Scheduler + 'static> Carousel<S> {
    /// Create a carousel over `count` slides. Nothing is rendered until [`Self::init`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSlides`] when `count` is zero.
    pub fn new<F>(
        count: usize,
        scheduler: Rc<S>,
        motion: Motion,
        interval_ms: u32,
        render: F,
    ) -> Result<Self>
    where
        F: Fn(SlideView) + 'static,
    {
        if count == 0 {
            return Err(Error::NoSlides);
        }

        Ok(Self {
            state: Rc::new(RefCell::new(CarouselState {
                current: 0,
                count,
                autoplay: None,
            })),
            scheduler,
            motion,
            interval_ms,
            render: Rc::new(render),
        })
    }

    /// Show the first slide and start autoplay.
    pub fn init(&self) {
        self.update(0);
        self.start_autoplay();
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.state.borrow().current
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.state.borrow().count
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.state.borrow().autoplay.is_some()
    }

    /// Move to `index` (wrapped into range) and render.
    pub fn update(&self, index: i64) -> usize {
        show(&self.state, &self.render, index)
    }

    pub fn next(&self) -> usize {
        step(&self.state, &self.render, 1)
    }

    pub fn prev(&self) -> usize {
        step(&self.state, &self.render, -1)
    }

    /// Start advancing every interval, replacing any running autoplay.
    ///
    /// Does nothing under reduced motion.
    pub fn start_autoplay(&self) {
        if self.motion.is_reduced() {
            return;
        }
        self.stop_autoplay();

        let state = Rc::downgrade(&self.state);
        let render = Rc::clone(&self.render);
        let interval = self
            .scheduler
            .every(self.interval_ms, Box::new(move || autoplay_tick(&state, &render)));

        self.state.borrow_mut().autoplay = Some(interval);
        tracing::debug!(interval_ms = self.interval_ms, "slider autoplay started");
    }

    /// Cancel autoplay if it is running.
    pub fn stop_autoplay(&self) {
        let previous = self.state.borrow_mut().autoplay.take();
        if previous.is_some() {
            tracing::debug!("slider autoplay stopped");
        }
        // Dropped outside the borrow; the handle's drop cancels the timer.
        drop(previous);
    }

    pub fn on_next_clicked(&self) {
        self.stop_autoplay();
        self.next();
    }

    pub fn on_prev_clicked(&self) {
        self.stop_autoplay();
        self.prev();
    }

    pub fn on_dot_clicked(&self, dot: usize) {
        self.stop_autoplay();
        self.update(i64::try_from(dot).unwrap_or(0));
    }

    pub fn on_pointer_enter(&self) {
        self.stop_autoplay();
    }

    pub fn on_pointer_leave(&self) {
        self.start_autoplay();
    }
}

fn autoplay_tick<I>(state: &Weak<RefCell<CarouselState<I>>>, render: &Rc<dyn Fn(SlideView)>) {
    if let Some(state) = state.upgrade() {
        step(&state, render, 1);
    }
}

fn step<I>(state: &Rc<RefCell<CarouselState<I>>>, render: &Rc<dyn Fn(SlideView)>, by: i64) -> usize {
    let current = i64::try_from(state.borrow().current).unwrap_or(0);
    show(state, render, current.saturating_add(by))
}

fn show<I>(state: &Rc<RefCell<CarouselState<I>>>, render: &Rc<dyn Fn(SlideView)>, index: i64) -> usize {
    let view = {
        let mut state = state.borrow_mut();
        let Some(current) = normalize_index(index, state.count) else {
            return state.current;
        };
        state.current = current;
        SlideView {
            index: current,
            count: state.count,
        }
    };
    render(view);
    view.index
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::Cell;

    use super::*;
    use crate::schedule::VirtualScheduler;

    fn carousel(
        count: usize,
        motion: Motion,
    ) -> (Carousel<VirtualScheduler>, Rc<VirtualScheduler>, Rc<Cell<usize>>) {
        let scheduler = Rc::new(VirtualScheduler::new());
        let painted = Rc::new(Cell::new(usize::MAX));
        let sink = Rc::clone(&painted);
        let carousel = Carousel::new(
            count,
            Rc::clone(&scheduler),
            motion,
            AUTOPLAY_INTERVAL_MS,
            move |view: SlideView| sink.set(view.index),
        )
        .unwrap();
        (carousel, scheduler, painted)
    }

    #[test]
    fn test_normalize_index_wraps_both_directions() {
        assert_eq!(normalize_index(0, 3), Some(0));
        assert_eq!(normalize_index(3, 3), Some(0));
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(-4, 3), Some(2));
        assert_eq!(normalize_index(7, 3), Some(1));
        assert_eq!(normalize_index(1, 0), None);
    }

    #[test]
    fn test_track_transform() {
        let first = SlideView { index: 0, count: 3 };
        let third = SlideView { index: 2, count: 3 };
        assert_eq!(first.track_transform(), "translateX(0%)");
        assert_eq!(third.track_transform(), "translateX(-200%)");
    }

    #[test]
    fn test_rejects_zero_slides() {
        let scheduler = Rc::new(VirtualScheduler::new());
        let result = Carousel::new(0, scheduler, Motion::Full, 5000, |_| {});
        assert!(matches!(result, Err(Error::NoSlides)));
    }

    #[test]
    fn test_init_renders_first_slide_and_starts_autoplay() {
        let (carousel, scheduler, painted) = carousel(3, Motion::Full);
        carousel.init();

        assert_eq!(painted.get(), 0);
        assert!(carousel.is_autoplaying());
        assert_eq!(scheduler.active_intervals(), 1);
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let (carousel, scheduler, painted) = carousel(3, Motion::Full);
        carousel.init();

        scheduler.advance(5000.0);
        assert_eq!(painted.get(), 1);
        scheduler.advance(10_000.0);
        assert_eq!(painted.get(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let (carousel, _scheduler, painted) = carousel(4, Motion::Full);
        carousel.init();
        carousel.on_prev_clicked();
        assert_eq!(painted.get(), 3);
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_manual_navigation_cancels_autoplay() {
        let (carousel, scheduler, _painted) = carousel(3, Motion::Full);
        carousel.init();

        carousel.on_dot_clicked(2);

        assert_eq!(carousel.current(), 2);
        assert!(!carousel.is_autoplaying());
        scheduler.advance(20_000.0);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_pointer_enter_pauses_and_leave_resumes() {
        let (carousel, scheduler, _painted) = carousel(3, Motion::Full);
        carousel.init();

        carousel.on_pointer_enter();
        assert_eq!(scheduler.active_intervals(), 0);

        carousel.on_pointer_leave();
        assert_eq!(scheduler.active_intervals(), 1);
    }

    #[test]
    fn test_reduced_motion_never_autoplays() {
        let (carousel, scheduler, painted) = carousel(3, Motion::Reduced);
        carousel.init();
        carousel.on_pointer_leave();

        assert_eq!(painted.get(), 0);
        assert!(!carousel.is_autoplaying());
        assert_eq!(scheduler.active_intervals(), 0);
    }
}
