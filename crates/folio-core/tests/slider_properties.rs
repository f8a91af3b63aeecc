//! Property tests for carousel normalization and autoplay exclusivity

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::slider::{Carousel, SlideView, normalize_index};
use folio_core::{Motion, VirtualScheduler};
use proptest::prelude::*;

fn carousel(count: usize) -> (Carousel<VirtualScheduler>, Rc<VirtualScheduler>, Rc<RefCell<Option<SlideView>>>) {
    let scheduler = Rc::new(VirtualScheduler::new());
    let last = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&last);
    let carousel = Carousel::new(count, Rc::clone(&scheduler), Motion::Full, 5000, move |view| {
        *sink.borrow_mut() = Some(view);
    })
    .unwrap();
    (carousel, scheduler, last)
}

proptest! {
    /// Property: update(i) lands on ((i mod n) + n) mod n
    #[test]
    fn prop_update_normalizes_any_index(index in -10_000i64..10_000, count in 1usize..20) {
        let (carousel, _scheduler, last) = carousel(count);
        let n = i64::try_from(count).unwrap();
        let expected = usize::try_from(((index % n) + n) % n).unwrap();

        let landed = carousel.update(index);

        prop_assert_eq!(landed, expected);
        prop_assert_eq!(carousel.current(), expected);
        let view = last.borrow().unwrap();
        let selected = (0..count).filter(|dot| view.is_selected(*dot)).count();
        prop_assert_eq!(selected, 1);
        prop_assert!(view.is_selected(expected));
    }

    /// Property: normalize_index is always in range
    #[test]
    fn prop_normalize_in_range(index in any::<i64>(), count in 1usize..1000) {
        let wrapped = normalize_index(index, count).unwrap();
        prop_assert!(wrapped < count);
    }

    /// Property: repeated autoplay starts leave exactly one interval
    #[test]
    fn prop_autoplay_restarts_keep_one_interval(starts in 1usize..10, count in 1usize..6) {
        let (carousel, scheduler, _last) = carousel(count);
        for _ in 0..starts {
            carousel.start_autoplay();
        }
        prop_assert_eq!(scheduler.active_intervals(), 1);
    }
}

#[test]
fn given_autoplay_started_twice_when_interval_elapses_then_advances_once() {
    let (carousel, scheduler, _last) = carousel(5);
    carousel.init();
    carousel.start_autoplay();

    scheduler.advance(5000.0);

    assert_eq!(carousel.current(), 1);
    assert_eq!(scheduler.active_intervals(), 1);
}

#[test]
fn given_paused_slider_when_pointer_leaves_then_autoplay_resumes_from_current() {
    let (carousel, scheduler, _last) = carousel(3);
    carousel.init();
    carousel.on_pointer_enter();
    carousel.on_next_clicked();
    scheduler.advance(20_000.0);
    assert_eq!(carousel.current(), 1);

    carousel.on_pointer_leave();
    scheduler.advance(5000.0);
    assert_eq!(carousel.current(), 2);
}
