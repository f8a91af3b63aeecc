//! Typewriter chain driven end-to-end on a virtual clock

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::typewriter::{self, Phase, Typewriter, TypewriterTiming};
use folio_core::{Motion, VirtualScheduler};

fn timing() -> TypewriterTiming {
    TypewriterTiming {
        typing_delay_ms: 10,
        erasing_delay_ms: 5,
        hold_delay_ms: 100,
    }
}

fn start(
    phrases: &[&str],
    motion: Motion,
) -> (
    Rc<VirtualScheduler>,
    Rc<RefCell<Vec<String>>>,
    Option<typewriter::TypewriterHandle>,
) {
    let scheduler = Rc::new(VirtualScheduler::new());
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let handle = typewriter::run(
        Typewriter::new(phrases, timing()).unwrap(),
        Rc::clone(&scheduler),
        motion,
        move |text: &str| sink.borrow_mut().push(text.to_string()),
    );
    (scheduler, frames, handle)
}

#[test]
fn given_three_single_char_phrases_when_full_cycle_elapses_then_word_index_wraps_to_zero() {
    let (scheduler, frames, handle) = start(&["A", "B", "C"], Motion::Full);
    let handle = handle.unwrap();

    // Per phrase: type (shown at once) + hold 100 + erase, then 10 before next.
    // A: t=0 "A", t=100 "", t=110 "B", t=210 "", t=220 "C", t=320 "".
    scheduler.advance(320.0);

    assert_eq!(
        *frames.borrow(),
        vec!["A", "", "B", "", "C", ""]
    );
    assert_eq!(handle.word_index(), 0);
    assert_eq!(handle.phase(), Phase::Typing);
}

#[test]
fn given_running_typewriter_when_cycling_then_never_more_than_one_pending_timer() {
    let (scheduler, _frames, _handle) = start(&["Hello", "Rust"], Motion::Full);

    for _ in 0..400 {
        assert_eq!(scheduler.pending_timeouts(), 1);
        scheduler.advance(5.0);
    }
}

#[test]
fn given_running_typewriter_when_many_cycles_pass_then_it_keeps_going() {
    let (scheduler, frames, handle) = start(&["A", "B", "C"], Motion::Full);

    // One cycle is 3 * (hold + typing delay) = 330ms.
    scheduler.advance(330.0 * 10.0);

    let frames = frames.borrow();
    assert_eq!(frames.len(), 6 * 10 + 1);
    assert_eq!(frames.last().map(String::as_str), Some("A"));
    assert!(handle.is_some());
    assert_eq!(scheduler.pending_timeouts(), 1);
}

#[test]
fn given_multi_char_phrase_when_typing_then_reveals_one_char_per_tick() {
    let (scheduler, frames, _handle) = start(&["abc"], Motion::Full);

    scheduler.advance(20.0);
    assert_eq!(*frames.borrow(), vec!["a", "ab", "abc"]);

    // Hold, then erase at 5ms per character.
    scheduler.advance(100.0 + 5.0 + 5.0);
    assert_eq!(*frames.borrow(), vec!["a", "ab", "abc", "ab", "a", ""]);
}

#[test]
fn given_reduced_motion_when_started_then_first_phrase_is_static() {
    let (scheduler, frames, handle) = start(&["First", "Second"], Motion::Reduced);

    assert!(handle.is_none());
    assert_eq!(*frames.borrow(), vec!["First"]);
    assert!(scheduler.is_idle());

    scheduler.advance(10_000.0);
    assert_eq!(frames.borrow().len(), 1);
}
