//! Typewriter phrase cycling
//!
//! A [`Typewriter`] is a pure state machine: each [`Typewriter::step`] returns
//! the text to show and how long to wait before the next step. [`run`] drives
//! it through a [`Scheduler`] as a single self-rescheduling chain, so there is
//! never more than one pending timer for one typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::motion::Motion;
use crate::result::Result;
use crate::schedule::Scheduler;

/// Per-character and hold delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    pub typing_delay_ms: u32,
    pub erasing_delay_ms: u32,
    pub hold_delay_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_delay_ms: 70,
            erasing_delay_ms: 40,
            hold_delay_ms: 1200,
        }
    }
}

/// What the next step will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing the current phrase one character at a time
    Typing,
    /// Full phrase on screen; the next step starts erasing
    Holding,
    /// Removing the current phrase one character at a time
    Erasing,
}

/// Output of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text the target should display now
    pub text: String,
    /// Delay before the next step
    pub delay_ms: u32,
}

/// Typed/erased phrase cycle.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    word: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    /// Build a typewriter over `phrases`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPhrases`] for an empty list and
    /// [`Error::EmptyPhrase`] if any phrase has no characters.
    pub fn new<S: AsRef<str>>(phrases: &[S], timing: TypewriterTiming) -> Result<Self> {
        if phrases.is_empty() {
            return Err(Error::NoPhrases);
        }

        let phrases = phrases
            .iter()
            .enumerate()
            .map(|(index, phrase)| {
                let chars: Vec<char> = phrase.as_ref().chars().collect();
                if chars.is_empty() {
                    Err(Error::EmptyPhrase { index })
                } else {
                    Ok(chars)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            phrases,
            timing,
            word: 0,
            chars: 0,
            phase: Phase::Typing,
        })
    }

    /// Index of the phrase currently being typed or erased.
    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.word
    }

    /// Number of characters of the current phrase on screen.
    #[must_use]
    pub const fn char_index(&self) -> usize {
        self.chars
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The first phrase, shown statically when motion is reduced.
    #[must_use]
    pub fn first_phrase(&self) -> String {
        self.phrases
            .first()
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    fn current(&self) -> &[char] {
        self.phrases.get(self.word).map_or(&[], Vec::as_slice)
    }

    fn visible(&self) -> String {
        self.current().iter().take(self.chars).collect()
    }

    /// Advance by one character and report what to show and when to step next.
    pub fn step(&mut self) -> Tick {
        match self.phase {
            Phase::Typing => {
                let len = self.current().len();
                self.chars = self.chars.saturating_add(1).min(len);
                let text = self.visible();
                let delay_ms = if self.chars == len {
                    self.phase = Phase::Holding;
                    tracing::trace!(word = self.word, "phrase fully typed");
                    self.timing.hold_delay_ms
                } else {
                    self.timing.typing_delay_ms
                };
                Tick { text, delay_ms }
            }
            Phase::Holding | Phase::Erasing => {
                self.phase = Phase::Erasing;
                self.chars = self.chars.saturating_sub(1);
                let text = self.visible();
                let delay_ms = if self.chars == 0 {
                    self.advance_word();
                    self.timing.typing_delay_ms
                } else {
                    self.timing.erasing_delay_ms
                };
                Tick { text, delay_ms }
            }
        }
    }

    fn advance_word(&mut self) {
        let count = self.phrases.len().max(1);
        self.word = self.word.saturating_add(1).checked_rem(count).unwrap_or(0);
        self.phase = Phase::Typing;
        tracing::trace!(word = self.word, "advancing to next phrase");
    }
}

/// Live typewriter chain; lets callers inspect progress.
#[derive(Debug, Clone)]
pub struct TypewriterHandle {
    state: Rc<RefCell<Typewriter>>,
}

impl TypewriterHandle {
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.state.borrow().word_index()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase()
    }
}

/// Start the typewriter, rendering every step through `render`.
///
/// The first step runs immediately. With [`Motion::Reduced`] the first phrase
/// is rendered once, nothing is scheduled, and `None` is returned.
pub fn run<S, F>(
    typewriter: Typewriter,
    scheduler: Rc<S>,
    motion: Motion,
    render: F,
) -> Option<TypewriterHandle>
where
    S: Scheduler + 'static,
    F: Fn(&str) + 'static,
{
    if motion.is_reduced() {
        render(&typewriter.first_phrase());
        return None;
    }

    let state = Rc::new(RefCell::new(typewriter));
    tick(Rc::clone(&state), scheduler, Rc::new(render));
    Some(TypewriterHandle { state })
}

fn tick<S>(state: Rc<RefCell<Typewriter>>, scheduler: Rc<S>, render: Rc<dyn Fn(&str)>)
where
    S: Scheduler + 'static,
{
    let Tick { text, delay_ms } = state.borrow_mut().step();
    render(&text);

    let next = Rc::clone(&scheduler);
    scheduler.after(delay_ms, Box::new(move || tick(state, next, render)));
}
