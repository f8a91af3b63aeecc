//! Skill indicator fill and readout animation

use std::rc::Rc;

use crate::schedule::Scheduler;

/// Readout animation length.
pub const READOUT_DURATION_MS: u32 = 900;

/// Parse a `data-level` value: leading decimal digits, clamped to 0–100.
///
/// Missing or non-numeric input yields 0.
#[must_use]
pub fn parse_level(raw: Option<&str>) -> u8 {
    let digits: String = raw
        .unwrap_or_default()
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    // Overlong digit strings are clamped rather than rejected.
    digits
        .parse::<u64>()
        .map_or_else(|_| if digits.is_empty() { 0 } else { 100 }, |n| n.min(100))
        .try_into()
        .unwrap_or(100)
}

/// One skill indicator's target level and readout duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillMeter {
    level: u8,
    duration_ms: u32,
}

impl SkillMeter {
    #[must_use]
    pub const fn new(level: u8, duration_ms: u32) -> Self {
        Self {
            level: if level > 100 { 100 } else { level },
            duration_ms,
        }
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Bar width, set in full as soon as the indicator is revealed.
    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level)
    }

    /// Readout value `elapsed_ms` after the reveal: `round(level * min(1, t / duration))`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn readout_at(&self, elapsed_ms: f64) -> u8 {
        let progress = self.progress(elapsed_ms);
        let value = (f64::from(self.level) * progress).round();
        value.clamp(0.0, f64::from(self.level)) as u8
    }

    /// Whether the readout has reached its target.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }
}

/// Format a readout value for display.
#[must_use]
pub fn readout_text(value: u8) -> String {
    format!("{value}%")
}

/// Animate the readout frame by frame from now until the meter completes.
///
/// Frames are one-shot and self-rescheduling; the chain ends on its own once
/// the target is displayed.
pub fn animate_readout<S, F>(meter: SkillMeter, scheduler: Rc<S>, render: F)
where
    S: Scheduler + 'static,
    F: Fn(u8) + 'static,
{
    let start = scheduler.now();
    request_frame(meter, start, scheduler, Rc::new(render));
}

fn request_frame<S>(meter: SkillMeter, start: f64, scheduler: Rc<S>, render: Rc<dyn Fn(u8)>)
where
    S: Scheduler + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.next_frame(Box::new(move |timestamp| {
        let elapsed = timestamp - start;
        render(meter.readout_at(elapsed));
        if !meter.is_complete(elapsed) {
            request_frame(meter, start, next, render);
        }
    }));
}

/// Tracks which indicators already animated so each one fires at most once.
#[derive(Debug, Clone, Default)]
pub struct RevealOnce {
    fired: Vec<bool>,
}

impl RevealOnce {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            fired: vec![false; count],
        }
    }

    /// Mark `index` revealed. Returns `true` only the first time.
    pub fn trigger(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }
}
