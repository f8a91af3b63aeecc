//! Deferred work abstraction
//!
//! Every animated behavior waits by handing a callback to a [`Scheduler`]
//! instead of touching browser timers directly. The browser host backs it
//! with `setTimeout`/`setInterval`/`requestAnimationFrame`; tests back it
//! with [`VirtualScheduler`], a manual clock that fires due work in order.
//!
//! One-shot work ([`Scheduler::after`], [`Scheduler::next_frame`]) cannot be
//! cancelled. Recurring work ([`Scheduler::every`]) returns a handle that
//! cancels the recurrence when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One-shot task.
pub type Task = Box<dyn FnOnce()>;

/// One-shot animation frame task, called with the frame timestamp in ms.
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Recurring task.
pub type RepeatTask = Box<dyn FnMut()>;

/// Source of deferred execution for behavior state machines.
pub trait Scheduler {
    /// Handle for a recurring task; dropping it cancels the recurrence.
    type Interval;

    /// Run `task` once after `delay_ms` milliseconds.
    fn after(&self, delay_ms: u32, task: Task);

    /// Run `task` once on the next animation frame.
    fn next_frame(&self, task: FrameTask);

    /// Run `task` every `period_ms` milliseconds until the handle is dropped.
    fn every(&self, period_ms: u32, task: RepeatTask) -> Self::Interval;

    /// Current monotonic time in milliseconds.
    fn now(&self) -> f64;
}

/// Virtual frame length used by [`VirtualScheduler`] (~60fps).
pub const FRAME_MS: f64 = 16.0;

enum Job {
    Once(Task),
    Frame(FrameTask),
    Repeat {
        period: f64,
        alive: Rc<Cell<bool>>,
        task: Rc<RefCell<RepeatTask>>,
    },
}

impl Job {
    fn is_live(&self) -> bool {
        match self {
            Self::Repeat { alive, .. } => alive.get(),
            Self::Once(_) | Self::Frame(_) => true,
        }
    }
}

struct Pending {
    due: f64,
    seq: u64,
    job: Job,
}

#[derive(Default)]
struct Clock {
    now: f64,
    seq: u64,
    queue: Vec<Pending>,
}

impl Clock {
    fn push(&mut self, due: f64, job: Job) {
        self.seq = self.seq.wrapping_add(1);
        self.queue.push(Pending {
            due,
            seq: self.seq,
            job,
        });
    }

    /// Remove the earliest live job due at or before `deadline`.
    ///
    /// Recurring jobs are re-queued one period later before being returned.
    fn pop_due(&mut self, deadline: f64) -> Option<Job> {
        self.queue.retain(|pending| pending.job.is_live());

        let position = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= deadline)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(position, _)| position)?;

        let pending = self.queue.swap_remove(position);
        self.now = pending.due;

        if let Job::Repeat {
            period,
            alive,
            task,
        } = &pending.job
        {
            let again = Job::Repeat {
                period: *period,
                alive: Rc::clone(alive),
                task: Rc::clone(task),
            };
            self.push(pending.due + period, again);
        }

        Some(pending.job)
    }
}

/// Deterministic scheduler driven by explicit [`VirtualScheduler::advance`] calls.
///
/// Nothing runs until time is advanced. Jobs fire in due-time order, ties in
/// submission order, and jobs scheduled while advancing fire in the same call
/// if they fall due before its deadline.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Recurring job handle for [`VirtualScheduler`].
#[derive(Debug)]
pub struct VirtualInterval {
    alive: Rc<Cell<bool>>,
}

impl VirtualInterval {
    /// Whether the recurrence is still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for VirtualInterval {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl VirtualScheduler {
    /// Create a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `ms`, running every job that falls due.
    pub fn advance(&self, ms: f64) {
        let deadline = self.clock.borrow().now + ms.max(0.0);

        loop {
            // Borrow ends before the job runs; jobs re-enter the scheduler.
            let next = self.clock.borrow_mut().pop_due(deadline);
            let Some(job) = next else { break };
            self.run(job);
        }

        self.clock.borrow_mut().now = deadline;
    }

    /// Advance frame by frame until no work is pending or `limit_ms` elapses.
    pub fn run_until_idle(&self, limit_ms: f64) {
        let mut spent = 0.0;
        while !self.is_idle() && spent < limit_ms {
            self.advance(FRAME_MS);
            spent += FRAME_MS;
        }
    }

    fn run(&self, job: Job) {
        let now = self.now();
        match job {
            Job::Once(task) => task(),
            Job::Frame(task) => task(now),
            Job::Repeat { alive, task, .. } => {
                if alive.get() {
                    (task.borrow_mut())();
                }
            }
        }
    }

    /// Number of pending one-shot timeouts.
    #[must_use]
    pub fn pending_timeouts(&self) -> usize {
        self.count(|job| matches!(job, Job::Once(_)))
    }

    /// Number of pending animation frames.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.count(|job| matches!(job, Job::Frame(_)))
    }

    /// Number of recurring jobs whose handle is still alive.
    #[must_use]
    pub fn active_intervals(&self) -> usize {
        self.count(|job| matches!(job, Job::Repeat { .. }) && job.is_live())
    }

    /// True when nothing at all is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.count(Job::is_live) == 0
    }

    fn count(&self, predicate: impl Fn(&Job) -> bool) -> usize {
        self.clock
            .borrow()
            .queue
            .iter()
            .filter(|pending| predicate(&pending.job))
            .count()
    }
}

impl Scheduler for VirtualScheduler {
    type Interval = VirtualInterval;

    fn after(&self, delay_ms: u32, task: Task) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + f64::from(delay_ms);
        clock.push(due, Job::Once(task));
    }

    fn next_frame(&self, task: FrameTask) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + FRAME_MS;
        clock.push(due, Job::Frame(task));
    }

    fn every(&self, period_ms: u32, task: RepeatTask) -> VirtualInterval {
        let alive = Rc::new(Cell::new(true));
        // A zero period would spin forever inside a single advance.
        let period = f64::from(period_ms.max(1));
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + period;
        clock.push(
            due,
            Job::Repeat {
                period,
                alive: Rc::clone(&alive),
                task: Rc::new(RefCell::new(task)),
            },
        );
        VirtualInterval { alive }
    }

    fn now(&self) -> f64 {
        self.clock.borrow().now
    }
}
