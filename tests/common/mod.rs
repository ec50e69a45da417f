//! Fakes and a virtual-time harness shared by the integration tests
#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use countdown::{
    services::{Clock, Notifier, Scheduler, TickHandle, View},
    state::{Screen, TimerController, TimerSettings},
};

pub const EPOCH: i64 = 1_700_000_000_000;

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<i64>>);

impl ManualClock {
    pub fn at(millis: i64) -> Self {
        Self(Rc::new(Cell::new(millis)))
    }

    pub fn now(&self) -> i64 {
        self.0.get()
    }

    pub fn set(&self, millis: i64) {
        self.0.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.0.set(self.0.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}

#[derive(Debug, Default)]
struct SchedulerInner {
    generation: u64,
    pending: Vec<(TickHandle, i64)>,
    posted: usize,
    cancelled: usize,
}

/// Scheduler that records every posted tick against the manual clock.
///
/// Unlike the production scheduler it keeps every posted tick, so a
/// controller that forgets to cancel shows up as more than one pending tick.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
    clock: ManualClock,
}

impl ManualScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            inner: Rc::default(),
            clock,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn posted(&self) -> usize {
        self.inner.borrow().posted
    }

    pub fn cancelled(&self) -> usize {
        self.inner.borrow().cancelled
    }

    /// Earliest pending tick and when it is due
    pub fn next_due(&self) -> Option<(TickHandle, i64)> {
        self.inner
            .borrow()
            .pending
            .iter()
            .copied()
            .min_by_key(|(handle, due)| (*due, handle.generation()))
    }

    pub fn take(&self, handle: TickHandle) {
        self.inner.borrow_mut().pending.retain(|(h, _)| *h != handle);
    }
}

impl Scheduler for ManualScheduler {
    fn post_delayed(&mut self, delay: Duration) -> TickHandle {
        let mut inner = self.inner.borrow_mut();
        inner.generation += 1;
        inner.posted += 1;
        let handle = TickHandle::new(inner.generation);
        let due = self.clock.now() + delay.as_millis() as i64;
        inner.pending.push((handle, due));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.pending.len();
        inner.pending.retain(|(h, _)| *h != handle);
        if inner.pending.len() != before {
            inner.cancelled += 1;
        }
    }
}

/// View that keeps every frame it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingView(Rc<RefCell<Vec<Screen>>>);

impl RecordingView {
    pub fn frames(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn last(&self) -> Option<Screen> {
        self.0.borrow().last().cloned()
    }
}

impl View for RecordingView {
    fn render(&mut self, screen: &Screen) {
        self.0.borrow_mut().push(screen.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Message(String),
    Vibrate(Duration),
}

/// Notifier that records what the user would have seen and felt
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<Note>>>);

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<Note> {
        self.0.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notes()
            .into_iter()
            .filter_map(|note| match note {
                Note::Message(text) => Some(text),
                Note::Vibrate(_) => None,
            })
            .collect()
    }

    pub fn vibrations(&self) -> Vec<Duration> {
        self.notes()
            .into_iter()
            .filter_map(|note| match note {
                Note::Vibrate(duration) => Some(duration),
                Note::Message(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show_transient_message(&mut self, text: &str) {
        self.0.borrow_mut().push(Note::Message(text.to_string()));
    }

    fn vibrate(&mut self, duration: Duration) {
        self.0.borrow_mut().push(Note::Vibrate(duration));
    }
}

pub type SimController =
    TimerController<ManualClock, ManualScheduler, RecordingView, RecordingNotifier>;

/// Controller wired to fakes, with virtual time
pub struct Sim {
    pub controller: SimController,
    pub clock: ManualClock,
    pub scheduler: ManualScheduler,
    pub view: RecordingView,
    pub notifier: RecordingNotifier,
}

impl Sim {
    pub fn new() -> Self {
        Self::with_settings(TimerSettings::default())
    }

    pub fn with_settings(settings: TimerSettings) -> Self {
        let clock = ManualClock::at(EPOCH);
        let scheduler = ManualScheduler::new(clock.clone());
        let view = RecordingView::default();
        let notifier = RecordingNotifier::default();
        let controller = TimerController::new(
            clock.clone(),
            scheduler.clone(),
            view.clone(),
            notifier.clone(),
            settings,
        );

        Self {
            controller,
            clock,
            scheduler,
            view,
            notifier,
        }
    }

    /// Advance virtual time by `millis`, firing every tick that falls due
    pub fn run_for(&mut self, millis: i64) {
        let target = self.clock.now() + millis;

        loop {
            assert!(
                self.scheduler.pending_count() <= 1,
                "more than one tick pending"
            );
            match self.scheduler.next_due() {
                Some((handle, due)) if due <= target => {
                    self.clock.set(due.max(self.clock.now()));
                    self.scheduler.take(handle);
                    self.controller.tick(handle);
                }
                _ => break,
            }
        }

        self.clock.set(target);
    }

    /// Rebuild the screen around a fresh view, as a rotation would
    pub fn rebuild(self) -> Self {
        let view = RecordingView::default();
        let controller = self.controller.rebuild(view.clone());

        Self {
            controller,
            clock: self.clock,
            scheduler: self.scheduler,
            view,
            notifier: self.notifier,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.controller.state().remaining_millis()
    }

    pub fn display(&self) -> String {
        self.controller.screen().display.clone()
    }
}
