//! One-shot delayed tick scheduling

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Identifies one posted tick. Generations never repeat within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Posts and revokes delayed tick invocations on the owning thread
pub trait Scheduler {
    /// Post a tick to fire after `delay`
    fn post_delayed(&mut self, delay: Duration) -> TickHandle;

    /// Revoke a previously posted tick; unknown handles are ignored
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler polled by the session loop.
///
/// Holds at most one pending tick: posting replaces whatever was pending.
#[derive(Debug, Default)]
pub struct LoopScheduler {
    generation: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl LoopScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the pending tick is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Take the pending tick if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<TickHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Scheduler for LoopScheduler {
    fn post_delayed(&mut self, delay: Duration) -> TickHandle {
        self.generation += 1;
        let handle = TickHandle(self.generation);
        if let Some((replaced, _)) = self.pending.replace((handle, Instant::now() + delay)) {
            debug!("Tick {} replaced by {}", replaced.0, handle.0);
        }
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
