/// Identifies one requested visual tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(pub u64);

/// Host "request next visual tick" primitive.
///
/// A request is one-shot: the host later delivers the returned handle to
/// [`crate::Animator::tick`] exactly once, and the animator must request again to keep
/// receiving ticks.
pub trait TickScheduler {
    fn request_tick(&mut self) -> TickHandle;

    /// Drop a request that has not fired yet.
    fn cancel_tick(&mut self, _handle: TickHandle) {}
}

/// A scheduler whose ticks fire only when the host calls [`ManualScheduler::fire`].
///
/// Holds at most one pending request, matching a display-refresh callback.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    requested: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending request, if any, so it can be delivered.
    pub fn fire(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Number of requests made so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl TickScheduler for ManualScheduler {
    fn request_tick(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/scheduler.rs"]
mod tests;
