// src/animation/scheduler.rs
//
// Fixed-delay tick scheduling.
//
// The animator hands out a TickRequest each time it wants another frame.
// Requests carry the attach generation they were issued in, so a timer that
// outlives a detach fires into nothing.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRequest {
    pub(crate) generation: u64,
    pub delay: Duration,
}

/// Host-side timer holding at most one pending request.
#[derive(Debug, Default)]
pub struct TickTimer {
    pending: Option<TickRequest>,
    elapsed: Duration,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending request and restarts the countdown.
    pub fn arm(&mut self, request: TickRequest) {
        self.pending = Some(request);
        self.elapsed = Duration::ZERO;
    }

    pub fn disarm(&mut self) {
        self.pending = None;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Accumulates frame time; returns the request once its delay has passed.
    pub fn update(&mut self, dt: Duration) -> Option<TickRequest> {
        let request = self.pending?;
        self.elapsed += dt;
        if self.elapsed >= request.delay {
            self.disarm();
            Some(request)
        } else {
            None
        }
    }
}
