//! Frame loop state machine.
//!
//! The scheduler only tracks lifecycle. It never blocks and never runs a
//! frame itself: the engine asks it whether a frame should run, renders, and
//! then asks it to schedule the next one through the host [`FramePacer`].
//!
//! ```text
//! Stopped --start()--> Running { pending: None }
//! Running --schedule()--> Running { pending: Some(h) }
//! Running { pending: Some(h) } --accept(h)--> Running { pending: None }
//! Running --stop()--> Stopped        (pending frame cancelled)
//! ```
//!
//! A frame callback is accepted only for the currently pending handle, so a
//! callback that fires after `stop()` (or a stale one from a previous run) is
//! dropped even if the host could not cancel it in time.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use crate::host::{FrameHandle, FramePacer};

/// Lifecycle phase of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Stopped,
    Running {
        /// Frame requested from the host and not yet delivered.
        pending: Option<FrameHandle>,
    },
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    phase: Phase,
    frames_rendered: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Handle of the frame currently waiting to fire.
    #[must_use]
    pub fn pending(&self) -> Option<FrameHandle> {
        match self.phase {
            Phase::Running { pending } => pending,
            Phase::Stopped => None,
        }
    }

    /// Frames rendered since construction.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Enter `Running`. Returns `false` (and does nothing) if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running { pending: None };
        true
    }

    /// Enter `Stopped`, cancelling the pending frame. Returns `false` if already stopped.
    pub fn stop<P: FramePacer + ?Sized>(&mut self, pacer: &mut P) -> bool {
        let Phase::Running { pending } = self.phase else {
            return false;
        };
        if let Some(handle) = pending {
            pacer.cancel_frame(handle);
        }
        self.phase = Phase::Stopped;
        true
    }

    /// Claim a delivered frame callback.
    ///
    /// Returns `true` only when running and `handle` is the pending frame; the
    /// pending slot is cleared so the same handle cannot run twice.
    pub fn accept(&mut self, handle: FrameHandle) -> bool {
        match self.phase {
            Phase::Running { pending: Some(p) } if p == handle => {
                self.phase = Phase::Running { pending: None };
                true
            }
            _ => false,
        }
    }

    /// Record that one frame was rendered.
    pub fn mark_rendered(&mut self) {
        self.frames_rendered += 1;
    }

    /// Request the next frame if still running and nothing is pending.
    ///
    /// If the host refuses, the loop cannot continue and the scheduler drops
    /// back to `Stopped`.
    pub fn schedule<P: FramePacer + ?Sized>(&mut self, pacer: &mut P) {
        if self.phase != (Phase::Running { pending: None }) {
            return;
        }
        match pacer.request_frame() {
            Ok(handle) => self.phase = Phase::Running { pending: Some(handle) },
            Err(e) => {
                tracing::error!(error = %e, "cannot schedule next frame; stopping render loop");
                self.phase = Phase::Stopped;
            }
        }
    }
}
