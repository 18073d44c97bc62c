//! Reveal scheduler: grows the revealed count one tick at a time.
//!
//! The scheduler owns the only mutable reveal state: the current session
//! (which tree, how much of it is revealed, whether it finished) and the
//! stopped flag. A session is tied to one tree *reference*; presenting a
//! different `Arc` abandons the old session without completing it.
//!
//! Ticks come from a [`Timer`] thread but are applied here, on the owning
//! thread, through [`RevealScheduler::pump`] or
//! [`RevealScheduler::wait_tick`]. In [`TimerMode::Manual`] the caller
//! drives [`RevealScheduler::advance`] directly.

use super::config::{RevealConfig, TimerMode};
use super::observer::RevealObserver;
use super::timer::Timer;
use crate::content::{length, ContentNode};
use crate::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No running session (none started, or already complete).
    Idle,
    /// The scheduler is stopped; the count did not move.
    Suppressed,
    /// The count grew but the tree is not fully revealed yet.
    Advanced,
    /// The count reached the total and completion fired.
    Completed,
}

/// One reveal attempt for one tree reference.
struct Session<M> {
    key: Arc<ContentNode<M>>,
    total: usize,
    revealed: usize,
    completed: bool,
    /// Present only while the session is running in threaded mode.
    timer: Option<Timer>,
    observer: Box<dyn RevealObserver>,
}

/// Drives the revealed count of a content tree from 0 to its length.
pub struct RevealScheduler<M> {
    config: RevealConfig,
    session: Option<Session<M>>,
    stopped: bool,
}

impl<M> RevealScheduler<M> {
    /// Create an idle scheduler.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has a zero step or interval.
    pub fn new(config: RevealConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
            stopped: false,
        })
    }

    /// Get the configuration.
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Begin revealing `tree`. Same as [`RevealScheduler::restart`].
    ///
    /// # Errors
    ///
    /// Returns an error if the timer thread cannot be spawned.
    pub fn start(
        &mut self,
        tree: &Arc<ContentNode<M>>,
        observer: impl RevealObserver + 'static,
    ) -> Result<()> {
        self.restart(tree, observer)
    }

    /// Replace the current session with `tree` if it is a different reference.
    ///
    /// Restarting the tree that is already the current session does not
    /// reset progress or spawn a second timer; it only installs the new
    /// observer, so later notifications always reach the latest one.
    ///
    /// The old session's timer is stopped and joined and its observer is
    /// dropped without a completion. A tree with nothing to reveal
    /// completes immediately, without any update.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer thread cannot be spawned.
    pub fn restart(
        &mut self,
        tree: &Arc<ContentNode<M>>,
        observer: impl RevealObserver + 'static,
    ) -> Result<()> {
        if let Some(session) = self.session.as_mut().filter(|s| Arc::ptr_eq(&s.key, tree)) {
            session.observer = Box::new(observer);
            return Ok(());
        }

        self.cancel();

        let total = length(tree.as_ref());
        let mut session = Session {
            key: Arc::clone(tree),
            total,
            revealed: 0,
            completed: false,
            timer: None,
            observer: Box::new(observer),
        };
        debug!(total, step = self.config.step, "reveal session started");

        if total == 0 {
            session.completed = true;
            debug!("reveal session complete (nothing to reveal)");
            session.observer.on_complete();
        } else if self.config.mode == TimerMode::Threaded {
            session.timer = Some(Timer::spawn(self.config.interval)?);
        }

        self.session = Some(session);
        Ok(())
    }

    /// End the current session without completing it.
    pub fn cancel(&mut self) {
        if let Some(old) = self.session.take() {
            if !old.completed {
                debug!(
                    revealed = old.revealed,
                    total = old.total,
                    "reveal session abandoned"
                );
            }
        }
    }

    /// Pause or resume.
    ///
    /// While stopped the timer keeps running but its ticks are ignored,
    /// so resuming needs no rescheduling.
    pub fn set_stopped(&mut self, stopped: bool) {
        if self.stopped != stopped {
            debug!(stopped, "reveal stopped flag changed");
        }
        self.stopped = stopped;
    }

    /// Check if ticks are currently suppressed.
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Apply one tick.
    pub fn advance(&mut self) -> TickOutcome {
        let step = self.config.step;
        let stopped = self.stopped;
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Idle;
        };
        if session.completed {
            return TickOutcome::Idle;
        }
        if stopped {
            return TickOutcome::Suppressed;
        }

        session.revealed = session.revealed.saturating_add(step).min(session.total);
        trace!(revealed = session.revealed, total = session.total, "reveal tick");
        session.observer.on_update();

        if session.revealed < session.total {
            return TickOutcome::Advanced;
        }

        session.completed = true;
        // Stop the timer before announcing, so no tick can follow completion
        session.timer = None;
        debug!(total = session.total, "reveal session complete");
        session.observer.on_complete();
        TickOutcome::Completed
    }

    /// Apply every tick the timer has already delivered, without blocking.
    ///
    /// Returns how many ticks moved the count.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while self.take_ready_tick() {
            if matches!(self.advance(), TickOutcome::Advanced | TickOutcome::Completed) {
                applied += 1;
            }
        }
        applied
    }

    /// Block up to `timeout` for the next timer tick and apply it.
    ///
    /// Returns `None` if no tick arrived (or there is no running timer).
    pub fn wait_tick(&mut self, timeout: Duration) -> Option<TickOutcome> {
        let timer = self.session.as_ref()?.timer.as_ref()?;
        timer.receiver().recv_timeout(timeout).ok()?;
        Some(self.advance())
    }

    /// Apply timer ticks until the session completes or `timeout` passes.
    ///
    /// Returns whether the session is complete.
    pub fn run_until_complete(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.is_complete() {
            let now = Instant::now();
            if now >= deadline || !self.has_timer() {
                break;
            }
            self.wait_tick(deadline - now);
        }
        self.is_complete()
    }

    fn take_ready_tick(&self) -> bool {
        self.session
            .as_ref()
            .and_then(|s| s.timer.as_ref())
            .is_some_and(|timer| timer.receiver().try_recv().is_ok())
    }

    fn has_timer(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.timer.is_some())
    }

    /// Characters revealed in the current session.
    pub fn revealed(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.revealed)
    }

    /// Total characters in the current session's tree.
    pub fn total(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.total)
    }

    /// Check if the current session has fully revealed its tree.
    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.completed)
    }

    /// The tree of the current session.
    pub fn session(&self) -> Option<&Arc<ContentNode<M>>> {
        self.session.as_ref().map(|s| &s.key)
    }
}
