//! Timer: Dedicated thread that paces reveal ticks.
//!
//! The timer only *signals*. It sends a [`Tick`] over a small bounded
//! channel and never touches reveal state; the owning scheduler applies
//! each tick on its own thread, one at a time.
//!
//! Dropping a [`Timer`] stops and joins its thread, so a timer can never
//! outlive the session that started it.

use crate::error::{Result, RevealError};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Tick number within this timer (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the timer was started.
    pub elapsed: Duration,
}

/// Repeating timer backed by its own thread.
pub struct Timer {
    /// Handle to the timer thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl Timer {
    /// Spawn a timer that ticks every `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::Timer`] if the OS refuses to spawn the thread.
    pub fn spawn(interval: Duration) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer: a slow owner skips ticks instead of queueing them
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("reveal-timer".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .map_err(RevealError::Timer)?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the timer thread to stop.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    frame,
                    elapsed: now - start,
                };

                // Receiver gone means the owner was dropped mid-shutdown
                if let Err(crossbeam_channel::TrySendError::Disconnected(_)) = tick_tx.try_send(tick) {
                    break;
                }

                frame += 1;
                next_tick += interval;

                // Behind schedule: resync rather than burst
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                let sleep_duration = next_tick - now;
                thread::sleep(sleep_duration.min(Duration::from_millis(1)));
            }
        }
        tracing::trace!(frames = frame, "reveal timer stopped");
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_ticks_in_order() {
        let timer = Timer::spawn(Duration::from_millis(5)).unwrap();

        let first = timer.receiver().recv_timeout(Duration::from_millis(200));
        assert_eq!(first.unwrap().frame, 0);

        let second = timer.receiver().recv_timeout(Duration::from_millis(200));
        assert!(second.unwrap().frame >= 1);
    }

    #[test]
    fn test_timer_drop_joins_thread() {
        let timer = Timer::spawn(Duration::from_millis(1)).unwrap();
        let rx = timer.receiver().clone();
        drop(timer);

        // Drain whatever was buffered, then the channel must be closed
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert!(rx.is_empty());
    }

    #[test]
    fn test_timer_shutdown_ends_thread() {
        let timer = Timer::spawn(Duration::from_millis(1)).unwrap();
        let rx = timer.receiver().clone();
        timer.shutdown();

        // The thread exits on its own and closes the channel
        loop {
            match rx.recv_timeout(Duration::from_secs(1)) {
                Ok(_) => {}
                Err(err) => {
                    assert!(matches!(err, crossbeam_channel::RecvTimeoutError::Disconnected));
                    break;
                }
            }
        }
        drop(timer);
    }
}
