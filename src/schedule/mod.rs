//! Scheduling: when the reveal budget grows.
//!
//! ```text
//! ┌──────────────┐   Tick (bounded)   ┌─────────────────┐  on_update()
//! │ Timer Thread │ ─────────────────▶ │ RevealScheduler │ ─────────────▶ observer
//! └──────────────┘                    │  (owner thread) │  on_complete()
//!                                     └─────────────────┘
//! ```
//!
//! The timer thread never touches reveal state. All mutation happens in
//! [`RevealScheduler::advance`] on the thread that owns the scheduler, so
//! ticks are strictly ordered and never reentrant.

mod config;
mod observer;
mod scheduler;
mod timer;

pub use config::{RevealConfig, TimerMode};
pub use observer::{on_events, FnObserver, NoopObserver, RevealObserver};
pub use scheduler::{RevealScheduler, TickOutcome};
pub use timer::{Tick, Timer};
