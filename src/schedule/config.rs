//! Reveal pacing configuration.

use crate::error::{Result, RevealError};
use std::time::Duration;

/// How ticks are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// A dedicated timer thread paces ticks at the configured interval.
    #[default]
    Threaded,
    /// No timer; the caller drives every tick with `advance()`.
    Manual,
}

/// Configuration for the reveal scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Characters revealed per tick.
    pub step: usize,
    /// Time between ticks.
    pub interval: Duration,
    /// Tick source.
    pub mode: TimerMode,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step: 1,
            interval: Duration::from_millis(5),
            mode: TimerMode::Threaded,
        }
    }
}

impl RevealConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` or `interval` is zero.
    pub fn new(step: usize, interval: Duration) -> Result<Self> {
        let config = Self {
            step,
            interval,
            mode: TimerMode::Threaded,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the step size.
    #[must_use]
    pub const fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Switch to caller-driven ticks.
    #[must_use]
    pub const fn manual(mut self) -> Self {
        self.mode = TimerMode::Manual;
        self
    }

    /// Check that the configuration can make progress.
    ///
    /// # Errors
    ///
    /// [`RevealError::InvalidStep`] for a zero step and
    /// [`RevealError::InvalidInterval`] for a zero interval.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(RevealError::InvalidStep);
        }
        if self.interval.is_zero() {
            return Err(RevealError::InvalidInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.step, 1);
        assert_eq!(config.interval, Duration::from_millis(5));
        assert_eq!(config.mode, TimerMode::Threaded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_step_and_interval() {
        assert!(matches!(
            RevealConfig::new(0, Duration::from_millis(5)),
            Err(RevealError::InvalidStep)
        ));
        assert!(matches!(
            RevealConfig::new(1, Duration::ZERO),
            Err(RevealError::InvalidInterval)
        ));
    }

    #[test]
    fn test_builder() {
        let config = RevealConfig::default()
            .with_step(3)
            .with_interval(Duration::from_millis(20))
            .manual();
        assert_eq!(config.step, 3);
        assert_eq!(config.interval, Duration::from_millis(20));
        assert_eq!(config.mode, TimerMode::Manual);
    }
}
