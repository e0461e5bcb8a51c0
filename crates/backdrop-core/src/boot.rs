//! Splash-screen boot sequence.
//!
//! `Booting → Complete → Finished`, or `Cancelled` from anywhere before
//! `Finished`. Three timers run while booting:
//!
//! - the line timer reveals the next boot message every `line_interval`,
//! - the progress timer adds a random step every `progress_interval` and
//!   clears itself at 100 %,
//! - the deadline fires at `max(lines × line_interval, min_duration) + settle`.
//!
//! The deadline does not wait for the progress counter: the two are only kept
//! roughly in step by their constants. Set
//! [`BootConfig::sync_progress_on_complete`] to snap the counter to 100 when
//! the deadline fires.

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::timer::{CompletionHook, TimerId, TimerQueue};
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct BootConfig {
    pub messages: Vec<String>,
    pub line_interval: Duration,
    pub progress_interval: Duration,
    /// Half-open range the per-tick progress increment is drawn from.
    pub progress_step: (u32, u32),
    pub min_duration: Duration,
    pub settle: Duration,
    /// Exit animation between `Complete` and the completion callback.
    pub exit_delay: Duration,
    pub sync_progress_on_complete: bool,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            messages: BOOT_MESSAGES.iter().map(|s| s.to_string()).collect(),
            line_interval: Duration::from_millis(BOOT_LINE_INTERVAL_MS),
            progress_interval: Duration::from_millis(BOOT_PROGRESS_INTERVAL_MS),
            progress_step: BOOT_PROGRESS_STEP,
            min_duration: Duration::from_millis(BOOT_MIN_DURATION_MS),
            settle: Duration::from_millis(BOOT_SETTLE_MS),
            exit_delay: Duration::from_millis(BOOT_EXIT_MS),
            sync_progress_on_complete: false,
        }
    }
}

impl BootConfig {
    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// When the `Booting → Complete` transition fires, measured from start.
    pub fn deadline(&self) -> Duration {
        let lines = u32::try_from(self.messages.len()).unwrap_or(u32::MAX);
        let reveal = self.line_interval.saturating_mul(lines);
        reveal.max(self.min_duration).saturating_add(self.settle)
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::check_interval("line_interval", self.line_interval)?;
        ConfigError::check_interval("progress_interval", self.progress_interval)?;
        let (min, max) = self.progress_step;
        if min >= max || min == 0 || max > 101 {
            return Err(ConfigError::BadProgressStep { min, max });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    /// Deadline reached; the exit animation is playing.
    Complete,
    /// Completion callback has run; the host should unmount the splash.
    Finished,
    /// Torn down before finishing. No timer fires and the callback never runs.
    Cancelled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootState {
    pub revealed_lines: Vec<String>,
    pub progress_percent: u32,
    pub is_complete: bool,
}

#[derive(Debug)]
pub struct BootSequencer<R: Rng> {
    config: BootConfig,
    state: BootState,
    phase: BootPhase,
    timers: TimerQueue,
    line_timer: Option<TimerId>,
    progress_timer: Option<TimerId>,
    deadline_timer: Option<TimerId>,
    exit_timer: Option<TimerId>,
    on_complete: CompletionHook,
    rng: R,
}

impl<R: Rng> BootSequencer<R> {
    /// Enter `Booting` at elapsed time zero and arm the timers.
    pub fn new(config: BootConfig, rng: R, on_complete: CompletionHook) -> Result<Self> {
        config.validate()?;
        let mut timers = TimerQueue::new();
        let line_timer =
            (!config.messages.is_empty()).then(|| timers.set_interval(config.line_interval));
        let progress_timer = Some(timers.set_interval(config.progress_interval));
        let deadline_timer = Some(timers.set_timeout(config.deadline()));
        log::debug!(
            "[boot] {} lines, deadline {} ms",
            config.messages.len(),
            config.deadline().as_millis()
        );
        Ok(Self {
            config,
            state: BootState::default(),
            phase: BootPhase::Booting,
            timers,
            line_timer,
            progress_timer,
            deadline_timer,
            exit_timer: None,
            on_complete,
            rng,
        })
    }

    pub fn state(&self) -> &BootState {
        &self.state
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    /// True once nothing can change any more (finished or cancelled).
    pub fn is_done(&self) -> bool {
        matches!(self.phase, BootPhase::Finished | BootPhase::Cancelled)
    }

    /// Advance to `elapsed` since start, firing every due timer in order.
    /// Returns whether the visible state changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        let mut changed = false;
        while let Some(id) = self.timers.pop_due(elapsed) {
            changed |= self.fire(id);
        }
        self.timers.settle(elapsed);
        changed
    }

    /// Tear down: clear every timer and drop the callback unrun. No-op once
    /// finished.
    pub fn cancel(&mut self) {
        if self.is_done() {
            return;
        }
        self.timers.clear_all();
        self.on_complete.disarm();
        self.phase = BootPhase::Cancelled;
        log::debug!("[boot] cancelled at {} ms", self.timers.now().as_millis());
    }

    fn fire(&mut self, id: TimerId) -> bool {
        if Some(id) == self.line_timer {
            self.reveal_line()
        } else if Some(id) == self.progress_timer {
            self.step_progress()
        } else if Some(id) == self.deadline_timer {
            self.complete();
            true
        } else if Some(id) == self.exit_timer {
            self.exit_timer = None;
            self.phase = BootPhase::Finished;
            self.on_complete.fire();
            log::info!("[boot] finished");
            false
        } else {
            false
        }
    }

    fn reveal_line(&mut self) -> bool {
        let next = self.state.revealed_lines.len();
        let Some(line) = self.config.messages.get(next) else {
            return false;
        };
        self.state.revealed_lines.push(line.clone());
        if self.state.revealed_lines.len() == self.config.messages.len() {
            if let Some(t) = self.line_timer.take() {
                self.timers.clear(t);
            }
        }
        true
    }

    fn step_progress(&mut self) -> bool {
        let (min, max) = self.config.progress_step;
        let step = self.rng.gen_range(min..max);
        self.state.progress_percent = (self.state.progress_percent + step).min(100);
        if self.state.progress_percent >= 100 {
            if let Some(t) = self.progress_timer.take() {
                self.timers.clear(t);
            }
        }
        true
    }

    fn complete(&mut self) {
        self.timers.clear_all();
        self.line_timer = None;
        self.progress_timer = None;
        self.deadline_timer = None;
        self.state.is_complete = true;
        if self.config.sync_progress_on_complete {
            self.state.progress_percent = 100;
        }
        self.phase = BootPhase::Complete;
        self.exit_timer = Some(self.timers.set_timeout(self.config.exit_delay));
        log::info!(
            "[boot] complete at {} ms (progress {}%)",
            self.timers.now().as_millis(),
            self.state.progress_percent
        );
    }
}

impl<R: Rng> Drop for BootSequencer<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}
