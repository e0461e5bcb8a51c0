use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::timer::{TimerId, TimerQueue};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub type_step: Duration,
    pub delete_step: Duration,
    pub pause_after_typing: Duration,
    pub pause_after_deleting: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|s| s.to_string()).collect(),
            type_step: Duration::from_millis(TYPE_STEP_MS),
            delete_step: Duration::from_millis(DELETE_STEP_MS),
            pause_after_typing: Duration::from_millis(PAUSE_AFTER_TYPING_MS),
            pause_after_deleting: Duration::from_millis(PAUSE_AFTER_DELETING_MS),
        }
    }
}

impl TypewriterConfig {
    /// Every delay must be non-zero or a tick could never catch up.
    pub fn validate(&self) -> Result<()> {
        ConfigError::check_interval("type_step", self.type_step)?;
        ConfigError::check_interval("delete_step", self.delete_step)?;
        ConfigError::check_interval("pause_after_typing", self.pause_after_typing)?;
        ConfigError::check_interval("pause_after_deleting", self.pause_after_deleting)
    }
}

/// Types each role out a character at a time, holds it, deletes it, then
/// moves on to the next role forever.
#[derive(Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    timers: TimerQueue,
    pending: Option<TimerId>,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self> {
        config.validate()?;
        let mut timers = TimerQueue::new();
        let pending =
            (!config.roles.is_empty()).then(|| timers.set_timeout(config.pause_after_deleting));
        Ok(Self {
            config,
            timers,
            pending,
            role: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Currently visible prefix of the active role.
    pub fn text(&self) -> &str {
        let Some(role) = self.config.roles.get(self.role) else {
            return "";
        };
        match role.char_indices().nth(self.chars) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    /// Advance to `elapsed` since start. Returns whether the text changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        while let Some(id) = self.timers.pop_due(elapsed) {
            if Some(id) == self.pending {
                changed |= self.step();
            }
        }
        self.timers.settle(elapsed);
        changed
    }

    pub fn cancel(&mut self) {
        self.timers.clear_all();
        self.pending = None;
    }

    fn step(&mut self) -> bool {
        let len = self.config.roles[self.role].chars().count();
        let (changed, delay) = if !self.deleting {
            if self.chars < len {
                self.chars += 1;
                (true, self.config.type_step)
            } else {
                self.deleting = true;
                (false, self.config.pause_after_typing)
            }
        } else if self.chars > 0 {
            self.chars -= 1;
            (true, self.config.delete_step)
        } else {
            self.deleting = false;
            self.role = (self.role + 1) % self.config.roles.len();
            (false, self.config.pause_after_deleting)
        };
        self.pending = Some(self.timers.set_timeout(delay));
        changed
    }
}
