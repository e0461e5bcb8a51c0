use std::time::Duration;

/// Result alias carrying [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Rejected configuration. Runtime inputs (pointer, scroll, surface size) never
/// produce errors; they are clamped or degrade to an empty frame instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("progress step range {min}..{max} is empty or exceeds 100")]
    BadProgressStep { min: u32, max: u32 },
    #[error("{field} must be a probability in [0, 1], got {value}")]
    BadProbability { field: &'static str, value: f64 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("unknown backdrop variant `{0}`")]
    UnknownVariant(String),
}

impl ConfigError {
    pub(crate) fn check(field: &'static str, value: f32) -> Result<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::NegativeOrNonFinite { field, value })
        }
    }

    pub(crate) fn check_interval(field: &'static str, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            Err(Self::ZeroInterval { field })
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_probability(field: &'static str, value: f64) -> Result<()> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(Self::BadProbability { field, value })
        }
    }
}
