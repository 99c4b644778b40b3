//! Client configuration.

use crate::core::domain::error::ValidationError;
use std::time::Duration;

/// Client-side rate limiting applied before every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_second == 0 {
            return Err(ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate must be greater than 0".to_string(),
            });
        }
        if self.burst_size == 0 {
            return Err(ValidationError::Field {
                field: "burst_size".to_string(),
                message: "Burst size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Tunables of the console HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Disabled when `None`.
    pub rate_limit: Option<RateLimitConfig>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout.is_zero() {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout must be greater than 0".to_string(),
            });
        }
        match &self.rate_limit {
            Some(rate_limit) => rate_limit.validate(),
            None => Ok(()),
        }
    }
}
