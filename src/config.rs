//! Indicator configuration
//!
//! Which GPIO drives which LED.  Defaults come from [`crate::pins`]; a board
//! variant can supply a JSON override at build or provisioning time.

use serde::{Deserialize, Serialize};

use crate::pins;

/// GPIO wiring for the three indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub red_gpio: i32,
    pub yellow_gpio: i32,
    pub green_gpio: i32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            red_gpio: pins::RED_GPIO,
            yellow_gpio: pins::YELLOW_GPIO,
            green_gpio: pins::GREEN_GPIO,
        }
    }
}

/// Errors from loading or validating a [`LightConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Malformed,
    /// A field failed range or consistency validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config document"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl LightConfig {
    /// Parse a JSON override.  Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject wiring the hardware cannot have.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |gpio: i32| (0..=pins::MAX_GPIO).contains(&gpio);
        if !in_range(self.red_gpio) {
            return Err(ConfigError::ValidationFailed("red_gpio out of range"));
        }
        if !in_range(self.yellow_gpio) {
            return Err(ConfigError::ValidationFailed("yellow_gpio out of range"));
        }
        if !in_range(self.green_gpio) {
            return Err(ConfigError::ValidationFailed("green_gpio out of range"));
        }
        if self.red_gpio == self.yellow_gpio
            || self.red_gpio == self.green_gpio
            || self.yellow_gpio == self.green_gpio
        {
            return Err(ConfigError::ValidationFailed("LED pins must be distinct"));
        }
        Ok(())
    }
}
