//! GPIO pin assignments for the traffic-light indicator board.
//!
//! Single source of truth for the default wiring.  [`LightConfig`](crate::config::LightConfig)
//! starts from these values; a board variant overrides them through config
//! rather than by editing the drivers.
//!
//! All three LEDs are wired anode-to-3V3 through a resistor, so the GPIO
//! sinks current: LOW = lit, HIGH = dark.

// ---------------------------------------------------------------------------
// Indicator LEDs (active LOW)
// ---------------------------------------------------------------------------

pub const RED_GPIO: i32 = 10;
pub const YELLOW_GPIO: i32 = 11;
pub const GREEN_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Highest GPIO number on the ESP32-S3 (GPIO0 – GPIO48).
pub const MAX_GPIO: i32 = 48;
