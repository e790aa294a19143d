//! Traffic-light indicator core.
//!
//! Maps the five remote tools onto three active-low GPIO outputs and keeps
//! an in-memory mirror of what each LED is showing.
//!
//! ```text
//!   ToolRegistry ──▶ tools::{GetState, SetColor, TurnAllOff}
//!                              │
//!                              ▼
//!                 TrafficLightController ──▶ OutputPort ×3
//!                 (logical state mirror)     (electrical level)
//! ```
//!
//! The pins are write-only from here: state queries are answered from the
//! mirror, never by reading the hardware back.

pub mod controller;
pub mod tools;

use serde::{Deserialize, Serialize};

use crate::drivers::hw_init::HwInitError;

pub use controller::{SharedLight, TrafficLightController};
pub use tools::{install, register_tools};

// ───────────────────────────────────────────────────────────────
// Colours
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    /// Every colour, in the order outputs are configured and switched off.
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Green];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ───────────────────────────────────────────────────────────────
// Electrical level
// ───────────────────────────────────────────────────────────────

/// Level driven onto an LED pin.  The LEDs sink into the GPIO, so the
/// active (lit) level is LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Level {
    Active = 0,
    Inactive = 1,
}

impl Level {
    /// Value handed to `gpio_set_level`.
    pub const fn raw(self) -> u32 {
        self as u32
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::Inactive)
    }
}

/// The one place polarity is decided.
pub const fn logical_to_electrical(on: bool) -> Level {
    if on { Level::Active } else { Level::Inactive }
}

// ───────────────────────────────────────────────────────────────
// Snapshot returned by `get_state`
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl LightState {
    pub const fn get(&self, color: Color) -> bool {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    pub fn set(&mut self, color: Color, on: bool) {
        match color {
            Color::Red => self.red = on,
            Color::Yellow => self.yellow = on,
            Color::Green => self.green = on,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: controller → GPIO)
// ───────────────────────────────────────────────────────────────

/// A single digital output the controller owns for its whole lifetime.
///
/// Implemented by [`GpioOutput`](crate::adapters::gpio::GpioOutput) on the
/// device, [`HalOutput`](crate::adapters::hal_pin::HalOutput) for any
/// `embedded-hal` pin, and by recording fakes in tests.
pub trait OutputPort {
    /// Put the pin in output mode (pulls and interrupts disabled).
    fn configure(&mut self) -> Result<(), HwInitError>;

    /// Drive the pin.  Assumed to succeed once configured.
    fn set_level(&mut self, level: Level);
}
