//! Raw GPIO output primitives.
//!
//! Configures push-pull outputs and writes their level using ESP-IDF sys
//! calls.  Everything above this module talks to pins through
//! [`OutputPort`](crate::light::OutputPort); this is the only place that
//! touches the GPIO matrix directly.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors while configuring an output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// The pin number does not exist on this chip.
    InvalidPin(i32),
    /// `gpio_config` returned a non-OK status.
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPin(pin)      => write!(f, "GPIO{} does not exist", pin),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

fn check_pin(pin: i32) -> Result<(), HwInitError> {
    if (0..=pins::MAX_GPIO).contains(&pin) {
        Ok(())
    } else {
        Err(HwInitError::InvalidPin(pin))
    }
}

// ── GPIO Outputs ──────────────────────────────────────────────

/// Configure `pin` as a plain digital output: no pull-up, no pull-down,
/// no interrupt.  Does not touch the output level.
#[cfg(target_os = "espidf")]
pub fn configure_output(pin: i32) -> Result<(), HwInitError> {
    check_pin(pin)?;
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: cfg is a fully initialised config for a pin validated above.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    log::info!("hw_init: GPIO{} configured as output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(pin: i32) -> Result<(), HwInitError> {
    check_pin(pin)?;
    log::info!("hw_init(sim): GPIO{} configured as output", pin);
    Ok(())
}

/// Drive `pin` to `level` (0 or 1).  The status code is not checked: the
/// only failure mode is an invalid pin, which `configure_output` already
/// rejected.
#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, level: u32) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    unsafe { gpio_set_level(pin, level); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, level: u32) {
    log::trace!("hw_init(sim): GPIO{} <- {}", pin, level);
}
