//! Raw ESP-IDF GPIO behind [`OutputPort`].

use crate::drivers::hw_init::{self, HwInitError};
use crate::light::{Level, OutputPort};

/// One GPIO number, driven through `gpio_config` / `gpio_set_level`.
#[derive(Debug)]
pub struct GpioOutput {
    gpio: i32,
}

impl GpioOutput {
    pub const fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub const fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl OutputPort for GpioOutput {
    fn configure(&mut self) -> Result<(), HwInitError> {
        hw_init::configure_output(self.gpio)
    }

    fn set_level(&mut self, level: Level) {
        hw_init::gpio_write(self.gpio, level.raw());
    }
}
