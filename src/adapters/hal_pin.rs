//! `embedded-hal` output pins behind [`OutputPort`].
//!
//! For boards where the pin is already owned by a HAL driver (for example an
//! `esp-idf-hal` `PinDriver` in output mode).  The HAL has done the mode
//! setup by the time the pin reaches us, so `configure` is a no-op.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::drivers::hw_init::HwInitError;
use crate::light::{Level, OutputPort};

pub struct HalOutput<P> {
    pin: P,
}

impl<P: OutputPin> HalOutput<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }

    pub const fn inner(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> OutputPort for HalOutput<P> {
    fn configure(&mut self) -> Result<(), HwInitError> {
        Ok(())
    }

    fn set_level(&mut self, level: Level) {
        let res = match level {
            Level::Active => self.pin.set_low(),
            Level::Inactive => self.pin.set_high(),
        };
        if let Err(e) = res {
            warn!("hal pin: write {:?} failed: {:?}", level, e);
        }
    }
}
