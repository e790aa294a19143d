//! Logical-state mirror over three active-low LED outputs.
//!
//! Every mutation updates the in-memory [`LightState`] first and then
//! drives the matching pin through [`logical_to_electrical`], so outside a
//! single `set` call the pin level is always the inverse of the state bit.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::drivers::hw_init::HwInitError;

use super::{Color, Level, LightState, OutputPort, logical_to_electrical};

/// Handle shared by the registered tool handlers.
pub type SharedLight<P> = Arc<Mutex<TrafficLightController<P>>>;

/// Lock a shared controller.
///
/// A handler that panicked mid-call leaves at most one colour with its
/// state bit written and its pin not yet driven; the next `set` or
/// `all_off` on that colour repairs it, so poisoning is not fatal here.
pub fn lock<P>(light: &SharedLight<P>) -> MutexGuard<'_, TrafficLightController<P>> {
    light.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct TrafficLightController<P> {
    red: P,
    yellow: P,
    green: P,
    state: LightState,
}

impl<P: OutputPort> TrafficLightController<P> {
    /// Take ownership of the three outputs, configure them and switch every
    /// LED off.  Outputs are brought up red, yellow, green; the first
    /// configuration failure aborts construction.
    pub fn new(red: P, yellow: P, green: P) -> Result<Self, HwInitError> {
        let mut this = Self {
            red,
            yellow,
            green,
            state: LightState::default(),
        };
        for color in Color::ALL {
            let pin = this.pin_mut(color);
            pin.configure()?;
            pin.set_level(Level::Inactive);
        }
        info!("traffic light: outputs configured, all LEDs off");
        Ok(this)
    }

    /// Current logical state of all three LEDs.
    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn is_on(&self, color: Color) -> bool {
        self.state.get(color)
    }

    /// Switch one LED.  Re-applying the current state re-drives the same
    /// level and is otherwise a no-op.
    pub fn set(&mut self, color: Color, on: bool) {
        self.state.set(color, on);
        let level = logical_to_electrical(on);
        self.pin_mut(color).set_level(level);
        debug!("traffic light: {} -> {} ({:?})", color, on, level);
    }

    /// Switch every LED off, red then yellow then green.
    pub fn all_off(&mut self) {
        self.state = LightState::default();
        for color in Color::ALL {
            self.pin_mut(color).set_level(Level::Inactive);
        }
        debug!("traffic light: all off");
    }

    pub fn pin(&self, color: Color) -> &P {
        match color {
            Color::Red => &self.red,
            Color::Yellow => &self.yellow,
            Color::Green => &self.green,
        }
    }

    fn pin_mut(&mut self, color: Color) -> &mut P {
        match color {
            Color::Red => &mut self.red,
            Color::Yellow => &mut self.yellow,
            Color::Green => &mut self.green,
        }
    }

    /// Wrap in the shared handle the tool handlers hold.
    pub fn into_shared(self) -> SharedLight<P> {
        Arc::new(Mutex::new(self))
    }
}
