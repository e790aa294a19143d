//! The five `self.traffic_light.*` tools.
//!
//! Each handler holds a clone of the [`SharedLight`] handle and nothing
//! else.  Argument checking is done by the registry before a handler runs.

use std::sync::Arc;

use log::info;

use crate::error::Error;
use crate::rpc::{Property, PropertyList, PropertyType, ReturnValue, ToolError, ToolHandler, ToolRegistry};

use super::controller::{SharedLight, TrafficLightController, lock};
use super::{Color, OutputPort};

pub const GET_STATE: &str = "self.traffic_light.get_state";
pub const SET_RED: &str = "self.traffic_light.set_red";
pub const SET_YELLOW: &str = "self.traffic_light.set_yellow";
pub const SET_GREEN: &str = "self.traffic_light.set_green";
pub const TURN_ALL_OFF: &str = "self.traffic_light.turn_all_off";

/// Argument carried by the three setters.
pub const STATE_ARG: &str = "state";

pub struct GetState<P> {
    light: SharedLight<P>,
}

impl<P: OutputPort + Send> ToolHandler for GetState<P> {
    fn call(&self, _properties: &PropertyList) -> Result<ReturnValue, ToolError> {
        let state = lock(&self.light).state();
        serde_json::to_value(state)
            .map(ReturnValue::Json)
            .map_err(|_| ToolError::Failed("state serialisation"))
    }
}

pub struct SetColor<P> {
    light: SharedLight<P>,
    color: Color,
}

impl<P: OutputPort + Send> ToolHandler for SetColor<P> {
    fn call(&self, properties: &PropertyList) -> Result<ReturnValue, ToolError> {
        let on = properties.get_bool(STATE_ARG)?;
        lock(&self.light).set(self.color, on);
        Ok(ReturnValue::Bool(true))
    }
}

pub struct TurnAllOff<P> {
    light: SharedLight<P>,
}

impl<P: OutputPort + Send> ToolHandler for TurnAllOff<P> {
    fn call(&self, _properties: &PropertyList) -> Result<ReturnValue, ToolError> {
        lock(&self.light).all_off();
        Ok(ReturnValue::Bool(true))
    }
}

fn setter_name(color: Color) -> &'static str {
    match color {
        Color::Red => SET_RED,
        Color::Yellow => SET_YELLOW,
        Color::Green => SET_GREEN,
    }
}

fn setter_description(color: Color) -> &'static str {
    match color {
        Color::Red => "Turn the red LED on or off",
        Color::Yellow => "Turn the yellow LED on or off",
        Color::Green => "Turn the green LED on or off",
    }
}

/// Register get_state, set_red, set_yellow, set_green and turn_all_off, in
/// that order.  Stops at the first registry error.
pub fn register_tools<R, P>(registry: &mut R, light: &SharedLight<P>) -> Result<(), ToolError>
where
    R: ToolRegistry + ?Sized,
    P: OutputPort + Send + 'static,
{
    registry.add_tool(
        GET_STATE,
        "Get the current state of all traffic light LEDs (red, yellow, green)",
        PropertyList::new(),
        Box::new(GetState {
            light: Arc::clone(light),
        }),
    )?;

    for color in Color::ALL {
        registry.add_tool(
            setter_name(color),
            setter_description(color),
            PropertyList::from([Property::new(STATE_ARG, PropertyType::Boolean)]),
            Box::new(SetColor {
                light: Arc::clone(light),
                color,
            }),
        )?;
    }

    registry.add_tool(
        TURN_ALL_OFF,
        "Turn off all traffic light LEDs",
        PropertyList::new(),
        Box::new(TurnAllOff {
            light: Arc::clone(light),
        }),
    )?;

    info!("traffic light: tools registered");
    Ok(())
}

/// Bring up the indicator: configure the outputs, switch everything off and
/// expose the tools.  Returns the shared handle for local callers.
pub fn install<R, P>(red: P, yellow: P, green: P, registry: &mut R) -> Result<SharedLight<P>, Error>
where
    R: ToolRegistry + ?Sized,
    P: OutputPort + Send + 'static,
{
    let light = TrafficLightController::new(red, yellow, green)?.into_shared();
    register_tools(registry, &light)?;
    Ok(light)
}
