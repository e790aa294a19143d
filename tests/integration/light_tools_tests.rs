//! Integration tests: ToolTable → traffic-light tools → controller → pins.

use serde_json::{Value, json};

use traffic_light::Error;
use traffic_light::drivers::hw_init::HwInitError;
use traffic_light::light::tools::{GET_STATE, SET_GREEN, SET_RED, SET_YELLOW, TURN_ALL_OFF};
use traffic_light::light::{self, Color, Level, LightState};
use traffic_light::rpc::{ReturnValue, ToolError, ToolTable};

use super::mock_hw::{GREEN, MockBoard, PinCall, RED, YELLOW};

fn gpio(color: Color) -> i32 {
    match color {
        Color::Red => RED,
        Color::Yellow => YELLOW,
        Color::Green => GREEN,
    }
}

fn setter(color: Color) -> &'static str {
    match color {
        Color::Red => SET_RED,
        Color::Yellow => SET_YELLOW,
        Color::Green => SET_GREEN,
    }
}

fn get_state(tools: &ToolTable) -> Value {
    match tools.call(GET_STATE, &Value::Null) {
        Ok(ReturnValue::Json(v)) => v,
        other => panic!("unexpected get_state result: {:?}", other),
    }
}

fn set(tools: &ToolTable, color: Color, on: bool) -> Result<ReturnValue, ToolError> {
    tools.call(setter(color), &json!({ "state": on }))
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn fresh_controller_is_all_off() {
    let board = MockBoard::new();
    let (tools, _) = board.install();

    assert_eq!(
        get_state(&tools),
        json!({"red": false, "yellow": false, "green": false})
    );
    for color in Color::ALL {
        assert_eq!(board.level(gpio(color)), Some(Level::Inactive));
    }
}

#[test]
fn construction_configures_then_drives_off_in_colour_order() {
    let board = MockBoard::new();
    board.install();

    assert_eq!(
        board.calls(),
        [
            PinCall::Configure { gpio: RED },
            PinCall::SetLevel { gpio: RED, level: Level::Inactive },
            PinCall::Configure { gpio: YELLOW },
            PinCall::SetLevel { gpio: YELLOW, level: Level::Inactive },
            PinCall::Configure { gpio: GREEN },
            PinCall::SetLevel { gpio: GREEN, level: Level::Inactive },
        ]
    );
}

#[test]
fn configuration_failure_is_fatal_and_registers_nothing() {
    let board = MockBoard::new();
    let mut tools = ToolTable::new();

    let err = light::install(
        board.pin(RED),
        board.pin(YELLOW),
        board.broken_pin(GREEN),
        &mut tools,
    )
    .err()
    .unwrap();

    assert_eq!(err, Error::Init(HwInitError::GpioConfigFailed(0x103)));
    assert!(tools.is_empty());
}

// ── Setters ───────────────────────────────────────────────────

#[test]
fn each_setter_is_reflected_in_state() {
    for color in Color::ALL {
        for on in [true, false] {
            let board = MockBoard::new();
            let (tools, light) = board.install();

            assert_eq!(set(&tools, color, on), Ok(ReturnValue::Bool(true)));

            let mut expected = LightState::default();
            expected.set(color, on);
            assert_eq!(get_state(&tools), serde_json::to_value(expected).unwrap());
            assert_eq!(light::controller::lock(&light).state(), expected);
        }
    }
}

#[test]
fn setters_use_inverted_polarity() {
    let board = MockBoard::new();
    let (tools, _) = board.install();

    for color in Color::ALL {
        set(&tools, color, true).unwrap();
        assert_eq!(board.level(gpio(color)), Some(Level::Active));
        assert_eq!(Level::Active.raw(), 0);

        set(&tools, color, false).unwrap();
        assert_eq!(board.level(gpio(color)), Some(Level::Inactive));
        assert_eq!(Level::Inactive.raw(), 1);
    }
}

#[test]
fn repeating_a_set_changes_nothing_observable() {
    let board = MockBoard::new();
    let (tools, _) = board.install();

    set(&tools, Color::Yellow, true).unwrap();
    let state_once = get_state(&tools);
    let level_once = board.level(YELLOW);

    set(&tools, Color::Yellow, true).unwrap();
    assert_eq!(get_state(&tools), state_once);
    assert_eq!(board.level(YELLOW), level_once);
}

#[test]
fn setting_one_colour_never_touches_another() {
    let board = MockBoard::new();
    let (tools, _) = board.install();
    set(&tools, Color::Green, true).unwrap();
    board.clear();

    set(&tools, Color::Red, true).unwrap();
    set(&tools, Color::Red, false).unwrap();

    assert_eq!(board.writes_to(YELLOW), 0);
    assert_eq!(board.writes_to(GREEN), 0);
    assert_eq!(
        get_state(&tools),
        json!({"red": false, "yellow": false, "green": true})
    );
}

#[test]
fn no_exclusivity_between_colours() {
    let board = MockBoard::new();
    let (tools, _) = board.install();
    for color in Color::ALL {
        set(&tools, color, true).unwrap();
    }
    assert_eq!(
        get_state(&tools),
        json!({"red": true, "yellow": true, "green": true})
    );
}

#[test]
fn malformed_state_leaves_hardware_untouched() {
    let board = MockBoard::new();
    let (tools, _) = board.install();
    board.clear();

    assert!(tools.call(SET_RED, &json!({})).is_err());
    assert!(tools.call(SET_RED, &json!({"state": "true"})).is_err());
    assert!(tools.call(SET_RED, &json!(true)).is_err());

    assert!(board.calls().is_empty());
    assert_eq!(get_state(&tools)["red"], false);
}

// ── All off ───────────────────────────────────────────────────

#[test]
fn turn_all_off_resets_from_any_state() {
    let board = MockBoard::new();
    let (tools, _) = board.install();
    set(&tools, Color::Red, true).unwrap();
    set(&tools, Color::Yellow, true).unwrap();
    board.clear();

    assert_eq!(
        tools.call(TURN_ALL_OFF, &json!({})),
        Ok(ReturnValue::Bool(true))
    );

    assert_eq!(
        get_state(&tools),
        json!({"red": false, "yellow": false, "green": false})
    );
    assert_eq!(
        board.calls(),
        [
            PinCall::SetLevel { gpio: RED, level: Level::Inactive },
            PinCall::SetLevel { gpio: YELLOW, level: Level::Inactive },
            PinCall::SetLevel { gpio: GREEN, level: Level::Inactive },
        ]
    );
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn red_then_yellow_then_all_off() {
    let board = MockBoard::new();
    let (tools, _) = board.install();

    assert_eq!(set(&tools, Color::Red, true), Ok(ReturnValue::Bool(true)));
    assert_eq!(
        get_state(&tools),
        json!({"red": true, "yellow": false, "green": false})
    );

    assert_eq!(set(&tools, Color::Yellow, true), Ok(ReturnValue::Bool(true)));
    assert_eq!(
        get_state(&tools),
        json!({"red": true, "yellow": true, "green": false})
    );

    assert_eq!(
        tools.call(TURN_ALL_OFF, &Value::Null),
        Ok(ReturnValue::Bool(true))
    );
    assert_eq!(
        get_state(&tools),
        json!({"red": false, "yellow": false, "green": false})
    );
}

#[test]
fn tools_list_advertises_state_parameter() {
    let board = MockBoard::new();
    let (tools, _) = board.install();
    let list = tools.list();

    let setter_entry = list
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == SET_YELLOW)
        .unwrap();
    assert_eq!(setter_entry["description"], "Turn the yellow LED on or off");
    assert_eq!(
        setter_entry["inputSchema"]["properties"]["state"]["type"],
        "boolean"
    );
    assert_eq!(setter_entry["inputSchema"]["required"], json!(["state"]));

    let all_off = list
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == TURN_ALL_OFF)
        .unwrap();
    assert!(all_off["inputSchema"]["properties"].as_object().unwrap().is_empty());
}
