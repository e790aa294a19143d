//! Integration tests: JSON-RPC lines → Console → traffic-light tools.

use serde_json::{Value, json};

use traffic_light::light::Level;
use traffic_light::rpc::Console;

use super::mock_hw::{MockBoard, RED};

fn console(board: &MockBoard) -> Console {
    let (tools, _) = board.install();
    Console::new(tools)
}

fn call(console: &Console, id: u32, name: &str, arguments: Value) -> Value {
    let line = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments },
    })
    .to_string();
    let reply = console.handle_line(&line).expect("request with id gets a reply");
    serde_json::from_str(&reply).unwrap()
}

fn text(reply: &Value) -> &str {
    reply["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn set_and_query_over_the_wire() {
    let board = MockBoard::new();
    let console = console(&board);

    let r = call(&console, 1, "self.traffic_light.set_red", json!({"state": true}));
    assert_eq!(r["id"], 1);
    assert_eq!(r["result"]["isError"], false);
    assert_eq!(text(&r), "true");
    assert_eq!(board.level(RED), Some(Level::Active));

    let r = call(&console, 2, "self.traffic_light.get_state", json!({}));
    let state: Value = serde_json::from_str(text(&r)).unwrap();
    assert_eq!(state, json!({"red": true, "yellow": false, "green": false}));
}

#[test]
fn wrong_argument_type_is_reported_as_tool_error() {
    let board = MockBoard::new();
    let console = console(&board);
    board.clear();

    let r = call(&console, 7, "self.traffic_light.set_green", json!({"state": 1}));
    assert_eq!(r["result"]["isError"], true);
    assert_eq!(text(&r), "invalid argument: state (expected boolean)");
    assert!(board.calls().is_empty());
}

#[test]
fn missing_argument_is_reported_as_tool_error() {
    let board = MockBoard::new();
    let console = console(&board);

    let r = call(&console, 8, "self.traffic_light.set_yellow", Value::Null);
    assert_eq!(r["result"]["isError"], true);
    assert_eq!(text(&r), "missing argument: state");
}

#[test]
fn tools_list_names_all_five() {
    let board = MockBoard::new();
    let console = console(&board);

    let reply = console
        .handle_line(r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#)
        .unwrap();
    let r: Value = serde_json::from_str(&reply).unwrap();
    let names: Vec<&str> = r["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "self.traffic_light.get_state",
            "self.traffic_light.set_red",
            "self.traffic_light.set_yellow",
            "self.traffic_light.set_green",
            "self.traffic_light.turn_all_off",
        ]
    );
}

#[test]
fn notification_still_executes_but_gets_no_reply() {
    let board = MockBoard::new();
    let console = console(&board);

    let reply = console.handle_line(
        r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"self.traffic_light.set_red","arguments":{"state":true}}}"#,
    );
    assert!(reply.is_none());
    assert_eq!(board.level(RED), Some(Level::Active));
}
