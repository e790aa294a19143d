//! Fuzz target: `ToolTable::call` argument binding
//!
//! Parses the input as JSON and hands it as `arguments` to every
//! traffic-light tool.  A setter may only succeed when `state` is a JSON
//! boolean, and a rejected call must leave the state untouched.
//!
//! cargo fuzz run fuzz_tool_args

#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use traffic_light::drivers::hw_init::HwInitError;
use traffic_light::light::{self, Level, OutputPort};
use traffic_light::rpc::ToolTable;

struct Pin;

impl OutputPort for Pin {
    fn configure(&mut self) -> Result<(), HwInitError> {
        Ok(())
    }

    fn set_level(&mut self, _level: Level) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(args) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let mut tools = ToolTable::new();
    let shared = light::install(Pin, Pin, Pin, &mut tools).expect("fake pins always configure");
    let names: Vec<String> = tools.names().map(String::from).collect();

    for name in &names {
        let before = light::controller::lock(&shared).state();
        let result = tools.call(name, &args);
        let after = light::controller::lock(&shared).state();

        if name.ends_with("get_state") || name.ends_with("turn_all_off") {
            let well_formed = args.is_object() || args.is_null();
            assert_eq!(result.is_ok(), well_formed, "{name} argument check disagrees");
            continue;
        }
        let state_arg = args.get("state").and_then(Value::as_bool);
        match result {
            Ok(_) => assert!(state_arg.is_some(), "{name} accepted a non-boolean state"),
            Err(_) => assert_eq!(before, after, "{name} changed state on a rejected call"),
        }
    }
});
