//! Fuzz target: `Console::handle_line`
//!
//! Drives arbitrary text into the JSON-RPC console in front of a live
//! traffic-light tool table and asserts that it never panics, that every
//! reply is itself valid JSON, and that the pins still mirror the state.
//!
//! cargo fuzz run fuzz_console_line

#![no_main]

use libfuzzer_sys::fuzz_target;
use traffic_light::drivers::hw_init::HwInitError;
use traffic_light::light::{self, Color, Level, OutputPort, logical_to_electrical};
use traffic_light::rpc::{Console, ToolTable};

#[derive(Default)]
struct Pin(Option<Level>);

impl OutputPort for Pin {
    fn configure(&mut self) -> Result<(), HwInitError> {
        Ok(())
    }

    fn set_level(&mut self, level: Level) {
        self.0 = Some(level);
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let mut tools = ToolTable::new();
    let shared = light::install(Pin::default(), Pin::default(), Pin::default(), &mut tools)
        .expect("fake pins always configure");
    let console = Console::new(tools);

    for line in text.lines() {
        if let Some(reply) = console.handle_line(line) {
            assert!(
                serde_json::from_str::<serde_json::Value>(&reply).is_ok(),
                "console produced invalid JSON"
            );
        }
    }

    let guard = light::controller::lock(&shared);
    for color in Color::ALL {
        assert_eq!(guard.pin(color).0, Some(logical_to_electrical(guard.is_on(color))));
    }
});
