//! Traffic-light indicator firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  UART (stdin/stdout) ──▶ Console ──▶ ToolTable           │
//! │                                         │                │
//! │                     self.traffic_light.* tools           │
//! │                                         │                │
//! │                       TrafficLightController             │
//! │                                         │                │
//! │                    GpioOutput ×3 (active LOW LEDs)       │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io::{BufRead, Write};

use anyhow::Result;
use log::info;

use traffic_light::adapters::gpio::GpioOutput;
use traffic_light::config::LightConfig;
use traffic_light::light;
use traffic_light::rpc::{Console, ToolTable};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("traffic-light v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Wiring (build-time override or board defaults) ─────
    let config = match option_env!("TRAFFIC_LIGHT_CONFIG") {
        Some(json) => LightConfig::from_json(json).map_err(traffic_light::Error::from)?,
        None => {
            let config = LightConfig::default();
            config.validate().map_err(traffic_light::Error::from)?;
            config
        }
    };
    info!(
        "LED wiring: red=GPIO{} yellow=GPIO{} green=GPIO{}",
        config.red_gpio, config.yellow_gpio, config.green_gpio
    );

    // ── 3. Bring up the indicator and its tools ───────────────
    // A pin that cannot be configured is a wiring bug: bail out.
    let mut tools = ToolTable::new();
    let _light = light::install(
        GpioOutput::new(config.red_gpio),
        GpioOutput::new(config.yellow_gpio),
        GpioOutput::new(config.green_gpio),
        &mut tools,
    )?;
    let console = Console::new(tools);
    info!("{} tools ready on console", console.tools().len());

    // ── 4. Serve requests, one JSON-RPC message per line ──────
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = console.handle_line(&line) {
            writeln!(stdout, "{response}")?;
            stdout.flush()?;
        }
    }

    info!("console closed");
    Ok(())
}
