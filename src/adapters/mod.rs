//! Adapters — concrete implementations of the [`OutputPort`](crate::light::OutputPort) trait.
//!
//! | Adapter   | Implements  | Connects to                      |
//! |-----------|-------------|----------------------------------|
//! | `gpio`    | OutputPort  | ESP-IDF `gpio_config` / sys GPIO |
//! | `hal_pin` | OutputPort  | any `embedded-hal` `OutputPin`   |

pub mod gpio;
pub mod hal_pin;
