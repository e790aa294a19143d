//! Remote tool dispatch.
//!
//! Components register named tools with a [`ToolRegistry`]; a transport
//! feeds requests through the [`Console`], which looks the tool up, binds
//! its arguments and runs the handler.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  UART line ──▶ Console ──▶ ToolTable ──▶ ToolHandler      │
//! │   (JSON-RPC)   (method)    (lookup +     (component code) │
//! │                             bind args)                    │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod console;
pub mod property;
pub mod registry;
pub mod tool;

pub use console::Console;
pub use property::{Property, PropertyList, PropertyType, PropertyValue};
pub use registry::{MAX_TOOL_NAME_LEN, MAX_TOOLS, ToolRegistry, ToolTable};
pub use tool::{ReturnValue, ToolError, ToolHandler};
