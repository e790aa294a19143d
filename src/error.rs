//! Unified error type for the indicator firmware.
//!
//! A single `Error` enum that every subsystem converts into, so bring-up in
//! `main` can propagate with `?` and report one diagnostic.  All variants
//! are `Copy`.

use core::fmt;

use crate::config::ConfigError;
use crate::drivers::hw_init::HwInitError;
use crate::rpc::ToolError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An output pin could not be configured.
    Init(HwInitError),
    /// Tool registration or invocation failed.
    Tool(ToolError),
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Tool(e) => write!(f, "tool: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<ToolError> for Error {
    fn from(e: ToolError) -> Self {
        Self::Tool(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
