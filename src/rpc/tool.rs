//! Tool handler abstraction and its result/error types.

use serde_json::Value;

use super::{PropertyList, PropertyType};

/// What a tool hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Json(Value),
}

impl ReturnValue {
    /// Text form placed in the `content` block of a `tools/call` result.
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Text(s) => s.clone(),
            Self::Json(v) => v.to_string(),
        }
    }
}

impl From<bool> for ReturnValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Value> for ReturnValue {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

/// Errors from registering or calling tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    UnknownTool,
    /// A tool with this name is already registered.
    DuplicateTool,
    /// Name is empty, too long, or contains characters outside `[A-Za-z0-9._-]`.
    InvalidName,
    /// The fixed-capacity tool table is full.
    RegistryFull,
    /// `arguments` was neither an object nor null.
    InvalidArguments,
    /// A required argument was not supplied.
    MissingArgument(&'static str),
    /// An argument had the wrong JSON type.
    InvalidArgument {
        name: &'static str,
        expected: PropertyType,
    },
    /// An integer argument fell outside its declared range.
    OutOfRange(&'static str),
    /// A handler asked for a property its schema does not declare.
    UnknownProperty,
    /// The handler itself failed.
    Failed(&'static str),
}

impl core::fmt::Display for ToolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownTool => write!(f, "unknown tool"),
            Self::DuplicateTool => write!(f, "tool already registered"),
            Self::InvalidName => write!(f, "invalid tool name"),
            Self::RegistryFull => write!(f, "tool table full"),
            Self::InvalidArguments => write!(f, "arguments must be an object"),
            Self::MissingArgument(name) => write!(f, "missing argument: {}", name),
            Self::InvalidArgument { name, expected } => {
                write!(f, "invalid argument: {} (expected {})", name, expected)
            }
            Self::OutOfRange(name) => write!(f, "argument out of range: {}", name),
            Self::UnknownProperty => write!(f, "unknown property"),
            Self::Failed(msg) => write!(f, "tool failed: {}", msg),
        }
    }
}

/// A named remote operation.
///
/// Called synchronously by the dispatcher with arguments already bound to
/// the tool's [`PropertyList`].
pub trait ToolHandler: Send + Sync {
    fn call(&self, properties: &PropertyList) -> Result<ReturnValue, ToolError>;
}

/// Plain functions and closures are handlers too.
impl<F> ToolHandler for F
where
    F: Fn(&PropertyList) -> Result<ReturnValue, ToolError> + Send + Sync,
{
    fn call(&self, properties: &PropertyList) -> Result<ReturnValue, ToolError> {
        self(properties)
    }
}
