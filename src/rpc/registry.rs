//! Named tool registration and lookup.

use log::{info, warn};
use serde_json::{Value, json};

use super::{PropertyList, ReturnValue, ToolError, ToolHandler};

/// Maximum number of tools one table holds.
pub const MAX_TOOLS: usize = 32;
/// Maximum tool name length in bytes.
pub const MAX_TOOL_NAME_LEN: usize = 64;

/// Anything a component can register its tools with.
pub trait ToolRegistry {
    fn add_tool(
        &mut self,
        name: &str,
        description: &'static str,
        properties: PropertyList,
        handler: Box<dyn ToolHandler>,
    ) -> Result<(), ToolError>;
}

struct ToolEntry {
    name: heapless::String<MAX_TOOL_NAME_LEN>,
    description: &'static str,
    properties: PropertyList,
    handler: Box<dyn ToolHandler>,
}

/// Fixed-capacity tool table.  Tools are listed in registration order.
#[derive(Default)]
pub struct ToolTable {
    tools: heapless::Vec<ToolEntry, MAX_TOOLS>,
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TOOL_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

impl ToolTable {
    pub fn new() -> Self {
        Self {
            tools: heapless::Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    fn find(&self, name: &str) -> Option<&ToolEntry> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Bind `args` to the tool's schema and invoke it.
    pub fn call(&self, name: &str, args: &Value) -> Result<ReturnValue, ToolError> {
        let Some(tool) = self.find(name) else {
            warn!("tools: call to unknown tool '{}'", name);
            return Err(ToolError::UnknownTool);
        };
        let bound = tool.properties.bind(args).inspect_err(|e| {
            warn!("tools: {} rejected: {}", name, e);
        })?;
        tool.handler.call(&bound)
    }

    /// `tools/list` payload.
    pub fn list(&self) -> Value {
        Value::Array(
            self.tools
                .iter()
                .map(|t| {
                    json!({
                        "name": t.name.as_str(),
                        "description": t.description,
                        "inputSchema": t.properties.schema_json(),
                    })
                })
                .collect(),
        )
    }
}

impl ToolRegistry for ToolTable {
    fn add_tool(
        &mut self,
        name: &str,
        description: &'static str,
        properties: PropertyList,
        handler: Box<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        if !valid_name(name) {
            return Err(ToolError::InvalidName);
        }
        if self.contains(name) {
            return Err(ToolError::DuplicateTool);
        }
        let mut owned = heapless::String::new();
        owned.push_str(name).map_err(|()| ToolError::InvalidName)?;
        self.tools
            .push(ToolEntry {
                name: owned,
                description,
                properties,
                handler,
            })
            .map_err(|_| ToolError::RegistryFull)?;
        info!("tools: registered {}", name);
        Ok(())
    }
}
