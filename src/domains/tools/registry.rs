//! Tool Registry - the static table of available tools.
//!
//! The registry is built once at startup and is read-only afterwards.
//! Iteration follows registration order; names are unique.

use std::collections::HashMap;

use tracing::{debug, info};

use super::definitions::GreetTool;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Immutable name -> descriptor table.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Start building a registry.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// A registry with no tools.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry holding every built-in tool definition.
    ///
    /// This is the central place where tools are registered.
    /// When adding a new tool, add it here.
    pub fn with_defaults() -> Result<Self, ToolError> {
        Self::builder().register(GreetTool::descriptor()).build()
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// Tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Collects descriptors, rejecting duplicate names on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistryBuilder {
    /// Queue a descriptor for registration.
    pub fn register(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> Result<ToolRegistry, ToolError> {
        let mut index = HashMap::with_capacity(self.tools.len());
        for (i, tool) in self.tools.iter().enumerate() {
            if index.insert(tool.name.clone(), i).is_some() {
                return Err(ToolError::already_registered(&tool.name));
            }
            debug!("Registered tool: {}", tool.name);
        }
        info!("Tool registry built with {} tool(s)", self.tools.len());

        Ok(ToolRegistry {
            tools: self.tools,
            index,
        })
    }
}
