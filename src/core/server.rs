//! Server implementation and lifecycle management.
//!
//! `McpServer` owns the configuration and the tool dispatcher. The HTTP host
//! calls the dispatcher directly; the stdio host goes through the rmcp
//! `ServerHandler` below, whose tool router is generated from the registry.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, ToolRegistry, build_tool_router};

/// The main server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the read-only tool registry.
    dispatcher: ToolDispatcher,

    /// Tool router for rmcp-based transports.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server exposing the built-in tools.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let registry = ToolRegistry::with_defaults()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server exposing the given registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        info!("Initializing server with tools: {:?}", registry.tool_names());

        let dispatcher = ToolDispatcher::new(Arc::new(registry));

        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The dispatcher shared by every transport.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "{} exposes {} tool(s). Use tools/list to discover them.",
                self.name(),
                self.dispatcher.registry().len()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
