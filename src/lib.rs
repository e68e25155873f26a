//! MCP Tool Adapter
//!
//! A small server exposing a static set of named tools through `tools/list`
//! and `tools/call`, with a fixed JSON error envelope.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server and its transports
//! - **domains::tools**: tool descriptors, the registry, the dispatcher and
//!   the built-in tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mcp_tool_adapter::domains::tools::{IncomingRequest, ToolDispatcher, ToolRegistry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = ToolDispatcher::new(Arc::new(ToolRegistry::with_defaults()?));
//!     let response = dispatcher
//!         .route(IncomingRequest::post(
//!             r#"{"method":"tools/call","params":{"name":"greet","arguments":{"name":"Ada"}}}"#,
//!         ))
//!         .await;
//!     println!("{} {}", response.status, serde_json::to_string(&response.payload)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
