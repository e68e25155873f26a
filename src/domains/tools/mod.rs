//! Tools domain module.
//!
//! Tools are named, schema-described functions that clients enumerate with
//! `tools/list` and invoke with `tools/call`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `descriptor.rs` - Tool metadata, argument schema and handler
//! - `registry.rs` - Static name -> descriptor table built at startup
//! - `dispatcher.rs` - Request routing and the error envelope
//! - `protocol.rs` - Transport-agnostic request/response types
//! - `router.rs` - rmcp ToolRouter builder for the stdio transport
//! - `error.rs` - Tool and dispatch error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolHandler` and a `descriptor()` constructor
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::with_defaults()`

pub mod definitions;
mod descriptor;
mod dispatcher;
mod error;
mod handlers;
pub mod protocol;
mod registry;
pub mod router;

pub use descriptor::{ParamSpec, ToolAnnotations, ToolDescriptor};
pub use dispatcher::ToolDispatcher;
pub use error::{DispatchError, FALLBACK_MESSAGE, ToolError};
pub use handlers::ToolHandler;
pub use protocol::{Envelope, IncomingRequest, OutgoingResponse, ToolListing};
pub use registry::{ToolRegistry, ToolRegistryBuilder};
pub use router::build_tool_router;
