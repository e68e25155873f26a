//! Tool Dispatcher - turns one incoming request into one response.
//!
//! `GET` and `tools/list` enumerate the registry; `tools/call` looks the tool
//! up and awaits its handler. Every failure ends in the fixed error envelope;
//! nothing a handler does escapes [`ToolDispatcher::route`].

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use http::Method;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::error::{DispatchError, ToolError};
use super::protocol::{
    IncomingRequest, OutgoingResponse, RequestBody, TOOLS_CALL, TOOLS_LIST, ToolListing,
};
use super::registry::ToolRegistry;

/// Stateless dispatcher over a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<ToolListing> {
        self.registry.iter().map(|t| t.listing()).collect()
    }

    /// Invoke a tool by name.
    ///
    /// An absent or unknown name fails before any handler runs. A handler
    /// error or panic becomes [`DispatchError::Execution`].
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: Option<&str>,
        arguments: Option<Value>,
    ) -> Result<Value, DispatchError> {
        let Some(tool) = name.and_then(|n| self.registry.get(n)) else {
            warn!("Unknown tool requested: {:?}", name);
            return Err(DispatchError::ToolNotFound);
        };

        info!("Calling tool: {}", tool.name);

        let outcome = AssertUnwindSafe(tool.handler.call(arguments))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(ToolError::internal("")));

        outcome.map_err(|e| {
            warn!("Tool {} failed: {}", tool.name, e);
            DispatchError::execution(&e)
        })
    }

    /// Top-level entry: map `(method, body)` to exactly one response.
    #[instrument(skip_all, fields(method = %req.method))]
    pub async fn route(&self, req: IncomingRequest) -> OutgoingResponse {
        match self.dispatch(req).await {
            Ok(resp) => resp,
            Err(e) => OutgoingResponse::error(&e),
        }
    }

    async fn dispatch(&self, req: IncomingRequest) -> Result<OutgoingResponse, DispatchError> {
        match req.method {
            Method::GET => Ok(OutgoingResponse::tools(self.list_tools())),
            Method::POST => {
                let raw = req.body.unwrap_or_default();
                let body = RequestBody::parse(&raw).inspect_err(|_| {
                    warn!("Rejected unparsable request body ({} bytes)", raw.len());
                })?;

                match body.method.as_deref() {
                    Some(TOOLS_LIST) => Ok(OutgoingResponse::tools(self.list_tools())),
                    Some(TOOLS_CALL) => {
                        let params = body.params.unwrap_or_default();
                        let result = self
                            .call_tool(params.name.as_deref(), params.arguments)
                            .await?;
                        Ok(OutgoingResponse::result(result))
                    }
                    other => {
                        warn!("Unknown method: {:?}", other);
                        Err(DispatchError::MethodNotFound)
                    }
                }
            }
            other => {
                warn!("Unsupported transport method: {}", other);
                Err(DispatchError::MethodNotFound)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
