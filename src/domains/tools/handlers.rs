//! Tool handler contract.
//!
//! A handler receives the call's `arguments` (absent when the caller sent
//! none) and resolves to a JSON value or a [`ToolError`]. Plain async
//! closures implement the trait through the blanket impl below.

use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ToolError;

/// Executes one tool invocation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with the given arguments.
    async fn call(&self, arguments: Option<Value>) -> Result<Value, ToolError>;
}

#[async_trait]
impl<F, Fut> ToolHandler for F
where
    F: Fn(Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, ToolError>> + Send,
{
    async fn call(&self, arguments: Option<Value>) -> Result<Value, ToolError> {
        (self)(arguments).await
    }
}
