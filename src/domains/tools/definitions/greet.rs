//! Greet tool definition.
//!
//! A read-only tool that greets the user by name.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::descriptor::{ParamSpec, ToolAnnotations, ToolDescriptor};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the greet tool.
#[derive(Debug, Clone)]
pub struct GreetParams {
    /// The name of the user to greet.
    pub name: String,
}

impl GreetParams {
    /// Extract parameters from raw call arguments.
    ///
    /// Only presence and type of `name` are checked.
    pub fn from_arguments(arguments: Option<&Value>) -> Result<Self, ToolError> {
        let name = arguments
            .and_then(|args| args.get("name"))
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::invalid_arguments("Missing required argument: name"))?;

        Ok(Self {
            name: name.to_string(),
        })
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Greet tool - returns a greeting for the given name.
pub struct GreetTool;

impl GreetTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "greet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Greet the user";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub fn execute(params: &GreetParams) -> String {
        info!("Greet tool called");
        format!("Hello, {}", params.name)
    }

    /// The registry entry for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, GreetTool)
            .with_annotations(ToolAnnotations {
                title: "Greet the user".to_string(),
                read_only_hint: true,
                destructive_hint: false,
                idempotent_hint: true,
            })
            .with_param(ParamSpec::new(
                "name",
                "string",
                "The name of the user to greet",
            ))
    }
}

#[async_trait]
impl ToolHandler for GreetTool {
    async fn call(&self, arguments: Option<Value>) -> Result<Value, ToolError> {
        let params = GreetParams::from_arguments(arguments.as_ref())?;
        Ok(Value::String(Self::execute(&params)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_greet_execute() {
        let params = GreetParams {
            name: "Ada".to_string(),
        };
        assert_eq!(GreetTool::execute(&params), "Hello, Ada");
    }

    #[test]
    fn test_greet_descriptor() {
        let tool = GreetTool::descriptor();
        assert_eq!(tool.name, "greet");
        assert!(tool.annotations.read_only_hint);
        assert!(tool.annotations.idempotent_hint);
        assert!(!tool.annotations.destructive_hint);
        assert_eq!(tool.input_schema().required, vec!["name"]);
    }

    #[tokio::test]
    async fn test_greet_handler() {
        let out = GreetTool.call(Some(json!({ "name": "Grace" }))).await;
        tokio_test::assert_ok!(&out);
        assert_eq!(out.unwrap(), json!("Hello, Grace"));
    }

    #[tokio::test]
    async fn test_greet_handler_missing_name() {
        for args in [None, Some(json!({})), Some(json!({ "name": 5 }))] {
            let out = GreetTool.call(args).await;
            tokio_test::assert_err!(&out);
            assert_eq!(
                out.unwrap_err().message(),
                Some("Missing required argument: name")
            );
        }
    }
}
