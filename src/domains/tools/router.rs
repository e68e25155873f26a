//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the stdio transport. Every registered descriptor becomes one route
//! whose calls go through the same [`ToolDispatcher`] as the HTTP endpoint.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, Tool, ToolAnnotations as McpToolAnnotations},
};
use serde_json::Value;

use super::descriptor::ToolDescriptor;
use super::dispatcher::ToolDispatcher;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(dispatcher: ToolDispatcher) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    dispatcher
        .registry()
        .iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(dispatcher.clone(), tool))
        })
}

/// The rmcp `Tool` model for a descriptor.
pub fn to_tool(descriptor: &ToolDescriptor) -> Tool {
    let hints = &descriptor.annotations;
    Tool {
        name: descriptor.name.clone().into(),
        title: Some(hints.title.clone()),
        description: Some(descriptor.description.clone().into()),
        input_schema: Arc::new(descriptor.input_schema().to_json_object()),
        output_schema: None,
        annotations: Some(
            McpToolAnnotations::with_title(hints.title.clone())
                .read_only(hints.read_only_hint)
                .destructive(hints.destructive_hint)
                .idempotent(hints.idempotent_hint),
        ),
        icons: None,
        meta: None,
    }
}

fn create_route<S>(dispatcher: ToolDispatcher, descriptor: &ToolDescriptor) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name.clone();
    ToolRoute::new_dyn(to_tool(descriptor), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone().map(Value::Object);
        let dispatcher = dispatcher.clone();
        let name = name.clone();
        async move {
            let result = match dispatcher.call_tool(Some(&name), arguments).await {
                Ok(value) => CallToolResult::success(vec![Content::text(render_result(&value))]),
                Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
            };
            Ok::<_, McpError>(result)
        }
        .boxed()
    })
}

/// Text content for a tool result: strings verbatim, anything else as JSON.
fn render_result(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolRegistry;
    use serde_json::json;

    struct TestServer {}

    fn test_dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(ToolRegistry::with_defaults().unwrap()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "greet");
    }

    #[test]
    fn test_registry_matches_router() {
        let dispatcher = test_dispatcher();
        let registry_names = dispatcher.registry().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(dispatcher.clone());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_to_tool_carries_annotations_and_schema() {
        let registry = ToolRegistry::with_defaults().unwrap();
        let tool = to_tool(registry.get("greet").unwrap());

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.title.as_deref(), Some("Greet the user"));
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
        assert_eq!(annotations.idempotent_hint, Some(true));

        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        assert_eq!(tool.input_schema.get("required"), Some(&json!(["name"])));
    }

    #[test]
    fn test_render_result() {
        assert_eq!(render_result(&json!("Hello, Ada")), "Hello, Ada");
        assert_eq!(render_result(&json!({ "a": 1 })), r#"{"a":1}"#);
        assert_eq!(render_result(&json!(null)), "null");
    }
}
