//! Tool descriptors: metadata, argument schema and handler for one tool.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::handlers::ToolHandler;
use super::protocol::{InputSchema, ToolListing};

/// Behavioural hints advertised alongside a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub title: String,
    pub read_only_hint: bool,
    pub destructive_hint: bool,
    pub idempotent_hint: bool,
}

/// Type and description of a single argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl ParamSpec {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// A registered tool.
///
/// Immutable once built; the registry hands out shared references only.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub annotations: ToolAnnotations,
    pub params: Vec<ParamSpec>,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Start a descriptor. Annotations default to a title equal to the
    /// description with every hint off.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        let description = description.into();
        Self {
            name: name.into(),
            annotations: ToolAnnotations {
                title: description.clone(),
                read_only_hint: false,
                destructive_hint: false,
                idempotent_hint: false,
            },
            description,
            params: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_annotations(mut self, annotations: ToolAnnotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Declare an argument.
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// The object schema built from the declared arguments.
    pub fn input_schema(&self) -> InputSchema {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({ "type": p.kind, "description": p.description }),
                )
            })
            .collect();
        InputSchema::object(properties)
    }

    /// The `tools/list` entry for this tool.
    pub fn listing(&self) -> ToolListing {
        ToolListing {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.input_schema(),
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("annotations", &self.annotations)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    fn echo(args: Option<Value>) -> impl Future<Output = Result<Value, ToolError>> + Send {
        async move { Ok(args.unwrap_or(Value::Null)) }
    }

    #[test]
    fn test_listing_schema() {
        let tool = ToolDescriptor::new("echo", "Echo arguments back", echo)
            .with_param(ParamSpec::new("text", "string", "Text to echo"))
            .with_param(ParamSpec::new("times", "number", "Repeat count"));

        let listing = serde_json::to_value(tool.listing()).unwrap();
        assert_eq!(listing["name"], "echo");
        assert_eq!(listing["inputSchema"]["type"], "object");
        assert_eq!(
            listing["inputSchema"]["properties"]["text"],
            json!({ "type": "string", "description": "Text to echo" })
        );

        let mut required: Vec<_> = tool.input_schema().required;
        required.sort();
        assert_eq!(required, vec!["text", "times"]);
    }

    #[test]
    fn test_schema_keeps_declaration_order() {
        let tool = ToolDescriptor::new("search", "Search things", echo)
            .with_param(ParamSpec::new("query", "string", "Search terms"))
            .with_param(ParamSpec::new("limit", "number", "Maximum results"))
            .with_param(ParamSpec::new("after", "string", "Cursor"));

        let schema = tool.input_schema();
        let keys: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(keys, vec!["query", "limit", "after"]);
        assert_eq!(schema.required, keys);

        let listing = serde_json::to_string(&tool.listing()).unwrap();
        let query = listing.find("\"query\"").unwrap();
        let limit = listing.find("\"limit\"").unwrap();
        let after = listing.find("\"after\"").unwrap();
        assert!(query < limit && limit < after);
    }

    #[test]
    fn test_default_annotations() {
        let tool = ToolDescriptor::new("echo", "Echo arguments back", echo);
        assert_eq!(tool.annotations.title, "Echo arguments back");
        assert!(!tool.annotations.read_only_hint);
        assert!(tool.params.is_empty());
        assert!(tool.input_schema().required.is_empty());
    }

    #[test]
    fn test_debug_omits_handler() {
        let tool = ToolDescriptor::new("echo", "Echo arguments back", echo);
        let debug = format!("{tool:?}");
        assert!(debug.contains("echo"));
        assert!(!debug.contains("handler"));
    }
}
