//! Wire types for the tool endpoint.
//!
//! A host transport converts whatever it receives into an [`IncomingRequest`]
//! and writes the returned [`OutgoingResponse`] back to its caller. The JSON
//! payload is always an [`Envelope`] holding exactly one of `tools`, `result`
//! or `error`.

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DispatchError;

/// Fixed protocol error codes.
pub mod error_codes {
    /// Body could not be parsed as JSON.
    pub const PARSE_ERROR: i32 = -32700;
    /// Unknown method or unknown tool.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Tool handler failed.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Protocol method listing the registered tools.
pub const TOOLS_LIST: &str = "tools/list";

/// Protocol method invoking a tool.
pub const TOOLS_CALL: &str = "tools/call";

/// A transport-agnostic request: the transport method plus the raw body.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub method: Method,
    pub body: Option<Vec<u8>>,
}

impl IncomingRequest {
    /// Create a request with the given method and optional body.
    pub fn new(method: Method, body: Option<Vec<u8>>) -> Self {
        Self { method, body }
    }

    /// A bodiless `GET`.
    pub fn get() -> Self {
        Self::new(Method::GET, None)
    }

    /// A `POST` with the given raw body.
    pub fn post(body: impl Into<Vec<u8>>) -> Self {
        Self::new(Method::POST, Some(body.into()))
    }
}

/// Status code plus the JSON envelope to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingResponse {
    pub status: StatusCode,
    pub payload: Envelope,
}

impl OutgoingResponse {
    /// `200` with the tool list.
    pub fn tools(tools: Vec<ToolListing>) -> Self {
        Self {
            status: StatusCode::OK,
            payload: Envelope::Tools { tools },
        }
    }

    /// `200` with a tool result.
    pub fn result(result: Value) -> Self {
        Self {
            status: StatusCode::OK,
            payload: Envelope::Result { result },
        }
    }

    /// The status and envelope matching a dispatch failure.
    pub fn error(err: &DispatchError) -> Self {
        Self {
            status: err.status(),
            payload: Envelope::Error {
                error: ErrorObject {
                    code: err.code(),
                    message: err.to_string(),
                },
            },
        }
    }
}

/// Response payload. Serializes as an object with a single key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Tools { tools: Vec<ToolListing> },
    Error { error: ErrorObject },
    Result { result: Value },
}

/// Error body inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// One entry of a `tools/list` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolListing {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// Object schema describing a tool's arguments.
///
/// Every property is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
}

impl InputSchema {
    /// Build an object schema whose `required` list is every property key.
    pub fn object(properties: Map<String, Value>) -> Self {
        let required = properties.keys().cloned().collect();
        Self {
            kind: "object".to_string(),
            properties,
            required,
        }
    }

    /// The schema as a plain JSON object.
    pub fn to_json_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        obj.insert("type".into(), Value::String(self.kind.clone()));
        obj.insert("properties".into(), Value::Object(self.properties.clone()));
        obj.insert(
            "required".into(),
            Value::Array(self.required.iter().cloned().map(Value::String).collect()),
        );
        obj
    }
}

/// Parsed request body.
///
/// Fields are kept loose so that a well-formed JSON body of the wrong shape is
/// still routed (and rejected) by method rather than failing to parse.
#[derive(Debug, Clone, Default)]
pub struct RequestBody {
    pub method: Option<String>,
    pub params: Option<CallParams>,
}

/// `params` of a `tools/call` body.
#[derive(Debug, Clone, Default)]
pub struct CallParams {
    pub name: Option<String>,
    pub arguments: Option<Value>,
}

impl RequestBody {
    /// Parse raw bytes as a request body.
    ///
    /// Fails only when the bytes are not JSON. Non-object bodies and missing
    /// or mistyped fields come back as `None`s.
    pub fn parse(raw: &[u8]) -> Result<Self, DispatchError> {
        let value: Value = serde_json::from_slice(raw).map_err(|_| DispatchError::Parse)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let method = value
            .get("method")
            .and_then(Value::as_str)
            .map(str::to_string);

        let params = value.get("params").map(|p| CallParams {
            name: p
                .get("name")
                .and_then(Value::as_str)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            arguments: p.get("arguments").filter(|a| !a.is_null()).cloned(),
        });

        Self { method, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_has_single_key() {
        let cases = [
            OutgoingResponse::tools(vec![]).payload,
            OutgoingResponse::result(json!(1)).payload,
            OutgoingResponse::error(&DispatchError::Parse).payload,
        ];
        for payload in cases {
            let value = serde_json::to_value(&payload).unwrap();
            assert_eq!(value.as_object().unwrap().len(), 1, "{value}");
        }
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp = OutgoingResponse::error(&DispatchError::ToolNotFound);
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(&resp.payload).unwrap(),
            json!({ "error": { "code": -32601, "message": "Tool not found" } })
        );
    }

    #[test]
    fn test_input_schema_requires_all_keys() {
        let mut props = Map::new();
        props.insert("b".into(), json!({ "type": "string" }));
        props.insert("a".into(), json!({ "type": "number" }));
        let schema = InputSchema::object(props);

        let keys: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(schema.required, keys);
        assert_eq!(
            serde_json::to_value(&schema).unwrap()["type"],
            json!("object")
        );
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        assert_eq!(RequestBody::parse(b"{not json").unwrap_err(), DispatchError::Parse);
        assert_eq!(RequestBody::parse(b"").unwrap_err(), DispatchError::Parse);
    }

    #[test]
    fn test_parse_body_loose_fields() {
        let body = RequestBody::parse(br#"{"method":"tools/call","params":{"name":7}}"#).unwrap();
        assert_eq!(body.method.as_deref(), Some(TOOLS_CALL));
        let params = body.params.unwrap();
        assert!(params.name.is_none());
        assert!(params.arguments.is_none());

        let body = RequestBody::parse(b"42").unwrap();
        assert!(body.method.is_none());
        assert!(body.params.is_none());
    }
}
