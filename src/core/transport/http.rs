//! HTTP transport implementation.
//!
//! Serves the tool endpoint over HTTP. Every method on the endpoint path is
//! handed to the dispatcher, which decides between listing, calling and the
//! `Method not found` envelope. `/health` and `/` are informational.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::Method,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use bytes::Bytes;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::IncomingRequest;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    endpoint_path: String,
}

impl AppState {
    pub fn new(server: McpServer, endpoint_path: impl Into<String>) -> Self {
        Self {
            server,
            endpoint_path: endpoint_path.into(),
        }
    }
}

/// Build the axum router for the given server and config.
///
/// The endpoint has no body size limit: every body reaches the dispatcher,
/// so oversized requests still get an envelope instead of a plain-text 413.
pub fn build_router(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState::new(server, config.endpoint_path.clone());

    let mut app = Router::new()
        .route(
            &config.endpoint_path,
            any(handle_endpoint).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(health_check));

    if config.endpoint_path != "/" {
        app = app.route("/", get(root_handler));
    }

    let mut app = app.with_state(state).layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tools:  GET|POST {}", self.config.endpoint_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "tools": &state.endpoint_path,
            "health": "/health"
        },
        "tools": state.server.dispatcher().registry().len(),
        "documentation": format!(
            "GET {0} to list tools, POST {0} with {{\"method\":\"tools/call\",...}} to call one",
            state.endpoint_path
        )
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Hand the raw method and body to the dispatcher.
async fn handle_endpoint(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    debug!("{} request with {} byte body", method, body.len());

    let request = IncomingRequest::new(method, (!body.is_empty()).then(|| body.to_vec()));
    let response = state.server.dispatcher().route(request).await;

    (response.status, Json(response.payload)).into_response()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::ToolRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let server =
            McpServer::with_registry(Config::default(), ToolRegistry::with_defaults().unwrap());
        build_router(server, &HttpConfig::default())
    }

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_lists_tools() {
        let (status, body) = send(test_app(), "GET", "/mcp", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tools"][0]["name"], "greet");
        assert_eq!(body["tools"][0]["inputSchema"]["required"], json!(["name"]));
    }

    #[tokio::test]
    async fn test_post_call_greet() {
        let body =
            r#"{"method":"tools/call","params":{"name":"greet","arguments":{"name":"Ada"}}}"#;
        let (status, body) = send(test_app(), "POST", "/mcp", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": "Hello, Ada" }));
    }

    #[tokio::test]
    async fn test_post_parse_error() {
        let (status, body) = send(test_app(), "POST", "/mcp", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": { "code": -32700, "message": "Parse error" } })
        );
    }

    #[tokio::test]
    async fn test_post_unknown_tool() {
        let body = r#"{"method":"tools/call","params":{"name":"nope"}}"#;
        let (status, body) = send(test_app(), "POST", "/mcp", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], -32601);
        assert_eq!(body["error"]["message"], "Tool not found");
    }

    #[tokio::test]
    async fn test_greet_missing_name_is_500() {
        let body = r#"{"method":"tools/call","params":{"name":"greet","arguments":{}}}"#;
        let (status, body) = send(test_app(), "POST", "/mcp", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "error": { "code": -32603, "message": "Missing required argument: name" }
            })
        );
    }

    #[tokio::test]
    async fn test_large_body_reaches_dispatcher() {
        let name = "a".repeat(3 * 1024 * 1024);
        let call = json!({
            "method": "tools/call",
            "params": { "name": "greet", "arguments": { "name": name } }
        })
        .to_string();
        let (status, body) = send(test_app(), "POST", "/mcp", &call).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": format!("Hello, {name}") }));

        let junk = "x".repeat(3 * 1024 * 1024);
        let (status, body) = send(test_app(), "POST", "/mcp", &junk).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": { "code": -32700, "message": "Parse error" } })
        );
    }

    #[tokio::test]
    async fn test_put_is_method_not_found() {
        let (status, body) = send(test_app(), "PUT", "/mcp", r#"{"method":"tools/list"}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Method not found");
    }

    #[tokio::test]
    async fn test_response_is_json() {
        let req = Request::builder()
            .method("GET")
            .uri("/mcp")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let (status, body) = send(test_app(), "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(test_app(), "GET", "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["endpoints"]["tools"], "/mcp");
        assert_eq!(body["tools"], 1);
    }

    #[tokio::test]
    async fn test_custom_endpoint_path() {
        let server =
            McpServer::with_registry(Config::default(), ToolRegistry::with_defaults().unwrap());
        let config = HttpConfig {
            endpoint_path: "/tools".to_string(),
            enable_cors: false,
            ..Default::default()
        };
        let (status, body) = send(build_router(server, &config), "GET", "/tools", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("tools").is_some());
    }
}
