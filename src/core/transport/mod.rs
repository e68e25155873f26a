//! Transport layer for the server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: the tool endpoint served over HTTP - feature: `http`
//! - **STDIO**: MCP over standard input/output via rmcp - feature: `stdio`
//!
//! Both hosts share the server's dispatcher and registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
