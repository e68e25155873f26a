//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes a `descriptor()`
//! constructor that `registry.rs` registers at startup.

pub mod greet;

pub use greet::{GreetParams, GreetTool};
