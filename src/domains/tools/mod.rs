//! Tools domain module.
//!
//! Tools are the operations MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool listing and the dispatch boundary
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`, `call()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `tool_names()`, `get_all_tools()` and `call_tool()` in `registry.rs`

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
