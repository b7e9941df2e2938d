//! Tools domain module.
//!
//! Everything the MCP server exposes is a tool wrapping one LocaBriques REST
//! endpoint.
//!
//! - `definitions/` - tool implementations, one file per resource family
//! - `router.rs` - dynamic ToolRouter builder for the STDIO transport
//!
//! Adding a tool: create it in the matching `definitions/` family file (or a
//! new one), export it in `definitions/mod.rs`, and add a `with_route()` call
//! in `router.rs`. The server handler picks it up dynamically.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
