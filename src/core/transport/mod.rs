//! Transport layer for the MCP server.
//!
//! The server communicates over STDIO, the standard MCP transport. The
//! transport handles the connection lifecycle and delegates message
//! processing to the server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
