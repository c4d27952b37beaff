//! Model Context Protocol (MCP) server
//!
//! Exposes the Sitefinity tools over two transports:
//!
//! - **stdio**: for clients that spawn the binary
//! - **http**: Streamable HTTP at `/mcp`, one server instance per session

mod error;
pub mod http;
pub mod server;
mod service;
mod stdio;
pub mod tools;


pub use error::{TransportError, TransportResult};
pub use server::McpServer;
pub use service::create_mcp_service;
pub use stdio::run_stdio;
