//! Model Context Protocol (MCP) server
//!
//! - **server**: the [`AflServer`] handler holding the tool families
//! - **service**: Streamable HTTP service for mounting into axum
//! - **tools**: parameter types and per-family tool routers

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod service_test;

pub use server::AflServer;
pub use service::create_mcp_service;
