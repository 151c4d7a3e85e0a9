// MCP (Model Context Protocol) server exposing the e-Stat API as tools

pub mod codec;
pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{ConfigOverrides, McpConfig};
pub use server::McpServer;
