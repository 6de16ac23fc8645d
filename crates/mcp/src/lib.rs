// MCP (Model Context Protocol) server exposing package search tools
// to assistant hosts over stdio

pub mod backend;
pub mod config;
pub mod dispatcher;
pub mod protocol;
pub mod server;
pub mod tools;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use dispatcher::Dispatcher;
pub use server::McpServer;
