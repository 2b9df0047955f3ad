//! YouTube Data API v3 client and MCP server.

pub mod client;
pub mod format;
pub mod resources;
pub mod state;
pub mod tools;
