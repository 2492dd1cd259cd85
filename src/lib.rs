pub mod client;
pub mod config;
pub mod mcp;
pub mod models;
