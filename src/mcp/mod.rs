//! MCP stdio server exposing the Pressroom tools.

pub mod bridge;
pub mod server;

pub use server::{PressroomServer, serve_stdio};
