//! HTTP command protocol
//!
//! Decodes a request path and its query parameters into a store command,
//! and renders the outcome as a reply the server turns into an HTTP
//! response.

pub mod command;
pub mod delete;
pub mod get;
pub mod put;
pub mod reply;

pub use command::Command;
pub use reply::Reply;
