//! Code Review Backend Library
//!
//! Prompt construction, the generative-AI gateway and the proxy routes.
//! The server binary is in `src/main.rs`; the editor client links this
//! library for the shared request types and prompt builder.

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod review;
/// Router state
///
/// Immutable provider configuration and the upstream client.
pub mod state;
