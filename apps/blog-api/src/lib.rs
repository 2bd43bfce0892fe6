//! # Blog API
//!
//! Actix-web application serving blog posts and the admin session gate.
//! The binary in `main.rs` wires these pieces to a real store; tests build the
//! same application over an in-memory one.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;
