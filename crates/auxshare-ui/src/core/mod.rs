//! Core, DOM-free primitives and helpers for the Web UI.
pub mod client;
pub mod config;
pub mod error;
pub mod logic;
pub mod platforms;
pub mod session;
pub mod store;
pub mod telemetry;
