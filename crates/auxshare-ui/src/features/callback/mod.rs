//! OAuth callback page.
//!
//! # Design
//! - Only reports what the provider sent back; there is no token exchange.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
