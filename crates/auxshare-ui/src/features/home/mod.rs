//! Home page: convert a playlist link and show the result.
//!
//! # Design
//! - The session manager owns request state; the page only keeps form input.
//! - Target platforms come from the backend, with a built-in fallback.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
