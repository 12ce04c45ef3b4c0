#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! AuxShare web UI.
//!
//! Layout:
//! - `core/`: DOM-free state, API contract, errors, config and logging
//! - `routes.rs`: the route table
//! - `features/`: one slice per page (pure logic plus a wasm-only view)
//! - `services/`: browser HTTP transport (wasm only)
//! - `app/` and `components/`: Yew root and shared chrome (wasm only)

pub mod core;
pub mod features;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
