//! Join page: load a shared session by code and list its tracks.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
