//! Page-level feature slices.
//!
//! Each slice keeps DOM-free helpers in `logic` (tested natively) and its Yew
//! view behind the wasm gate.

pub mod callback;
pub mod home;
pub mod join;
