#![forbid(unsafe_code)]
//! Binary for the AuxShare playlist converter. In the browser it mounts the
//! app; a native build only explains how to produce the wasm bundle.

#[cfg(target_arch = "wasm32")]
fn main() {
    auxshare_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str =
    "auxshare-ui runs in the browser only; bundle it with `trunk serve` or build for wasm32-unknown-unknown.";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(std::io::stderr().lock(), "{NATIVE_NOTICE}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_build_points_at_wasm_target() -> std::io::Result<()> {
        assert!(NATIVE_NOTICE.contains("wasm32"));
        main()
    }
}
