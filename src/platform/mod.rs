//! Browser platform layer
//!
//! Handles everything that touches the DOM:
//! - Canvas stage and 2D surface
//! - Host push/handle channel
//! - Scoped window listeners
//! - Exported hooks (`RaceTrackHook`, `CopyLinkHook`)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod clipboard;
#[cfg(target_arch = "wasm32")]
pub mod hook;
#[cfg(target_arch = "wasm32")]
pub mod listener;

/// Install the panic hook and console logger once per page
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // A second hook on the same page finds the logger already installed.
    if console_log::init_with_level(level).is_ok() {
        log::info!("Robot Race track logging at {}", level);
    }
}
