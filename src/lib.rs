//! `<clipboard-copy>`: a custom element that copies text to the clipboard
//! when clicked or activated with Space/Enter.
//!
//! ```html
//! <clipboard-copy value="npm install" copied-label="Copied!" aria-label="Copy">Copy</clipboard-copy>
//! <clipboard-copy for="repo-url" copied-class="flash">Copy URL</clipboard-copy>
//! ```
//!
//! Call [`define`] (or `defineWith` from JS) once to register the element.

// Modules
pub mod components;
pub mod config;
pub mod dom;
pub mod element;
pub mod error;

pub use config::ElementConfig;
pub use dom::{define, define_with, register};
pub use error::CopyError;

use std::sync::Once;

static LOGGER: Once = Once::new();

/// Install the browser console logger and panic hook.
///
/// Called by [`register`]; only the first call picks the logger level.
pub fn init_logging(level: log::Level) {
    LOGGER.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(level));
        }
        #[cfg(not(target_arch = "wasm32"))]
        log::set_max_level(level.to_level_filter());
    });
}
