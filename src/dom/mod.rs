// Browser binding: web_sys implementations, listeners and registration

pub mod clipboard;
pub mod listeners;
pub mod node;
pub mod registry;

pub use clipboard::{copy_to_clipboard, BrowserClipboard, COPY_ERROR_EVENT, COPY_EVENT};
pub use registry::{define, define_with, register};
