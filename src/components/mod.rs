// UI Components

pub mod clipboard_copy;

pub use clipboard_copy::ClipboardCopy;
