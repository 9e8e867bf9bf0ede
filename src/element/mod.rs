// Platform-independent core of the clipboard-copy element

pub mod activation;
pub mod attributes;
pub mod hint;
pub mod keyboard;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use activation::{activate, Activation, Clipboard, CopyPath};
pub use attributes::{AttributeStore, ClassList};
pub use hint::{apply_hint, HintRevert, PendingRevert};
pub use keyboard::{handle_key, is_activation_key, KeyAction, KeydownTarget};
pub use source::{resolve_source, CopySource, ElementKind, SourceDocument};
