//! Keyboard activation
//!
//! Keydown only reaches an instance between its `focus` and `blur`: focus
//! attaches the handler and blur detaches it, so keys typed elsewhere
//! never activate it.

use super::activation::{activate, Activation, Clipboard};
use super::attributes::{AttributeStore, ClassList};
use super::source::SourceDocument;
use crate::error::Result;

/// Something that can have the keydown handler attached and detached
pub trait KeydownTarget {
    fn attach_keydown(&self) -> Result<()>;
    fn detach_keydown(&self) -> Result<()>;
}

/// `focus`: start listening for activation keys
pub fn focus<T: KeydownTarget + ?Sized>(target: &T) -> Result<()> {
    target.attach_keydown()
}

/// `blur`: stop listening
pub fn blur<T: KeydownTarget + ?Sized>(target: &T) -> Result<()> {
    target.detach_keydown()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space or Enter: activate and suppress the default action
    Activate,
    /// Anything else passes through untouched
    Ignore,
}

impl KeyAction {
    pub fn for_key(key: &str) -> Self {
        if key == " " || key == "Enter" {
            KeyAction::Activate
        } else {
            KeyAction::Ignore
        }
    }

    /// Space would scroll and Enter would fire a second activation
    pub fn prevents_default(self) -> bool {
        self == KeyAction::Activate
    }
}

pub fn is_activation_key(key: &str) -> bool {
    KeyAction::for_key(key) == KeyAction::Activate
}

/// Activate for a qualifying key. `None` means the key was ignored.
pub fn handle_key<E, D, C>(
    key: &str,
    element: &E,
    document: &D,
    clipboard: &C,
) -> Result<Option<Activation>>
where
    E: AttributeStore + ClassList + ?Sized,
    D: SourceDocument + ?Sized,
    C: Clipboard<D::Node> + ?Sized,
{
    match KeyAction::for_key(key) {
        KeyAction::Activate => activate(element, document, clipboard).map(Some),
        KeyAction::Ignore => Ok(None),
    }
}
