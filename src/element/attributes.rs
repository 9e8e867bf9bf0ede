//! Attribute-backed configuration of the element
//!
//! Every read goes straight to the attribute store; nothing is cached
//! between activations.

use crate::error::Result;

pub const FOR: &str = "for";
pub const VALUE: &str = "value";
pub const COPIED_LABEL: &str = "copied-label";
pub const COPIED_CLASS: &str = "copied-class";
pub const ARIA_LABEL: &str = "aria-label";
pub const TABINDEX: &str = "tabindex";
pub const ROLE: &str = "role";

/// String attributes on a host element
pub trait AttributeStore {
    fn get_attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, name: &str) -> Result<()>;
}

/// The element's class token list
pub trait ClassList {
    fn add_classes(&self, classes: &[String]) -> Result<()>;
    fn remove_classes(&self, classes: &[String]) -> Result<()>;
    fn has_class(&self, class: &str) -> bool;
}

fn reflect<E: AttributeStore + ?Sized>(element: &E, name: &str) -> String {
    element.get_attribute(name).unwrap_or_default()
}

pub fn value<E: AttributeStore + ?Sized>(element: &E) -> String {
    reflect(element, VALUE)
}

pub fn set_value<E: AttributeStore + ?Sized>(element: &E, text: &str) -> Result<()> {
    element.set_attribute(VALUE, text)
}

pub fn copied_label<E: AttributeStore + ?Sized>(element: &E) -> String {
    reflect(element, COPIED_LABEL)
}

pub fn set_copied_label<E: AttributeStore + ?Sized>(element: &E, text: &str) -> Result<()> {
    element.set_attribute(COPIED_LABEL, text)
}

pub fn copied_class<E: AttributeStore + ?Sized>(element: &E) -> String {
    reflect(element, COPIED_CLASS)
}

pub fn set_copied_class<E: AttributeStore + ?Sized>(element: &E, classes: &str) -> Result<()> {
    element.set_attribute(COPIED_CLASS, classes)
}

pub fn for_id<E: AttributeStore + ?Sized>(element: &E) -> String {
    reflect(element, FOR)
}

/// Property name (as seen from JS) to attribute name
pub const REFLECTED_PROPERTIES: [(&str, &str); 3] = [
    ("value", VALUE),
    ("copiedLabel", COPIED_LABEL),
    ("copiedClass", COPIED_CLASS),
];

/// Focusable button semantics, unless the host page already chose otherwise
pub fn ensure_defaults<E: AttributeStore + ?Sized>(element: &E) -> Result<()> {
    if !element.has_attribute(TABINDEX) {
        element.set_attribute(TABINDEX, "0")?;
    }
    if !element.has_attribute(ROLE) {
        element.set_attribute(ROLE, "button")?;
    }
    Ok(())
}

/// Split a `copied-class` value into class tokens, dropping empties
pub fn split_classes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
