//! In-memory element, document and clipboard for host-side tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use super::activation::Clipboard;
use super::attributes::{AttributeStore, ClassList};
use super::keyboard::KeydownTarget;
use super::source::{ElementKind, SourceDocument};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct FakeElement {
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    keydown: Cell<bool>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.classes.borrow_mut().push(class.to_string());
        self
    }

    pub fn keydown_attached(&self) -> bool {
        self.keydown.get()
    }
}

impl KeydownTarget for FakeElement {
    fn attach_keydown(&self) -> Result<()> {
        self.keydown.set(true);
        Ok(())
    }

    fn detach_keydown(&self) -> Result<()> {
        self.keydown.set(false);
        Ok(())
    }
}

impl AttributeStore for FakeElement {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.attributes.borrow_mut().remove(name);
        Ok(())
    }
}

impl ClassList for FakeElement {
    fn add_classes(&self, classes: &[String]) -> Result<()> {
        let mut list = self.classes.borrow_mut();
        for class in classes {
            if !list.contains(class) {
                list.push(class.clone());
            }
        }
        Ok(())
    }

    fn remove_classes(&self, classes: &[String]) -> Result<()> {
        self.classes.borrow_mut().retain(|c| !classes.contains(c));
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone)]
struct FakeNode {
    kind: ElementKind,
    value: String,
    text: String,
}

/// Nodes are addressed by their id
#[derive(Debug, Default)]
pub struct FakeDocument {
    nodes: HashMap<String, FakeNode>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(input_type: &str) -> ElementKind {
        ElementKind::Input { input_type: input_type.to_string() }
    }

    pub fn with_node(mut self, id: &str, kind: ElementKind, value: &str, text: &str) -> Self {
        self.nodes.insert(
            id.to_string(),
            FakeNode { kind, value: value.to_string(), text: text.to_string() },
        );
        self
    }
}

impl SourceDocument for FakeDocument {
    type Node = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.nodes.contains_key(id).then(|| id.to_string())
    }

    fn kind(&self, node: &String) -> ElementKind {
        self.nodes.get(node).map(|n| n.kind.clone()).unwrap_or(ElementKind::Other)
    }

    fn field_value(&self, node: &String) -> String {
        self.nodes.get(node).map(|n| n.value.clone()).unwrap_or_default()
    }

    fn text_content(&self, node: &String) -> String {
        self.nodes.get(node).map(|n| n.text.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyCall {
    Text(String),
    /// Selection copy of the field with this id
    Selection(String),
}

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    calls: RefCell<Vec<CopyCall>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CopyCall> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<CopyCall> {
        self.calls.borrow().last().cloned()
    }
}

impl Clipboard<String> for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.calls.borrow_mut().push(CopyCall::Text(text.to_string()));
    }

    fn copy_field(&self, field: &String) {
        self.calls.borrow_mut().push(CopyCall::Selection(field.clone()));
    }
}
