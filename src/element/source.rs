//! Copy source resolution
//!
//! Decides, per activation, where the copied text comes from: the literal
//! `value` attribute, or the element named by `for`.

use super::attributes::{self, AttributeStore};

/// What kind of element a `for` id resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// `<input>`, with its `type` property (`"text"`, `"hidden"`, ...)
    Input { input_type: String },
    TextArea,
    Other,
}

impl ElementKind {
    pub fn is_hidden_input(&self) -> bool {
        matches!(self, ElementKind::Input { input_type } if input_type.eq_ignore_ascii_case("hidden"))
    }
}

/// The document the element lives in
pub trait SourceDocument {
    /// Handle to an element in the document
    type Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn kind(&self, node: &Self::Node) -> ElementKind;
    /// Current `.value` of an input or textarea
    fn field_value(&self, node: &Self::Node) -> String;
    /// Rendered text of an arbitrary element
    fn text_content(&self, node: &Self::Node) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CopySource<N> {
    LiteralText(String),
    HiddenField(String),
    /// Visible input or textarea, copied by selecting its content
    SelectableField(N),
    GenericNode(String),
}

impl<N> CopySource<N> {
    pub fn label(&self) -> &'static str {
        match self {
            CopySource::LiteralText(_) => "literal value",
            CopySource::HiddenField(_) => "hidden input",
            CopySource::SelectableField(_) => "selectable field",
            CopySource::GenericNode(_) => "node text",
        }
    }
}

/// Resolve the copy source for one activation.
///
/// A non-empty `value` wins over `for`. Returns `None` when neither yields
/// an element to copy from.
pub fn resolve_source<E, D>(element: &E, document: &D) -> Option<CopySource<D::Node>>
where
    E: AttributeStore + ?Sized,
    D: SourceDocument + ?Sized,
{
    let text = attributes::value(element);
    if !text.is_empty() {
        return Some(CopySource::LiteralText(text));
    }

    let id = attributes::for_id(element);
    if id.is_empty() {
        return None;
    }

    let node = document.element_by_id(&id)?;
    let source = match document.kind(&node) {
        kind if kind.is_hidden_input() => CopySource::HiddenField(document.field_value(&node)),
        ElementKind::Input { .. } | ElementKind::TextArea => CopySource::SelectableField(node),
        ElementKind::Other => CopySource::GenericNode(document.text_content(&node)),
    };
    Some(source)
}
