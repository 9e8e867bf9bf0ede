//! Activation: resolve one copy source, copy it, then show the hint.

use super::attributes::{AttributeStore, ClassList};
use super::hint::{apply_hint, HintRevert};
use super::source::{resolve_source, CopySource, SourceDocument};
use crate::error::Result;

/// Platform clipboard primitives. Both are fire-and-forget: failures are
/// reported by the implementation, never returned to the activation.
pub trait Clipboard<N: ?Sized> {
    /// Write plain text to the system clipboard
    fn write_text(&self, text: &str);
    /// Select the field's content and trigger the native copy action
    fn copy_field(&self, field: &N);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Text,
    Selection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Neither `value` nor `for` produced a source; nothing was written
    Skipped {
        revert: Option<HintRevert>,
    },
    Copied {
        path: CopyPath,
        /// Present when a hint was shown and awaits `mouseleave`/`blur`
        revert: Option<HintRevert>,
    },
}

impl Activation {
    pub fn take_revert(self) -> Option<HintRevert> {
        match self {
            Activation::Copied { revert, .. } | Activation::Skipped { revert } => revert,
        }
    }
}

pub fn copy_source<N, C>(source: CopySource<N>, clipboard: &C) -> CopyPath
where
    C: Clipboard<N> + ?Sized,
{
    match source {
        CopySource::LiteralText(text)
        | CopySource::HiddenField(text)
        | CopySource::GenericNode(text) => {
            clipboard.write_text(&text);
            CopyPath::Text
        }
        CopySource::SelectableField(node) => {
            clipboard.copy_field(&node);
            CopyPath::Selection
        }
    }
}

/// Run one activation. Attributes are read fresh each time.
///
/// Without a resolvable source the clipboard is left alone, but the hint
/// is still applied.
pub fn activate<E, D, C>(element: &E, document: &D, clipboard: &C) -> Result<Activation>
where
    E: AttributeStore + ClassList + ?Sized,
    D: SourceDocument + ?Sized,
    C: Clipboard<D::Node> + ?Sized,
{
    let path = match resolve_source(element, document) {
        Some(source) => {
            log::debug!("clipboard-copy: copying from {}", source.label());
            Some(copy_source(source, clipboard))
        }
        None => {
            log::debug!("clipboard-copy: no copy source, skipping clipboard write");
            None
        }
    };

    let revert = apply_hint(element)?;
    Ok(match path {
        Some(path) => Activation::Copied { path, revert },
        None => Activation::Skipped { revert },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::source::ElementKind;
    use crate::element::testing::{CopyCall, FakeDocument, FakeElement, RecordingClipboard};

    #[test]
    fn test_literal_value_copied_regardless_of_for() {
        let doc = FakeDocument::new().with_node("x", ElementKind::Other, "", "ignored");
        let clipboard = RecordingClipboard::new();

        for value in ["hello", "  spaced  ", "multi\nline", "ünïcødé"] {
            let el = FakeElement::new()
                .with_attribute("value", value)
                .with_attribute("for", "x");
            let outcome = activate(&el, &doc, &clipboard).unwrap();
            assert_eq!(outcome, Activation::Copied { path: CopyPath::Text, revert: None });
            assert_eq!(clipboard.last(), Some(CopyCall::Text(value.to_string())));
        }
        assert_eq!(clipboard.calls().len(), 4);
    }

    #[test]
    fn test_hidden_input_uses_text_path() {
        let doc = FakeDocument::new().with_node("x", FakeDocument::input("hidden"), "secret", "");
        let el = FakeElement::new().with_attribute("for", "x");
        let clipboard = RecordingClipboard::new();

        let outcome = activate(&el, &doc, &clipboard).unwrap();
        assert_eq!(outcome, Activation::Copied { path: CopyPath::Text, revert: None });
        assert_eq!(clipboard.calls(), vec![CopyCall::Text("secret".to_string())]);
    }

    #[test]
    fn test_visible_input_uses_selection_path() {
        let doc = FakeDocument::new().with_node("x", FakeDocument::input("text"), "typed", "");
        let el = FakeElement::new().with_attribute("for", "x");
        let clipboard = RecordingClipboard::new();

        let outcome = activate(&el, &doc, &clipboard).unwrap();
        assert_eq!(outcome, Activation::Copied { path: CopyPath::Selection, revert: None });
        assert_eq!(clipboard.calls(), vec![CopyCall::Selection("x".to_string())]);
    }

    #[test]
    fn test_div_text_copied() {
        let doc = FakeDocument::new().with_node("x", ElementKind::Other, "", "hello");
        let el = FakeElement::new().with_attribute("for", "x");
        let clipboard = RecordingClipboard::new();

        activate(&el, &doc, &clipboard).unwrap();
        assert_eq!(clipboard.calls(), vec![CopyCall::Text("hello".to_string())]);
    }

    #[test]
    fn test_no_source_skips_write() {
        let doc = FakeDocument::new();
        let clipboard = RecordingClipboard::new();

        let el = FakeElement::new();
        assert_eq!(activate(&el, &doc, &clipboard).unwrap(), Activation::Skipped { revert: None });

        let el = FakeElement::new().with_attribute("for", "");
        assert_eq!(activate(&el, &doc, &clipboard).unwrap(), Activation::Skipped { revert: None });

        assert!(clipboard.calls().is_empty());
    }

    #[test]
    fn test_unresolved_for_still_shows_hint() {
        let doc = FakeDocument::new();
        let clipboard = RecordingClipboard::new();
        let el = FakeElement::new()
            .with_attribute("for", "missing")
            .with_attribute("aria-label", "Copy")
            .with_attribute("copied-label", "Copied!")
            .with_attribute("copied-class", "flash");

        let outcome = activate(&el, &doc, &clipboard).unwrap();
        assert!(matches!(outcome, Activation::Skipped { revert: Some(_) }));
        assert!(clipboard.calls().is_empty());
        assert_eq!(el.get_attribute("aria-label").as_deref(), Some("Copied!"));
        assert!(el.has_class("flash"));

        outcome.take_revert().unwrap().revert(&el).unwrap();
        assert_eq!(el.get_attribute("aria-label").as_deref(), Some("Copy"));
        assert!(!el.has_class("flash"));
    }

    #[test]
    fn test_hint_reverts_after_blur() {
        let doc = FakeDocument::new();
        let el = FakeElement::new()
            .with_attribute("value", "abc")
            .with_attribute("aria-label", "Copy")
            .with_attribute("copied-label", "Copied!")
            .with_attribute("copied-class", "flash");
        let clipboard = RecordingClipboard::new();

        let revert = activate(&el, &doc, &clipboard).unwrap().take_revert().unwrap();
        assert_eq!(el.get_attribute("aria-label").as_deref(), Some("Copied!"));
        assert!(el.has_class("flash"));

        // A second activation while the hint is showing copies again but
        // does not stack another hint.
        let again = activate(&el, &doc, &clipboard).unwrap();
        assert_eq!(again, Activation::Copied { path: CopyPath::Text, revert: None });

        revert.revert(&el).unwrap();
        assert_eq!(el.get_attribute("aria-label").as_deref(), Some("Copy"));
        assert!(!el.has_class("flash"));
        assert_eq!(clipboard.calls().len(), 2);
    }

    #[test]
    fn test_attributes_read_fresh_each_activation() {
        let doc = FakeDocument::new().with_node("x", ElementKind::Other, "", "node text");
        let el = FakeElement::new().with_attribute("value", "first");
        let clipboard = RecordingClipboard::new();

        activate(&el, &doc, &clipboard).unwrap();
        el.set_attribute("value", "second").unwrap();
        activate(&el, &doc, &clipboard).unwrap();
        el.remove_attribute("value").unwrap();
        el.set_attribute("for", "x").unwrap();
        activate(&el, &doc, &clipboard).unwrap();

        assert_eq!(
            clipboard.calls(),
            vec![
                CopyCall::Text("first".to_string()),
                CopyCall::Text("second".to_string()),
                CopyCall::Text("node text".to_string()),
            ]
        );
    }
}
