//! Transient "copied" hint: a swapped `aria-label` plus temporary classes,
//! undone on the first `mouseleave` or `blur` after activation.

use std::cell::RefCell;
use std::rc::Rc;

use super::attributes::{self, AttributeStore, ClassList, ARIA_LABEL};
use crate::error::Result;

/// Undo record for one applied hint
#[derive(Debug, Clone, PartialEq)]
pub struct HintRevert {
    classes: Vec<String>,
    original_label: Option<String>,
}

impl HintRevert {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }

    /// Remove the added classes and restore the prior label (or drop the
    /// attribute if there was none). Consumes the record.
    pub fn revert<E>(self, element: &E) -> Result<()>
    where
        E: AttributeStore + ClassList + ?Sized,
    {
        if !self.classes.is_empty() {
            element.remove_classes(&self.classes)?;
        }
        match self.original_label {
            Some(label) => element.set_attribute(ARIA_LABEL, &label),
            None => element.remove_attribute(ARIA_LABEL),
        }
    }
}

/// Show the hint if `copied-label` is set and differs from the current label.
pub fn apply_hint<E>(element: &E) -> Result<Option<HintRevert>>
where
    E: AttributeStore + ClassList + ?Sized,
{
    let hint = attributes::copied_label(element);
    let original_label = element.get_attribute(ARIA_LABEL);
    if hint.is_empty() || original_label.as_deref() == Some(hint.as_str()) {
        return Ok(None);
    }

    element.set_attribute(ARIA_LABEL, &hint)?;

    let classes = attributes::split_classes(&attributes::copied_class(element));
    if !classes.is_empty() {
        element.add_classes(&classes)?;
    }

    Ok(Some(HintRevert { classes, original_label }))
}

/// One-shot slot shared by the `mouseleave` and `blur` listeners of a
/// single activation. The first caller takes the revert; later calls no-op.
#[derive(Debug, Clone, Default)]
pub struct PendingRevert(Rc<RefCell<Option<HintRevert>>>);

impl PendingRevert {
    pub fn new(revert: HintRevert) -> Self {
        Self(Rc::new(RefCell::new(Some(revert))))
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Returns `true` if this call performed the revert
    pub fn fire<E>(&self, element: &E) -> Result<bool>
    where
        E: AttributeStore + ClassList + ?Sized,
    {
        let taken = self.0.borrow_mut().take();
        match taken {
            Some(revert) => {
                revert.revert(element)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
