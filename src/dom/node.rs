//! `web_sys` implementations of the element traits

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::element::{AttributeStore, ClassList, ElementKind, SourceDocument};
use crate::error::Result;

impl AttributeStore for Element {
    fn get_attribute(&self, name: &str) -> Option<String> {
        Element::get_attribute(self, name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        Element::remove_attribute(self, name)?;
        Ok(())
    }
}

impl ClassList for Element {
    fn add_classes(&self, classes: &[String]) -> Result<()> {
        let list = self.class_list();
        for class in classes {
            list.add_1(class)?;
        }
        Ok(())
    }

    fn remove_classes(&self, classes: &[String]) -> Result<()> {
        let list = self.class_list();
        for class in classes {
            list.remove_1(class)?;
        }
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl SourceDocument for Document {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn kind(&self, node: &Element) -> ElementKind {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            ElementKind::Input { input_type: input.type_() }
        } else if node.is_instance_of::<HtmlTextAreaElement>() {
            ElementKind::TextArea
        } else {
            ElementKind::Other
        }
    }

    fn field_value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn text_content(&self, node: &Element) -> String {
        // innerText is the rendered text; SVG and other non-HTML nodes only
        // have textContent
        match node.dyn_ref::<HtmlElement>() {
            Some(html) => html.inner_text(),
            None => node.text_content().unwrap_or_default(),
        }
    }
}
