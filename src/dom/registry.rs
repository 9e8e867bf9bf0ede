//! Custom element registration
//!
//! `customElements.define` needs a real JS class extending `HTMLElement`,
//! so a small shim declares it and forwards the constructor,
//! `connectedCallback` and the reflected properties back into Rust.

use std::cell::RefCell;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::listeners;
use crate::config::{ElementConfig, TagConfigs};
use crate::element::attributes::{self, REFLECTED_PROPERTIES};
use crate::error::{CopyError, Result};

#[wasm_bindgen(inline_js = r#"
export function define_element(name, hooks) {
    if (customElements.get(name)) {
        return false;
    }
    class ClipboardCopyElement extends HTMLElement {
        constructor() {
            super();
            hooks.construct(this);
        }
        connectedCallback() {
            hooks.connected(this);
        }
    }
    for (const property of hooks.properties) {
        Object.defineProperty(ClipboardCopyElement.prototype, property, {
            get() { return hooks.get(this, property); },
            set(value) { hooks.set(this, property, String(value)); },
            configurable: true,
        });
    }
    customElements.define(name, ClipboardCopyElement);
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(name: &str, hooks: &Object) -> std::result::Result<bool, JsValue>;
}

thread_local! {
    static CONFIGS: RefCell<TagConfigs> = RefCell::new(TagConfigs::default());
}

/// Whether instances of `tag_name` dispatch copy events
pub fn emit_events(tag_name: &str) -> bool {
    CONFIGS.with(|c| c.borrow().emit_events(tag_name))
}

/// Register the element under the default `clipboard-copy` tag
#[wasm_bindgen]
pub fn define() -> std::result::Result<bool, JsValue> {
    register(ElementConfig::default()).map_err(JsValue::from)
}

/// Register with options, e.g. `defineWith({ tagName: "copy-button" })`.
/// Returns `false` if the tag was already defined.
#[wasm_bindgen(js_name = defineWith)]
pub fn define_with(options: JsValue) -> std::result::Result<bool, JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        ElementConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| CopyError::Config(e.to_string()))?
    };
    register(config).map_err(JsValue::from)
}

pub fn register(config: ElementConfig) -> Result<bool> {
    config.validate()?;
    crate::init_logging(config.level()?);

    let tag_name = config.tag_name.clone();
    let defined = define_element(&tag_name, &hooks()?)?;
    if defined {
        CONFIGS.with(|c| c.borrow_mut().record(config));
        log::info!("Registered <{}>", tag_name);
    } else {
        log::debug!("<{}> is already defined, skipping", tag_name);
    }
    Ok(defined)
}

fn hooks() -> Result<Object> {
    let hooks = Object::new();

    let construct = Closure::wrap(Box::new(|el: Element| {
        if let Err(e) = listeners::attach(&el) {
            log::error!("Failed to attach clipboard-copy listeners: {}", e);
        }
    }) as Box<dyn FnMut(Element)>);

    let connected = Closure::wrap(Box::new(|el: Element| {
        if let Err(e) = attributes::ensure_defaults(&el) {
            log::error!("Failed to set clipboard-copy defaults: {}", e);
        }
    }) as Box<dyn FnMut(Element)>);

    let get = Closure::wrap(Box::new(|el: Element, property: String| get_property(&el, &property))
        as Box<dyn FnMut(Element, String) -> String>);

    let set = Closure::wrap(Box::new(|el: Element, property: String, value: String| {
        if let Err(e) = set_property(&el, &property, &value) {
            log::error!("Failed to set {}: {}", property, e);
        }
    }) as Box<dyn FnMut(Element, String, String)>);

    let properties: Array = REFLECTED_PROPERTIES
        .iter()
        .map(|(property, _)| JsValue::from_str(property))
        .collect();

    // Element definitions live as long as the page, so JS owns the closures
    Reflect::set(&hooks, &"construct".into(), &construct.into_js_value())?;
    Reflect::set(&hooks, &"connected".into(), &connected.into_js_value())?;
    Reflect::set(&hooks, &"get".into(), &get.into_js_value())?;
    Reflect::set(&hooks, &"set".into(), &set.into_js_value())?;
    Reflect::set(&hooks, &"properties".into(), &properties)?;

    Ok(hooks)
}

fn get_property(el: &Element, property: &str) -> String {
    match property {
        "value" => attributes::value(el),
        "copiedLabel" => attributes::copied_label(el),
        "copiedClass" => attributes::copied_class(el),
        _ => String::new(),
    }
}

fn set_property(el: &Element, property: &str, value: &str) -> Result<()> {
    match property {
        "value" => attributes::set_value(el, value),
        "copiedLabel" => attributes::set_copied_label(el, value),
        "copiedClass" => attributes::set_copied_class(el, value),
        _ => Err(CopyError::Dom(format!("unknown property '{}'", property))),
    }
}
