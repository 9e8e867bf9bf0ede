//! Event wiring for element instances
//!
//! The click/focus/blur/keydown handlers are created once per thread and
//! shared by every instance; they find their element through
//! `event.currentTarget`. The keydown handler is only attached between
//! `focus` and `blur`, so keyboard activation follows focus.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, KeyboardEvent};

use super::clipboard::BrowserClipboard;
use super::registry;
use crate::element::keyboard;
use crate::element::{self, Activation, HintRevert, KeyAction, KeydownTarget, PendingRevert};
use crate::error::{CopyError, Result};

type Handler = Closure<dyn FnMut(Event)>;

thread_local! {
    static CLICK: Handler = Closure::wrap(Box::new(on_click) as Box<dyn FnMut(Event)>);
    static FOCUS: Handler = Closure::wrap(Box::new(on_focus) as Box<dyn FnMut(Event)>);
    static BLUR: Handler = Closure::wrap(Box::new(on_blur) as Box<dyn FnMut(Event)>);
    static KEYDOWN: Handler = Closure::wrap(Box::new(on_keydown) as Box<dyn FnMut(Event)>);
}

fn listen(target: &Element, event: &str, handler: &'static std::thread::LocalKey<Handler>) -> Result<()> {
    handler.with(|h| target.add_event_listener_with_callback(event, h.as_ref().unchecked_ref()))?;
    Ok(())
}

fn unlisten(target: &Element, event: &str, handler: &'static std::thread::LocalKey<Handler>) -> Result<()> {
    handler.with(|h| target.remove_event_listener_with_callback(event, h.as_ref().unchecked_ref()))?;
    Ok(())
}

/// Register activation and focus tracking on a freshly constructed element
pub fn attach(element: &Element) -> Result<()> {
    listen(element, "click", &CLICK)?;
    listen(element, "focus", &FOCUS)?;
    listen(element, "blur", &BLUR)?;
    Ok(())
}

impl KeydownTarget for Element {
    fn attach_keydown(&self) -> Result<()> {
        listen(self, "keydown", &KEYDOWN)
    }

    fn detach_keydown(&self) -> Result<()> {
        unlisten(self, "keydown", &KEYDOWN)
    }
}

fn current_element(event: &Event) -> Option<Element> {
    event.current_target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn on_click(event: Event) {
    let Some(button) = current_element(&event) else { return };
    if let Err(e) = run(&button, |doc, clipboard| element::activate(&button, doc, clipboard).map(Some)) {
        log::error!("clipboard-copy activation failed: {}", e);
    }
}

fn on_focus(event: Event) {
    let Some(button) = current_element(&event) else { return };
    if let Err(e) = keyboard::focus(&button) {
        log::error!("Failed to enable keyboard activation: {}", e);
    }
}

fn on_blur(event: Event) {
    let Some(button) = current_element(&event) else { return };
    if let Err(e) = keyboard::blur(&button) {
        log::error!("Failed to disable keyboard activation: {}", e);
    }
}

fn on_keydown(event: Event) {
    let Some(button) = current_element(&event) else { return };
    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else { return };

    if KeyAction::for_key(&key).prevents_default() {
        event.prevent_default();
    }
    if let Err(e) = run(&button, |doc, clipboard| element::handle_key(&key, &button, doc, clipboard)) {
        log::error!("clipboard-copy keyboard activation failed: {}", e);
    }
}

fn run<F>(button: &Element, activation: F) -> Result<()>
where
    F: FnOnce(&web_sys::Document, &BrowserClipboard) -> Result<Option<Activation>>,
{
    let document = button
        .owner_document()
        .ok_or_else(|| CopyError::Dom("element has no owner document".to_string()))?;
    let clipboard = BrowserClipboard::new(button.clone(), registry::emit_events(&button.local_name()));

    if let Some(revert) = activation(&document, &clipboard)?.and_then(Activation::take_revert) {
        schedule_revert(button, revert)?;
    }
    Ok(())
}

/// Undo the hint on whichever of `mouseleave` / `blur` comes first.
///
/// Both listeners are `once` and share one `PendingRevert`, so the later
/// event finds the slot empty. If the element is detached first the
/// listener stays on the node and goes away with it.
fn schedule_revert(button: &Element, revert: HintRevert) -> Result<()> {
    let pending = PendingRevert::new(revert);
    let target = button.clone();
    let reset = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(e) = pending.fire(&target) {
            log::error!("Failed to reset copied hint: {}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    for event in ["mouseleave", "blur"] {
        button.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            reset.as_ref().unchecked_ref(),
            &options,
        )?;
    }

    // Owned by the JS listeners from here on
    let _ = reset.into_js_value();
    Ok(())
}
