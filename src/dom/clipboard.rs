//! Browser clipboard primitives
//!
//! Text goes through the async Clipboard API; visible form fields are
//! copied by selecting their content and running the native copy command.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element, Event, EventInit, HtmlDocument, HtmlInputElement, HtmlTextAreaElement};

use crate::element::Clipboard;
use crate::error::{js_error_message, CopyError};

pub const COPY_EVENT: &str = "clipboard-copy";
pub const COPY_ERROR_EVENT: &str = "clipboard-copy-error";

/// Write text to the system clipboard
///
/// Uses the Web Clipboard API. Resolves once the browser accepted the text.
pub async fn copy_to_clipboard(text: &str) -> Result<(), CopyError> {
    let window = web_sys::window().ok_or(CopyError::NoWindow)?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| CopyError::Clipboard(js_error_message(&e)))
}

/// Where a rejected Clipboard API write ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionRoute {
    /// Caught, logged and dispatched as `clipboard-copy-error`
    ErrorEvent,
    /// Left unhandled for the page's `unhandledrejection` listeners
    Unhandled,
}

impl RejectionRoute {
    pub fn for_config(emit_events: bool) -> Self {
        if emit_events {
            RejectionRoute::ErrorEvent
        } else {
            RejectionRoute::Unhandled
        }
    }
}

/// Clipboard bound to the activated element, which receives the
/// success/failure events.
pub struct BrowserClipboard {
    button: Element,
    emit_events: bool,
}

impl BrowserClipboard {
    pub fn new(button: Element, emit_events: bool) -> Self {
        Self { button, emit_events }
    }
}

impl Clipboard<Element> for BrowserClipboard {
    fn write_text(&self, text: &str) {
        if RejectionRoute::for_config(self.emit_events) == RejectionRoute::Unhandled {
            match web_sys::window() {
                Some(window) => {
                    let _pending = window.navigator().clipboard().write_text(text);
                }
                None => log::warn!("Failed to copy to clipboard: {}", CopyError::NoWindow),
            }
            return;
        }

        let text = text.to_string();
        let button = self.button.clone();

        // Not awaited by the activation
        wasm_bindgen_futures::spawn_local(async move {
            let result = copy_to_clipboard(&text).await;
            if let Err(e) = &result {
                log::warn!("Failed to copy to clipboard: {}", e);
            }
            notify(&button, result);
        });
    }

    fn copy_field(&self, field: &Element) {
        let result = select_and_copy(field);
        if let Err(e) = &result {
            log::warn!("Failed to copy field contents: {}", e);
        }
        if self.emit_events {
            notify(&self.button, result);
        }
    }
}

fn select_and_copy(field: &Element) -> Result<(), CopyError> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.select();
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.select();
    } else {
        return Err(CopyError::Dom("copy target is not a text field".to_string()));
    }

    let document = field
        .owner_document()
        .ok_or_else(|| CopyError::Dom("copy target has no document".to_string()))?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| CopyError::Dom("copy target is not in an HTML document".to_string()))?;

    let copied = document.exec_command("copy")?;

    // Drop the selection so the field doesn't stay highlighted
    if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
        if let Err(e) = selection.remove_all_ranges() {
            log::debug!("Failed to clear selection after copy: {:?}", e);
        }
    }

    if copied {
        Ok(())
    } else {
        Err(CopyError::Clipboard("copy command was rejected".to_string()))
    }
}

/// Dispatch `clipboard-copy` or `clipboard-copy-error` on the element
fn notify(button: &Element, result: Result<(), CopyError>) {
    let event = match result {
        Ok(()) => {
            let init = EventInit::new();
            init.set_bubbles(true);
            Event::new_with_event_init_dict(COPY_EVENT, &init)
        }
        Err(e) => {
            let init = CustomEventInit::new();
            init.set_bubbles(true);
            init.set_detail(&JsValue::from_str(&e.to_string()));
            CustomEvent::new_with_event_init_dict(COPY_ERROR_EVENT, &init).map(|ev| ev.unchecked_into::<Event>())
        }
    };

    match event {
        Ok(event) => {
            if let Err(e) = button.dispatch_event(&event) {
                log::error!("Failed to dispatch {}: {:?}", event.type_(), e);
            }
        }
        Err(e) => log::error!("Failed to create clipboard event: {:?}", e),
    }
}
