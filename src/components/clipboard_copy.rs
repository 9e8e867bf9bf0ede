use dioxus::prelude::*;

/// `<clipboard-copy>` wrapper for Dioxus views
///
/// The element must be registered first (see [`crate::define`]). Either
/// `value` or `for_id` selects what gets copied; `value` wins if both are set.
#[component]
pub fn ClipboardCopy(
    value: Option<String>,
    for_id: Option<String>,
    copied_label: Option<String>,
    copied_class: Option<String>,
    aria_label: Option<String>,
    class: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        clipboard-copy {
            "value": value,
            "for": for_id,
            "copied-label": copied_label,
            "copied-class": copied_class,
            "aria-label": aria_label,
            "class": class,
            {children}
        }
    }
}

