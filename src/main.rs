#![allow(non_snake_case)]

use clipboard_copy::components::ClipboardCopy;
use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Registration also installs the logger at the configured level
    use_hook(|| match clipboard_copy::define() {
        Ok(_) => log::info!("Starting clipboard-copy demo"),
        Err(e) => web_sys::console::error_1(&e),
    });

    rsx! {
        main {
            class: "max-w-xl mx-auto p-6 space-y-6",

            h1 { class: "text-2xl font-bold", "clipboard-copy" }

            // Literal value
            section {
                class: "flex items-center gap-3",
                code { "cargo add clipboard-copy" }
                ClipboardCopy {
                    value: "cargo add clipboard-copy",
                    aria_label: "Copy command",
                    copied_label: "Copied!",
                    copied_class: "text-green-600",
                    "Copy"
                }
            }

            // Visible input, copied through the selection
            section {
                class: "flex items-center gap-3",
                input {
                    id: "repo-url",
                    class: "border rounded px-2 py-1 flex-1",
                    value: "https://github.com/example/clipboard-copy.git",
                    readonly: true,
                }
                ClipboardCopy {
                    for_id: "repo-url",
                    aria_label: "Copy URL",
                    copied_label: "Copied!",
                    "Copy URL"
                }
            }

            // Hidden input
            section {
                class: "flex items-center gap-3",
                input { id: "token", r#type: "hidden", value: "tok_5f3a9c" }
                span { "API token" }
                ClipboardCopy {
                    for_id: "token",
                    copied_label: "Token copied",
                    "Copy token"
                }
            }

            // Arbitrary node text
            section {
                class: "space-y-2",
                pre { id: "snippet", class: "bg-muted p-3 rounded", "let answer = 42;" }
                ClipboardCopy {
                    for_id: "snippet",
                    aria_label: "Copy snippet",
                    copied_label: "Snippet copied",
                    copied_class: "font-bold underline",
                    "Copy snippet"
                }
            }
        }
    }
}
