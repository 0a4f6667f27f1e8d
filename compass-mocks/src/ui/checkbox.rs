//! Checkbox component

use dioxus::prelude::*;

/// A labelled checkbox reporting its new state
#[component]
pub fn Checkbox(checked: bool, onchange: EventHandler<bool>, label: &'static str) -> Element {
    rsx! {
        label { class: "flex items-center gap-2",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            "{label}"
        }
    }
}
