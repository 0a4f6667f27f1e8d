//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// A card-style navigation link with title and description
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "block p-4 rounded-lg border hover:bg-gray-100",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm opacity-70", "{description}" }
        }
    }
}
